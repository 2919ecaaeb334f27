pub mod money;

pub use money::{Currency, KRW_PER_USD};
