pub mod chart;
pub mod generator;

pub use chart::{axis_bounds, best_booking_month};
pub use generator::{generate_series, PricePoint, SERIES_MONTHS};
