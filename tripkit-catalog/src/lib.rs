pub mod destinations;
pub mod routes;
pub mod seasons;
pub mod styles;

pub use destinations::{cost_profile, find_cost_profile, CostProfile, DESTINATIONS};
pub use routes::{route_base_price, DEFAULT_ROUTE_PRICE, ROUTE_CITIES};
pub use seasons::{seasonal_multipliers, Season, SeasonalMultipliers};
pub use styles::{CategoryMultipliers, TripStyle};
