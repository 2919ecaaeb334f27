pub mod config;
pub mod estimator;
pub mod goal;
pub mod models;

pub use config::{PlannerConfig, ZeroWindowPolicy};
pub use estimator::{PlanError, SavingsEstimator};
pub use goal::{GoalStatus, SavingsGoal};
pub use models::{CostBreakdown, SavingsPlan, TripRequest};
