use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripkit_catalog::TripStyle;

/// One trip the user wants to budget for. Ephemeral: built from form input
/// for a single estimate and discarded afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    /// Departure city. When present, the flight cost is priced from the
    /// route table instead of the destination profile.
    pub origin: Option<String>,
    pub style: TripStyle,
    pub arrival: Option<NaiveDate>,
    pub departure: Option<NaiveDate>,
}

/// Per-category trip costs in USD. Accommodation, food and activities are
/// already scaled by the stay duration; flight is one-time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub flight: f64,
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.flight + self.accommodation + self.food + self.activities
    }
}

/// A computed savings plan. Fully determined by the request and the static
/// tables; recomputed and replaced wholesale on every trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub total_cost: f64,
    pub monthly_savings: f64,
    pub stay_duration_days: i64,
    pub months_to_save: i64,
    pub breakdown: CostBreakdown,
}
