use crate::config::{PlannerConfig, ZeroWindowPolicy};
use crate::models::{CostBreakdown, SavingsPlan, TripRequest};
use chrono::{Datelike, NaiveDate};
use tripkit_catalog::{destinations, routes};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Both arrival and departure dates are required")]
    MissingDate,

    #[error("Departure date must be after arrival date")]
    InvalidRange,

    #[error("Arrival date must be in the future")]
    PastArrival,

    #[error("Trip is less than one month away; no savings window")]
    ZeroSavingsWindow,
}

/// Computes savings plans from trip requests and the static cost tables.
/// Pure: holds no cache, so re-invoking with a changed tier reflects the new
/// tier immediately.
pub struct SavingsEstimator {
    config: PlannerConfig,
}

impl SavingsEstimator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Validate the request and derive a savings plan. Validation runs in
    /// order (missing dates, range, past arrival); the first failure wins.
    pub fn estimate(&self, request: &TripRequest, today: NaiveDate) -> Result<SavingsPlan, PlanError> {
        let (arrival, departure) = match (request.arrival, request.departure) {
            (Some(arrival), Some(departure)) => (arrival, departure),
            _ => return Err(PlanError::MissingDate),
        };
        if arrival >= departure {
            return Err(PlanError::InvalidRange);
        }
        if arrival <= today {
            return Err(PlanError::PastArrival);
        }

        let stay_duration_days = (departure - arrival).num_days();
        let mut months_to_save = whole_months_between(today, arrival);
        if months_to_save == 0 {
            match self.config.zero_window_policy {
                ZeroWindowPolicy::ClampToOneMonth => months_to_save = 1,
                ZeroWindowPolicy::Reject => return Err(PlanError::ZeroSavingsWindow),
            }
        }

        let profile = destinations::find_cost_profile(&request.destination)
            .unwrap_or_else(|| destinations::cost_profile(&self.config.fallback_destination));
        let multipliers = request.style.multipliers();

        // With an origin the flight is priced off the route matrix; the
        // destination profile's flight cost is the originless fallback.
        let flight_base = match &request.origin {
            Some(origin) => routes::route_base_price(origin, &request.destination),
            None => profile.flight,
        };

        let days = stay_duration_days as f64;
        let breakdown = CostBreakdown {
            flight: flight_base * multipliers.flight,
            accommodation: profile.accommodation_per_night * multipliers.accommodation * days,
            food: profile.food_per_day * multipliers.food * days,
            activities: profile.activities_per_day * multipliers.activities * days,
        };
        let total_cost = breakdown.total();
        let monthly_savings = (total_cost / months_to_save as f64).ceil();

        tracing::debug!(
            "Estimated {} trip to {}: total {:.2}, {:.0}/month over {} months",
            request.style.label(),
            request.destination,
            total_cost,
            monthly_savings,
            months_to_save
        );

        Ok(SavingsPlan {
            total_cost,
            monthly_savings,
            stay_duration_days,
            months_to_save,
            breakdown,
        })
    }
}

impl Default for SavingsEstimator {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// Whole calendar months from `from` to `to`, floored. A partial month does
/// not count: Jan 20 to Mar 15 is one month.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to < from {
        return 0;
    }
    let mut months =
        i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month());
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0)
}
