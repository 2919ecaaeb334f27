use serde::{Deserialize, Serialize};

/// Base reference costs for a destination, in USD, before any trip-style
/// multiplier is applied. Flight is a one-time cost; the rest accrue per
/// night/day of the stay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostProfile {
    pub flight: f64,
    pub accommodation_per_night: f64,
    pub food_per_day: f64,
    pub activities_per_day: f64,
}

/// Supported destinations, in table order. The first entry doubles as the
/// fallback profile for unrecognized destinations.
pub const DESTINATIONS: [&str; 3] = ["New York", "Paris", "Tokyo"];

const NEW_YORK: CostProfile = CostProfile {
    flight: 1200.0,
    accommodation_per_night: 200.0,
    food_per_day: 60.0,
    activities_per_day: 100.0,
};

const PARIS: CostProfile = CostProfile {
    flight: 1500.0,
    accommodation_per_night: 180.0,
    food_per_day: 50.0,
    activities_per_day: 80.0,
};

const TOKYO: CostProfile = CostProfile {
    flight: 1800.0,
    accommodation_per_night: 150.0,
    food_per_day: 40.0,
    activities_per_day: 70.0,
};

/// Look up a destination's cost profile, if it is in the table.
pub fn find_cost_profile(destination: &str) -> Option<CostProfile> {
    match destination {
        "New York" => Some(NEW_YORK),
        "Paris" => Some(PARIS),
        "Tokyo" => Some(TOKYO),
        _ => None,
    }
}

/// Look up a destination's cost profile, falling back to the first listed
/// destination when unrecognized. Unknown destinations are permitted, not
/// errors.
pub fn cost_profile(destination: &str) -> CostProfile {
    find_cost_profile(destination).unwrap_or_else(|| {
        tracing::debug!(
            "Unknown destination '{}', falling back to {}",
            destination,
            DESTINATIONS[0]
        );
        NEW_YORK
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_destinations_resolve() {
        assert_eq!(cost_profile("Paris").flight, 1500.0);
        assert_eq!(cost_profile("Tokyo").accommodation_per_night, 150.0);
        assert_eq!(cost_profile("New York").activities_per_day, 100.0);
    }

    #[test]
    fn test_unknown_destination_falls_back_to_first_listed() {
        assert_eq!(cost_profile("Atlantis"), cost_profile(DESTINATIONS[0]));
        assert!(find_cost_profile("Atlantis").is_none());
    }
}
