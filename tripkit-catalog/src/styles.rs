use serde::{Deserialize, Serialize};

/// Spending tiers a traveller can plan against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStyle {
    Budget,
    Comfort,
    Luxury,
}

/// Per-category cost multipliers for a trip style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryMultipliers {
    pub flight: f64,
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
}

impl TripStyle {
    pub const ALL: [TripStyle; 3] = [TripStyle::Budget, TripStyle::Comfort, TripStyle::Luxury];

    pub fn label(&self) -> &'static str {
        match self {
            TripStyle::Budget => "Budget",
            TripStyle::Comfort => "Comfort",
            TripStyle::Luxury => "Luxury",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TripStyle::Budget => "Hostels, public transport, local eateries",
            TripStyle::Comfort => "3-star hotels, occasional taxis, casual restaurants",
            TripStyle::Luxury => "4-5 star hotels, private transport, fine dining",
        }
    }

    pub fn multipliers(&self) -> CategoryMultipliers {
        match self {
            TripStyle::Budget => CategoryMultipliers {
                flight: 1.0,
                accommodation: 0.7,
                food: 0.6,
                activities: 0.5,
            },
            TripStyle::Comfort => CategoryMultipliers {
                flight: 1.0,
                accommodation: 1.0,
                food: 1.0,
                activities: 1.0,
            },
            TripStyle::Luxury => CategoryMultipliers {
                flight: 1.5,
                accommodation: 2.5,
                food: 2.0,
                activities: 2.0,
            },
        }
    }

    /// Flight-only multiplier used by the price-trend series. Budget and
    /// Comfort share economy fares; Luxury prices premium cabins.
    pub fn flight_multiplier(&self) -> f64 {
        match self {
            TripStyle::Budget | TripStyle::Comfort => 1.0,
            TripStyle::Luxury => 1.5,
        }
    }
}
