use chrono::{Months, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tripkit_catalog::{routes, seasons, TripStyle};

/// Points per generated series: one per month for the coming year.
pub const SERIES_MONTHS: u32 = 12;

/// One month on the illustrative price-trend chart. Prices are USD, rounded
/// to whole dollars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    /// Human-readable "Mon YYYY" label
    pub month: String,
    pub price: i64,
    /// Below the style-adjusted sticker price. Deliberately compared against
    /// the undamped base, not this month's seasonal price.
    pub is_low_price: bool,
}

/// Generate the twelve-month synthetic price series for a route. Noise is
/// drawn from the caller's `Rng` so tests can seed it; each call regenerates
/// fresh variation.
pub fn generate_series<R: Rng>(
    destination: &str,
    origin: &str,
    style: TripStyle,
    as_of: NaiveDate,
    rng: &mut R,
) -> Vec<PricePoint> {
    let base_price = routes::route_base_price(origin, destination);
    let multipliers = seasons::seasonal_multipliers(destination);
    let style_multiplier = style.flight_multiplier();
    let sticker_price = base_price * style_multiplier;

    let series: Vec<PricePoint> = (0..SERIES_MONTHS)
        .map(|i| {
            let month = as_of + Months::new(i);
            let season = seasons::Season::from_date(month);
            // ±10% variation, uniform per point
            let noise = rng.gen_range(0.9..1.1);
            let price =
                (base_price * multipliers.for_season(season) * noise * style_multiplier).round()
                    as i64;
            PricePoint {
                month: month.format("%b %Y").to_string(),
                price,
                is_low_price: (price as f64) < sticker_price,
            }
        })
        .collect();

    tracing::debug!(
        "Generated {}-point trend for {} from {} ({} class, base {:.0})",
        series.len(),
        destination,
        origin,
        style.label(),
        base_price
    );
    series
}
