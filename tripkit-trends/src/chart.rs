use crate::generator::PricePoint;
use tripkit_shared::Currency;

/// The cheapest month in a series: the "best time to book" callout. Ties go
/// to the earliest month.
pub fn best_booking_month(points: &[PricePoint]) -> Option<&PricePoint> {
    points.iter().min_by_key(|p| p.price)
}

/// Vertical-axis bounds for a price chart in the display currency: min/max
/// padded by 10% and rounded outward to the currency's axis unit.
pub fn axis_bounds(points: &[PricePoint], currency: Currency) -> Option<(i64, i64)> {
    let mut lowest = f64::INFINITY;
    let mut highest = f64::NEG_INFINITY;
    for point in points {
        let display = currency.display_amount(point.price as f64);
        lowest = lowest.min(display);
        highest = highest.max(display);
    }
    if points.is_empty() {
        return None;
    }

    let unit = currency.axis_unit() as f64;
    let low = ((lowest * 0.9 / unit).floor() * unit) as i64;
    let high = ((highest * 1.1 / unit).ceil() * unit) as i64;
    Some((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, price: i64) -> PricePoint {
        PricePoint {
            month: month.to_string(),
            price,
            is_low_price: false,
        }
    }

    #[test]
    fn test_best_booking_month_is_first_minimum() {
        let points = vec![
            point("Sep 2026", 1400),
            point("Oct 2026", 1050),
            point("Nov 2026", 1050),
            point("Dec 2026", 1600),
        ];
        let best = best_booking_month(&points).unwrap();
        assert_eq!(best.month, "Oct 2026");
        assert_eq!(best.price, 1050);
    }

    #[test]
    fn test_usd_axis_bounds_round_to_hundreds() {
        let points = vec![point("Sep 2026", 1050), point("Oct 2026", 1600)];
        // low: floor(1050 * 0.9 / 100) * 100 = 900
        // high: ceil(1600 * 1.1 / 100) * 100 = 1800
        assert_eq!(axis_bounds(&points, Currency::Usd), Some((900, 1800)));
    }

    #[test]
    fn test_krw_axis_bounds_convert_then_round_to_ten_thousands() {
        let points = vec![point("Sep 2026", 1000), point("Oct 2026", 1000)];
        // 1000 USD -> 1,315,000 KRW; *0.9 = 1,183,500 -> floor to 1,180,000
        // *1.1 = 1,446,500 -> ceil to 1,450,000
        assert_eq!(
            axis_bounds(&points, Currency::Krw),
            Some((1_180_000, 1_450_000))
        );
    }

    #[test]
    fn test_empty_series_has_no_bounds() {
        assert_eq!(axis_bounds(&[], Currency::Usd), None);
        assert!(best_booking_month(&[]).is_none());
    }
}
