use serde::{Deserialize, Serialize};

/// Fixed exchange rate (1 USD to KRW). There is no live exchange feed;
/// every KRW figure in the planner is derived from this constant.
pub const KRW_PER_USD: f64 = 1315.0;

/// Display currencies supported by the planner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Usd,
    Krw,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Krw => "KRW",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Krw => "₩",
        }
    }

    /// Rounding unit for chart axis bounds: small-denomination currencies
    /// snap to 100, large-denomination ones to 10000.
    pub fn axis_unit(&self) -> i64 {
        match self {
            Currency::Usd => 100,
            Currency::Krw => 10_000,
        }
    }

    /// Convert an internal USD amount to this currency's display amount.
    /// KRW amounts are rounded to whole won.
    pub fn display_amount(&self, amount_usd: f64) -> f64 {
        match self {
            Currency::Usd => amount_usd,
            Currency::Krw => (amount_usd * KRW_PER_USD).round(),
        }
    }

    /// Format an internal USD amount for display. USD renders with two
    /// decimals ("$1,234.56"), KRW converts by the fixed rate and renders
    /// whole won ("₩1,623,045").
    pub fn format(&self, amount_usd: f64) -> String {
        match self {
            Currency::Usd => {
                let cents = (amount_usd * 100.0).round() as i64;
                format!(
                    "${}.{:02}",
                    group_thousands(cents / 100),
                    (cents % 100).abs()
                )
            }
            Currency::Krw => {
                let won = (amount_usd * KRW_PER_USD).round() as i64;
                format!("₩{}", group_thousands(won))
            }
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
