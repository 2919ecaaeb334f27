use serde::{Deserialize, Serialize};
use std::env;

/// Policy for trips booked less than one whole month before arrival, where
/// the savings window would otherwise divide by zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZeroWindowPolicy {
    /// Treat the window as one month: the full amount is saved this month.
    ClampToOneMonth,
    /// Refuse the request with `PlanError::ZeroSavingsWindow`.
    Reject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_zero_window_policy")]
    pub zero_window_policy: ZeroWindowPolicy,

    /// Destination profile used when the requested destination is not in
    /// the cost table.
    #[serde(default = "default_fallback_destination")]
    pub fallback_destination: String,
}

fn default_zero_window_policy() -> ZeroWindowPolicy {
    ZeroWindowPolicy::ClampToOneMonth
}

fn default_fallback_destination() -> String {
    tripkit_catalog::DESTINATIONS[0].to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            zero_window_policy: default_zero_window_policy(),
            fallback_destination: default_fallback_destination(),
        }
    }
}

impl PlannerConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // All files are optional; serde defaults cover a bare environment
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `TRIPKIT__FALLBACK_DESTINATION=Paris`
            .add_source(config::Environment::with_prefix("TRIPKIT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.zero_window_policy, ZeroWindowPolicy::ClampToOneMonth);
        assert_eq!(cfg.fallback_destination, "New York");
    }

    #[test]
    fn test_config_deserializes_with_partial_input() {
        let cfg: PlannerConfig =
            serde_json::from_str(r#"{"zero_window_policy": "REJECT"}"#).unwrap();
        assert_eq!(cfg.zero_window_policy, ZeroWindowPolicy::Reject);
        assert_eq!(cfg.fallback_destination, "New York");
    }
}
