// Settings module
// Application configuration persisted as TOML in the platform config directory

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_COUNTDOWN_TICK_SECS: u64 = 1;
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 300;
/// Upper bound for both timer intervals: one day.
pub const MAX_INTERVAL_SECS: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file with launch records. The bundled dataset is used when unset.
    pub data_file: Option<PathBuf>,
    /// Providers offered as filter chips after "All" and "Soon"
    pub provider_filters: Vec<String>,
    /// IANA zone name used for every displayed timestamp
    pub display_timezone: String,
    pub countdown_tick_secs: u64,
    pub sync_interval_secs: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            provider_filters: vec!["SpaceX".to_string(), "NASA".to_string(), "ULA".to_string()],
            display_timezone: "UTC".to_string(),
            countdown_tick_secs: DEFAULT_COUNTDOWN_TICK_SECS,
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            window_width: 480.0,
            window_height: 860.0,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, secs) in [
            ("countdown_tick_secs", self.countdown_tick_secs),
            ("sync_interval_secs", self.sync_interval_secs),
        ] {
            if secs == 0 || secs > MAX_INTERVAL_SECS {
                return Err(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_INTERVAL_SECS, secs
                ));
            }
        }

        if let Some(empty) = self
            .provider_filters
            .iter()
            .position(|provider| provider.trim().is_empty())
        {
            return Err(format!("provider_filters[{}] is empty", empty));
        }

        if !(self.window_width.is_finite() && self.window_height.is_finite())
            || self.window_width < 200.0
            || self.window_height < 200.0
        {
            return Err(format!(
                "window size {}x{} is not plausible",
                self.window_width, self.window_height
            ));
        }

        Ok(())
    }

    /// Resolve the display zone, falling back to UTC for unknown names.
    pub fn timezone(&self) -> Tz {
        match Tz::from_str(self.display_timezone.trim()) {
            Ok(tz) => tz,
            Err(_) => {
                log::warn!(
                    "Unknown display timezone '{}', using UTC",
                    self.display_timezone
                );
                Tz::UTC
            }
        }
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_secs(self.countdown_tick_secs.clamp(1, MAX_INTERVAL_SECS))
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs.clamp(1, MAX_INTERVAL_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.provider_filters, vec!["SpaceX", "NASA", "ULA"]);
        assert_eq!(config.sync_interval(), Duration::from_secs(300));
        assert_eq!(config.countdown_tick(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let mut config = AppConfig::default();
        config.countdown_tick_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.sync_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_intervals_rejected() {
        let config: AppConfig =
            toml::from_str("countdown_tick_secs = 9223372036854775807").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.contains("countdown_tick_secs"));
        assert_eq!(config.countdown_tick(), Duration::from_secs(MAX_INTERVAL_SECS));

        let config: AppConfig = toml::from_str("sync_interval_secs = 86401").unwrap();
        assert!(config.validate().unwrap_err().contains("sync_interval_secs"));

        let config: AppConfig = toml::from_str("sync_interval_secs = 86400").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_provider_rejected() {
        let mut config = AppConfig::default();
        config.provider_filters.push("   ".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.contains("provider_filters[3]"));
    }

    #[test]
    fn test_timezone_falls_back_to_utc() {
        let mut config = AppConfig::default();
        config.display_timezone = "Mars/Olympus_Mons".to_string();
        assert_eq!(config.timezone(), Tz::UTC);

        config.display_timezone = "America/New_York".to_string();
        assert_eq!(config.timezone(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("display_timezone = \"America/Chicago\"").unwrap();
        assert_eq!(config.display_timezone, "America/Chicago");
        assert_eq!(config.sync_interval_secs, DEFAULT_SYNC_INTERVAL_SECS);
        assert!(config.data_file.is_none());
    }
}
