// Launch module
// Launch record model as supplied by a launch data source

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current state of a launch as reported by the data source.
///
/// Unknown strings are kept in `Other` and presented as `Scheduled`, so a
/// feed that invents a new status never breaks the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LaunchStatus {
    Go,
    Scheduled,
    Hold,
    Delayed,
    Scrubbed,
    Launched,
    Other(String),
}

impl LaunchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LaunchStatus::Go => "Go",
            LaunchStatus::Scheduled => "Scheduled",
            LaunchStatus::Hold => "Hold",
            LaunchStatus::Delayed => "Delayed",
            LaunchStatus::Scrubbed => "Scrubbed",
            LaunchStatus::Launched => "Launched",
            LaunchStatus::Other(raw) => raw,
        }
    }

    /// Presentation used for badges and accents.
    pub fn style(&self) -> StatusStyle {
        match self {
            LaunchStatus::Go => StatusStyle::new("GO FOR LAUNCH", [0x00, 0xE6, 0x76], true),
            LaunchStatus::Hold => StatusStyle::new("HOLD", [0xFF, 0xB7, 0x4D], false),
            LaunchStatus::Delayed => StatusStyle::new("DELAYED", [0xFF, 0x8A, 0x65], false),
            LaunchStatus::Scrubbed => StatusStyle::new("SCRUBBED", [0xEF, 0x53, 0x50], false),
            LaunchStatus::Launched => StatusStyle::new("LAUNCHED", [0xAB, 0x47, 0xBC], false),
            LaunchStatus::Scheduled | LaunchStatus::Other(_) => {
                StatusStyle::new("SCHEDULED", [0x64, 0xB5, 0xF6], false)
            }
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LaunchStatus::Other(_))
    }
}

impl From<String> for LaunchStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Go" => LaunchStatus::Go,
            "Scheduled" => LaunchStatus::Scheduled,
            "Hold" => LaunchStatus::Hold,
            "Delayed" => LaunchStatus::Delayed,
            "Scrubbed" => LaunchStatus::Scrubbed,
            "Launched" => LaunchStatus::Launched,
            _ => LaunchStatus::Other(value),
        }
    }
}

impl From<&str> for LaunchStatus {
    fn from(value: &str) -> Self {
        LaunchStatus::from(value.to_string())
    }
}

impl From<LaunchStatus> for String {
    fn from(status: LaunchStatus) -> Self {
        match status {
            LaunchStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for LaunchStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

/// Badge label and accent colour for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub rgb: [u8; 3],
    /// Whether the badge dot should pulse (only Go does)
    pub pulses: bool,
}

impl StatusStyle {
    const fn new(label: &'static str, rgb: [u8; 3], pulses: bool) -> Self {
        Self { label, rgb, pulses }
    }
}

/// A single upcoming launch. Records are read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    pub id: String,
    pub provider: String,
    pub vehicle: String,
    pub mission: String,
    pub site: String,
    pub state: String,
    pub pad: String,
    /// T-0, or the opening of the window when `is_window` is set
    pub launch_time: DateTime<Utc>,
    #[serde(default)]
    pub status: LaunchStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub window_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_window: bool,
}

impl LaunchRecord {
    /// Create a builder for constructing records with optional fields
    ///
    /// # Examples
    /// ```
    /// use launch_countdown::models::launch::LaunchRecord;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let launch = LaunchRecord::builder()
    ///     .id("42")
    ///     .provider("SpaceX")
    ///     .mission("Demo")
    ///     .launch_time(Utc.with_ymd_and_hms(2026, 2, 11, 14, 30, 0).unwrap())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(launch.provider, "SpaceX");
    /// ```
    pub fn builder() -> LaunchRecordBuilder {
        LaunchRecordBuilder::new()
    }

    /// Validate the record against the data-source contract
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Launch id cannot be empty".to_string());
        }

        if self.is_window {
            if let Some(end) = self.window_end {
                if end <= self.launch_time {
                    return Err(format!(
                        "Launch {} window end must be after the window opens",
                        self.id
                    ));
                }
            }
        }

        Ok(())
    }

    /// The window end, only when the record actually describes a window.
    pub fn effective_window_end(&self) -> Option<DateTime<Utc>> {
        if self.is_window {
            self.window_end
        } else {
            None
        }
    }

    pub fn location_label(&self) -> String {
        format!("{}, {}", self.site, self.state)
    }
}

/// Builder for creating launch records with optional fields
pub struct LaunchRecordBuilder {
    id: Option<String>,
    provider: String,
    vehicle: String,
    mission: String,
    site: String,
    state: String,
    pad: String,
    launch_time: Option<DateTime<Utc>>,
    status: LaunchStatus,
    description: String,
    window_end: Option<DateTime<Utc>>,
}

impl LaunchRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            provider: String::new(),
            vehicle: String::new(),
            mission: String::new(),
            site: String::new(),
            state: String::new(),
            pad: String::new(),
            launch_time: None,
            status: LaunchStatus::Scheduled,
            description: String::new(),
            window_end: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = vehicle.into();
        self
    }

    pub fn mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = mission.into();
        self
    }

    pub fn site(mut self, site: impl Into<String>, state: impl Into<String>) -> Self {
        self.site = site.into();
        self.state = state.into();
        self
    }

    pub fn pad(mut self, pad: impl Into<String>) -> Self {
        self.pad = pad.into();
        self
    }

    pub fn launch_time(mut self, launch_time: DateTime<Utc>) -> Self {
        self.launch_time = Some(launch_time);
        self
    }

    pub fn status(mut self, status: impl Into<LaunchStatus>) -> Self {
        self.status = status.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the launch as a window closing at `end`.
    pub fn window_until(mut self, end: DateTime<Utc>) -> Self {
        self.window_end = Some(end);
        self
    }

    /// Build the record, validating it
    pub fn build(self) -> Result<LaunchRecord, String> {
        let id = self.id.ok_or_else(|| "Launch id is required".to_string())?;
        let launch_time = self
            .launch_time
            .ok_or_else(|| "Launch time is required".to_string())?;

        let record = LaunchRecord {
            id,
            provider: self.provider,
            vehicle: self.vehicle,
            mission: self.mission,
            site: self.site,
            state: self.state,
            pad: self.pad,
            launch_time,
            status: self.status,
            description: self.description,
            is_window: self.window_end.is_some(),
            window_end: self.window_end,
        };

        record.validate()?;
        Ok(record)
    }
}

impl Default for LaunchRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 26, 13, 0, 0).unwrap()
    }

    #[test]
    fn test_status_round_trips_known_values() {
        for raw in ["Go", "Scheduled", "Hold", "Delayed", "Scrubbed", "Launched"] {
            let status = LaunchStatus::from(raw);
            assert!(status.is_recognized(), "{raw} should be recognized");
            assert_eq!(String::from(status), raw);
        }
    }

    #[test]
    fn test_unknown_status_presents_as_scheduled() {
        let status = LaunchStatus::from("In Flight");
        assert_eq!(status, LaunchStatus::Other("In Flight".to_string()));
        assert_eq!(status.style(), LaunchStatus::Scheduled.style());
        assert_eq!(status.to_string(), "In Flight");
    }

    #[test]
    fn test_only_go_pulses() {
        assert!(LaunchStatus::Go.style().pulses);
        assert!(!LaunchStatus::Hold.style().pulses);
        assert_eq!(LaunchStatus::Go.style().label, "GO FOR LAUNCH");
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": "5",
            "provider": "Blue Origin",
            "vehicle": "New Glenn",
            "mission": "NG-3",
            "site": "Cape Canaveral SFS",
            "state": "Florida",
            "pad": "LC-36",
            "launchTime": "2026-02-26T13:00:00Z",
            "status": "Scheduled",
            "description": "Third New Glenn mission.",
            "windowEnd": "2026-02-26T17:00:00Z",
            "isWindow": true
        }"#;

        let record: LaunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.launch_time, t0());
        assert_eq!(record.window_end, Some(t0() + Duration::hours(4)));
        assert!(record.is_window);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_deserialize_unknown_status_does_not_fail() {
        let json = r#"{
            "id": "x", "provider": "P", "vehicle": "V", "mission": "M",
            "site": "S", "state": "T", "pad": "1",
            "launchTime": "2026-02-26T13:00:00Z",
            "status": "TBD"
        }"#;

        let record: LaunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, LaunchStatus::Other("TBD".into()));
        assert_eq!(record.window_end, None);
        assert!(!record.is_window);
    }

    #[test]
    fn test_window_end_before_start_is_invalid() {
        let result = LaunchRecord::builder()
            .id("w")
            .launch_time(t0())
            .window_until(t0() - Duration::minutes(1))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_window_end_equal_to_start_is_invalid() {
        let result = LaunchRecord::builder()
            .id("w")
            .launch_time(t0())
            .window_until(t0())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_id_is_invalid() {
        let result = LaunchRecord::builder().id("  ").launch_time(t0()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_effective_window_end_ignores_stray_end() {
        let mut record = LaunchRecord::builder()
            .id("1")
            .launch_time(t0())
            .build()
            .unwrap();
        record.window_end = Some(t0() + Duration::hours(1));
        assert_eq!(record.effective_window_end(), None);

        record.is_window = true;
        assert_eq!(record.effective_window_end(), Some(t0() + Duration::hours(1)));
    }

    #[test]
    fn test_location_label() {
        let record = LaunchRecord::builder()
            .id("1")
            .site("Starbase", "Texas")
            .launch_time(t0())
            .build()
            .unwrap();
        assert_eq!(record.location_label(), "Starbase, Texas");
    }
}
