//! Launch data providers.
//!
//! Display code never owns launch data: it is handed a [`LaunchSource`] and
//! asks it for records once at startup. Two sources ship with the app, the
//! bundled mock schedule and a JSON file with the same shape.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::launch::LaunchRecord;

const BUNDLED_LAUNCHES: &str = include_str!("../../../data/launches.json");

#[derive(Debug, Error)]
pub enum LaunchSourceError {
    #[error("failed to read launch data from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse launch data from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A capability that yields the ordered launch schedule.
#[cfg_attr(test, mockall::automock)]
pub trait LaunchSource {
    /// Human-readable origin for logs
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<LaunchRecord>, LaunchSourceError>;
}

/// Parse a JSON array of launch records.
pub fn parse_launches(json: &str, origin: &str) -> Result<Vec<LaunchRecord>, LaunchSourceError> {
    serde_json::from_str(json).map_err(|source| LaunchSourceError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// The schedule compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLaunchSource;

impl LaunchSource for BundledLaunchSource {
    fn describe(&self) -> String {
        "bundled schedule".to_string()
    }

    fn load(&self) -> Result<Vec<LaunchRecord>, LaunchSourceError> {
        parse_launches(BUNDLED_LAUNCHES, "bundled schedule")
    }
}

/// Launch records read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileLaunchSource {
    path: PathBuf,
}

impl JsonFileLaunchSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LaunchSource for JsonFileLaunchSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<LaunchRecord>, LaunchSourceError> {
        let data = fs::read_to_string(&self.path).map_err(|source| LaunchSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_launches(&data, &self.describe())
    }
}
