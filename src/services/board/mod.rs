use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::launch::LaunchRecord;
use crate::services::filter::LaunchFilter;
use crate::services::launch_source::{LaunchSource, LaunchSourceError};

/// The launch schedule for one session, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct LaunchBoard {
    launches: Vec<LaunchRecord>,
    origin: String,
}

impl LaunchBoard {
    /// Load from `source`, dropping invalid records and duplicate ids.
    pub fn load(source: &dyn LaunchSource) -> Result<Self, LaunchSourceError> {
        let origin = source.describe();
        let raw = source.load()?;
        let board = Self::from_records(raw, origin);
        log::info!(
            "Loaded {} launches from {}",
            board.launches.len(),
            board.origin
        );
        Ok(board)
    }

    /// Load from `source`, or from `fallback` when `source` fails.
    ///
    /// The second value is a short notice for the user when the fallback was
    /// used. A failing fallback leaves the board empty.
    pub fn load_or_fallback(
        source: &dyn LaunchSource,
        fallback: &dyn LaunchSource,
    ) -> (Self, Option<String>) {
        match Self::load(source) {
            Ok(board) => (board, None),
            Err(err) => {
                log::error!("Failed to load launches: {}", err);
                let notice = format!(
                    "Could not read {}; showing {}",
                    source.describe(),
                    fallback.describe()
                );
                match Self::load(fallback) {
                    Ok(board) => (board, Some(notice)),
                    Err(err) => {
                        log::error!("Failed to load fallback launches: {}", err);
                        (
                            Self::from_records(Vec::new(), fallback.describe()),
                            Some(format!("No launch data available: {}", err)),
                        )
                    }
                }
            }
        }
    }

    pub fn from_records(raw: Vec<LaunchRecord>, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        let mut seen = HashSet::new();
        let mut launches = Vec::with_capacity(raw.len());

        for record in raw {
            if let Err(reason) = record.validate() {
                log::warn!("Skipping launch from {}: {}", origin, reason);
                continue;
            }
            if !seen.insert(record.id.clone()) {
                log::warn!(
                    "Skipping launch '{}' from {}: duplicate id {}",
                    record.mission,
                    origin,
                    record.id
                );
                continue;
            }
            if !record.status.is_recognized() {
                log::debug!(
                    "Launch {} has unrecognized status '{}', showing as scheduled",
                    record.id,
                    record.status
                );
            }
            launches.push(record);
        }

        Self { launches, origin }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.launches
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.launches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launches.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&LaunchRecord> {
        self.launches.iter().find(|launch| launch.id == id)
    }

    pub fn filtered(&self, filter: &LaunchFilter, now: DateTime<Utc>) -> Vec<&LaunchRecord> {
        filter.apply(&self.launches, now)
    }
}
