//! List filtering for the launch dashboard.
//!
//! Filters never sort: results keep the order the data source supplied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::launch::LaunchRecord;

/// Launches closer than this are "Soon".
pub const IMMINENT_WINDOW_MS: i64 = 3 * 86_400_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchFilter {
    All,
    /// `launch_time - now` under three days, evaluated when the filter runs
    Imminent,
    /// Case-insensitive substring of the provider name
    Provider(String),
}

impl Default for LaunchFilter {
    fn default() -> Self {
        Self::All
    }
}

impl LaunchFilter {
    pub fn matches(&self, launch: &LaunchRecord, now: DateTime<Utc>) -> bool {
        match self {
            LaunchFilter::All => true,
            LaunchFilter::Imminent => {
                launch.launch_time.signed_duration_since(now).num_milliseconds()
                    < IMMINENT_WINDOW_MS
            }
            LaunchFilter::Provider(needle) => launch
                .provider
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }

    /// Order-preserving subsequence of `launches` that pass the filter.
    pub fn apply<'a>(
        &self,
        launches: &'a [LaunchRecord],
        now: DateTime<Utc>,
    ) -> Vec<&'a LaunchRecord> {
        launches
            .iter()
            .filter(|launch| self.matches(launch, now))
            .collect()
    }

    /// Only the unfiltered list gets the "Next Launch" hero card.
    pub fn shows_hero(&self) -> bool {
        matches!(self, LaunchFilter::All)
    }
}

/// The result of running a filter once.
///
/// "Soon" depends on the clock, so the dashboard evaluates a filter when the
/// user picks it and keeps the snapshot until the next explicit evaluation,
/// rather than letting launches drift in and out of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSnapshot {
    filter: LaunchFilter,
    indices: Vec<usize>,
}

impl FilterSnapshot {
    pub fn evaluate(filter: LaunchFilter, launches: &[LaunchRecord], now: DateTime<Utc>) -> Self {
        let indices = launches
            .iter()
            .enumerate()
            .filter(|(_, launch)| filter.matches(launch, now))
            .map(|(index, _)| index)
            .collect();

        Self { filter, indices }
    }

    pub fn filter(&self) -> &LaunchFilter {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve against the same slice the snapshot was evaluated on.
    pub fn records<'a>(&self, launches: &'a [LaunchRecord]) -> Vec<&'a LaunchRecord> {
        self.indices
            .iter()
            .filter_map(|index| launches.get(*index))
            .collect()
    }
}

/// A filter chip shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: LaunchFilter,
    pub label: String,
}

/// "All", "Soon", then one chip per configured provider.
pub fn filter_options(providers: &[String]) -> Vec<FilterOption> {
    let mut options = vec![
        FilterOption {
            filter: LaunchFilter::All,
            label: "All".to_string(),
        },
        FilterOption {
            filter: LaunchFilter::Imminent,
            label: "Soon".to_string(),
        },
    ];

    options.extend(
        providers
            .iter()
            .map(|provider| provider.trim())
            .filter(|provider| !provider.is_empty())
            .map(|provider| FilterOption {
                filter: LaunchFilter::Provider(provider.to_string()),
                label: provider.to_string(),
            }),
    );

    options
}

/// How a filtered result is laid out on the list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLayout<'a> {
    pub hero: Option<&'a LaunchRecord>,
    pub cards: Vec<&'a LaunchRecord>,
    pub total: usize,
}

impl<'a> ListLayout<'a> {
    /// Under `All` the first launch becomes the hero and is left out of the cards.
    pub fn arrange(filter: &LaunchFilter, filtered: Vec<&'a LaunchRecord>) -> Self {
        let total = filtered.len();
        if filter.shows_hero() && !filtered.is_empty() {
            let mut rest = filtered.into_iter();
            let hero = rest.next();
            Self {
                hero,
                cards: rest.collect(),
                total,
            }
        } else {
            Self {
                hero: None,
                cards: filtered,
                total,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
