//! Core domain types for crumbs
//!
//! | Term | Definition |
//! |------|------------|
//! | **Activity record** | One timestamped, categorized event from the feed |
//! | **Category** | The action type of a record (`PushEvent`, `WatchEvent`, ...) |
//! | **Group** | The bar-chart discriminator, usually a repository name |
//! | **Hour histogram** | 24-bucket count of records by local hour of day |

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Number of hour buckets in a day.
pub const HOURS_PER_DAY: usize = 24;

/// One event from the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// When the event happened
    pub timestamp: DateTime<Utc>,
    /// Action type, e.g. `PushEvent`
    pub category: String,
    /// Repository (or project) the event belongs to
    pub group: String,
}

impl ActivityRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        category: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            category: category.into(),
            group: group.into(),
        }
    }
}

/// Statistics folded from a full feed.
///
/// Built once by [`crate::analytics::StatsAggregator`] and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    /// Local time of the oldest record (the last element of the feed)
    pub start: DateTime<Tz>,
    /// Record count per local hour, index 0 = 00:00-00:59
    pub hour_histogram: [u64; HOURS_PER_DAY],
    /// Record count per group, iterated by group name
    pub group_counts: BTreeMap<String, u64>,
    /// Record count per category, iterated by category name
    pub category_counts: BTreeMap<String, u64>,
    /// Leading records of the feed, in feed order
    pub sample: Vec<ActivityRecord>,
    /// Number of records aggregated
    pub total: usize,
}
