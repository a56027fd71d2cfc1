//! Folding an activity feed into [`AggregateStats`].

use std::collections::BTreeMap;

use chrono::Timelike;

use crate::error::{Error, Result};
use crate::timezone::TimeZoneProjector;
use crate::types::{ActivityRecord, AggregateStats, HOURS_PER_DAY};

/// Default number of leading records kept as the feed sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Builds [`AggregateStats`] from a most-recent-first feed.
#[derive(Debug, Clone, Copy)]
pub struct StatsAggregator {
    sample_size: usize,
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `sample_size` leading records instead of the default ten.
    pub fn with_sample_size(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// Aggregate `records`, projecting every timestamp through `projector`.
    ///
    /// The feed is assumed to be ordered most-recent-first, so `start` is the
    /// projection of the last record. A feed that is out of order or truncated
    /// mislabels `start`; no attempt is made to detect that.
    pub fn aggregate(
        &self,
        records: &[ActivityRecord],
        projector: &dyn TimeZoneProjector,
    ) -> Result<AggregateStats> {
        let oldest = records
            .last()
            .ok_or(Error::EmptyInput { stage: "aggregate" })?;

        let mut hour_histogram = [0u64; HOURS_PER_DAY];
        let mut group_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut category_counts: BTreeMap<String, u64> = BTreeMap::new();

        for record in records {
            let hour = projector.project(record.timestamp).hour() as usize;
            hour_histogram[hour] += 1;
            *group_counts.entry(record.group.clone()).or_default() += 1;
            *category_counts.entry(record.category.clone()).or_default() += 1;
        }

        let sample = records.iter().take(self.sample_size).cloned().collect();

        tracing::debug!(
            records = records.len(),
            groups = group_counts.len(),
            categories = category_counts.len(),
            "Aggregated activity feed"
        );

        Ok(AggregateStats {
            start: projector.project(oldest.timestamp),
            hour_histogram,
            group_counts,
            category_counts,
            sample,
            total: records.len(),
        })
    }
}

/// Aggregate with the default sample size.
pub fn aggregate(
    records: &[ActivityRecord],
    projector: &dyn TimeZoneProjector,
) -> Result<AggregateStats> {
    StatsAggregator::new().aggregate(records, projector)
}
