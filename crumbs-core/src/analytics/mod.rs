//! Analytics module for crumbs
//!
//! Folds the raw activity feed into fixed-shape statistics:
//! - Hour-of-day histogram in the configured local zone
//! - Per-group (repository) and per-category counts
//! - The leading sample of the feed used for bread crumbs
//!
//! Peak selection helpers live here too, so both renderers share one
//! first-wins tie-break.

pub mod aggregate;

pub use aggregate::{aggregate, StatsAggregator, DEFAULT_SAMPLE_SIZE};

/// Index and value of the largest count.
///
/// Scans in order and only replaces the current best on a strictly greater
/// count, so ties resolve to the earliest entry. Returns `None` for an empty
/// iterator; an all-zero input resolves to the first entry with a count of 0.
pub fn first_max<K, I>(entries: I) -> Option<(K, u64)>
where
    I: IntoIterator<Item = (K, u64)>,
{
    let mut best: Option<(K, u64)> = None;
    for (key, count) in entries {
        let replace = match &best {
            Some((_, max)) => count > *max,
            None => true,
        };
        if replace {
            best = Some((key, count));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_max_prefers_earliest_on_tie() {
        let hours = [5u64, 5, 3];
        let peak = first_max(hours.iter().copied().enumerate());
        assert_eq!(peak, Some((0, 5)));
    }

    #[test]
    fn test_first_max_strictly_greater_replaces() {
        let hours = [1u64, 4, 2, 4, 9, 9];
        assert_eq!(first_max(hours.iter().copied().enumerate()), Some((4, 9)));
    }

    #[test]
    fn test_first_max_all_zero() {
        let hours = [0u64; 24];
        assert_eq!(first_max(hours.iter().copied().enumerate()), Some((0, 0)));
    }

    #[test]
    fn test_first_max_empty() {
        let empty: Vec<(&str, u64)> = Vec::new();
        assert_eq!(first_max(empty), None);
    }
}
