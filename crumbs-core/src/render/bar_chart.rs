//! Per-group bar chart.
//!
//! Each group gets a three-line bar with its name on the middle line:
//!
//! ```text
//!               |####
//!  crumbs       |####
//!               |####
//!
//! ```

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::analytics::first_max;
use crate::error::{Error, Result};
use crate::format::format_local_time;

/// Glyph repeated to draw a bar.
pub const BAR: char = '#';

/// Glyph separating the name column from the bars.
pub const AXIS: char = '|';

/// Counts above this are halved before drawing.
pub const HALVING_THRESHOLD: u64 = 100;

/// Divisor applied to every count, picked from the largest count.
///
/// Keeps the longest bar bounded instead of fitting a terminal width, so the
/// scale jumps at the threshold.
pub fn scale_divisor(max_count: u64) -> u64 {
    if max_count <= HALVING_THRESHOLD {
        1
    } else {
        2
    }
}

/// Number of bar glyphs drawn for `count`.
pub fn bar_length(count: u64, divisor: u64) -> usize {
    (count / divisor) as usize
}

/// Group with the most events; ties go to the first group in map order.
pub fn most_active_group(counts: &BTreeMap<String, u64>) -> Option<(&str, u64)> {
    first_max(counts.iter().map(|(name, &count)| (name.as_str(), count)))
}

/// Sentence naming the busiest group.
pub fn most_active_group_sentence(group: &str, count: u64, start: &DateTime<Tz>) -> String {
    format!(
        "Since {}, I've been most active in {}, with {} events.",
        format_local_time(start),
        group,
        count
    )
}

/// Bars for every group in name order, followed by the summary sentence.
pub fn render_group_bars(counts: &BTreeMap<String, u64>, start: &DateTime<Tz>) -> Result<String> {
    let (active_group, max_count) = most_active_group(counts).ok_or(Error::EmptyInput {
        stage: "group bar chart",
    })?;
    let max_name_len = counts
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    let divisor = scale_divisor(max_count);
    let gutter = " ".repeat(max_name_len + 5);

    let mut out = String::new();
    for (name, &count) in counts {
        let bar: String = std::iter::repeat(BAR)
            .take(bar_length(count, divisor))
            .collect();
        let padding = " ".repeat(max_name_len - name.chars().count() + 4);

        let _ = writeln!(out, "{gutter}{AXIS}{bar}");
        let _ = writeln!(out, " {name}{padding}{AXIS}{bar}");
        let _ = writeln!(out, "{gutter}{AXIS}{bar}");
        out.push('\n');
    }
    out.push_str("\n\n");
    out.push_str(&most_active_group_sentence(active_group, max_count, start));
    out.push('\n');

    tracing::debug!(
        groups = counts.len(),
        divisor,
        active_group,
        "Rendered group bars"
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn start() -> DateTime<Tz> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
            .unwrap()
            .with_timezone(&Tz::UTC)
    }

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_divisor_switches_above_threshold() {
        let low = counts(&[("A", 100), ("B", 50)]);
        let high = counts(&[("A", 101), ("B", 50)]);

        let (_, low_max) = most_active_group(&low).unwrap();
        let (_, high_max) = most_active_group(&high).unwrap();
        assert_eq!(scale_divisor(low_max), 1);
        assert_eq!(scale_divisor(high_max), 2);

        assert_eq!(bar_length(100, scale_divisor(low_max)), 100);
        assert_eq!(bar_length(101, scale_divisor(high_max)), 50);
    }

    #[test]
    fn test_bar_length_monotonic_within_divisor() {
        for c1 in 0..100u64 {
            assert!(bar_length(c1, 1) <= bar_length(c1 + 1, 1));
        }
        assert_eq!(bar_length(7, 2), 3);
    }

    #[test]
    fn test_most_active_group_first_wins() {
        let tied = counts(&[("beta", 3), ("alpha", 3), ("gamma", 1)]);
        assert_eq!(most_active_group(&tied), Some(("alpha", 3)));
        assert_eq!(most_active_group(&BTreeMap::new()), None);
    }

    #[test]
    fn test_empty_counts_is_named_error() {
        let err = render_group_bars(&BTreeMap::new(), &start()).unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyInput {
                stage: "group bar chart"
            }
        ));
    }

    #[test]
    fn test_layout_is_exact() {
        let out = render_group_bars(&counts(&[("repoA", 2), ("repoBB", 1)]), &start()).unwrap();
        let expected = concat!(
            "           |##\n",
            " repoA     |##\n",
            "           |##\n",
            "\n",
            "           |#\n",
            " repoBB    |#\n",
            "           |#\n",
            "\n",
            "\n",
            "\n",
            "Since 2024-03-01 08:00:00 +0000 UTC, I've been most active in repoA, with 2 events.\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_single_group() {
        let out = render_group_bars(&counts(&[("solo", 1)]), &start()).unwrap();
        assert!(out.starts_with("         |#\n solo    |#\n"));
        assert!(out.contains("most active in solo, with 1 events."));
    }

    #[test]
    fn test_halved_bars_above_threshold() {
        let out = render_group_bars(&counts(&[("big", 120), ("small", 9)]), &start()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], format!(" big      |{}", "#".repeat(60)));
        assert_eq!(lines[5], format!(" small    |{}", "#".repeat(4)));
    }
}
