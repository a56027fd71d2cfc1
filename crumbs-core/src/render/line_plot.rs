//! Hour-of-day line plot.
//!
//! The 24 hourly counts are stretched to the configured width, drawn as a
//! box-glyph line over a labelled y-axis, and underlined by an hour ruler whose
//! first column sits directly under the y-axis:
//!
//! ```text
//!  2 ┤        ╭──╮
//!  1 ┤     ╭──╯  ╰──╮
//!  0 ┼─────╯        ╰───
//!    +───────+───────+──
//!  00:00   02:00   04:00
//! ```

use std::fmt::Write;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::analytics::first_max;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::format::format_local_time;
use crate::types::HOURS_PER_DAY;

/// Width of a rendered `HH:00` label.
pub const LABEL_WIDTH: usize = 5;

/// Ruler glyph marking an hour label.
pub const TICK: char = '+';

/// Ruler glyph between ticks.
pub const RULE: char = '─';

/// A rendered plot plus the column its y-axis occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePlot {
    pub rows: Vec<String>,
    pub axis_column: usize,
}

/// Draw `series` stretched to `width` points and scaled to `height` rows.
///
/// Y-axis labels are integral. Constant series collapse to a single row.
pub fn plot_series(series: &[f64], width: usize, height: usize) -> LinePlot {
    let series = interpolate(series, width);
    if series.is_empty() {
        return LinePlot {
            rows: Vec::new(),
            axis_column: 0,
        };
    }

    let (minimum, maximum) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let interval = (maximum - minimum).abs();
    let ratio = if interval > 0.0 {
        height as f64 / interval
    } else {
        1.0
    };
    let scaled_min = (minimum * ratio).round() as i64;
    let scaled_max = (maximum * ratio).round() as i64;
    let rows = (scaled_max - scaled_min).unsigned_abs() as usize;

    // Row index counted from the top for a value.
    let row_of = |value: f64| rows - ((value * ratio).round() as i64 - scaled_min) as usize;

    let mut grid = vec![vec![' '; series.len()]; rows + 1];
    for (x, pair) in series.windows(2).enumerate() {
        let (r0, r1) = (row_of(pair[0]), row_of(pair[1]));
        if r0 == r1 {
            grid[r0][x] = '─';
            continue;
        }
        // Rows grow downwards, so a smaller row index is a higher value.
        if r1 < r0 {
            grid[r1][x] = '╭';
            grid[r0][x] = '╯';
        } else {
            grid[r1][x] = '╰';
            grid[r0][x] = '╮';
        }
        for row in grid.iter_mut().take(r0.max(r1)).skip(r0.min(r1) + 1) {
            row[x] = '│';
        }
    }

    let label_width = format!("{:.0}", maximum)
        .len()
        .max(format!("{:.0}", minimum).len())
        + 1;
    let first_row = row_of(series[0]);

    let rendered = grid
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let magnitude = if rows > 0 {
                maximum - (row as f64 * interval / rows as f64)
            } else {
                maximum
            };
            let axis = if row == first_row { '┼' } else { '┤' };
            let line: String = cells.into_iter().collect();
            format!(
                "{:>label_width$} {}{}",
                format!("{:.0}", magnitude + 0.0),
                axis,
                line
            )
            .trim_end()
            .to_string()
        })
        .collect();

    LinePlot {
        rows: rendered,
        axis_column: label_width + 1,
    }
}

/// Linearly resample `data` to `fit_count` points, keeping both endpoints.
fn interpolate(data: &[f64], fit_count: usize) -> Vec<f64> {
    if data.len() < 2 || fit_count < 2 {
        return data.to_vec();
    }

    let last = data.len() - 1;
    let spring_factor = last as f64 / (fit_count - 1) as f64;
    let mut out = Vec::with_capacity(fit_count);
    out.push(data[0]);
    for i in 1..fit_count - 1 {
        let spring = i as f64 * spring_factor;
        let before = (spring.floor() as usize).min(last);
        let after = (spring.ceil() as usize).min(last);
        let at = spring - spring.floor();
        out.push(data[before] + (data[after] - data[before]) * at);
    }
    out.push(data[last]);
    out
}

/// Horizontal rule of `width` columns with one tick per label interval.
///
/// Ticks sit at every `width / (24 / interval)`-th column, `24 / interval` of
/// them in total.
pub fn hour_ruler(width: usize, interval: usize) -> String {
    let segments = HOURS_PER_DAY / interval;
    let step = width / segments;
    (0..width)
        .map(|col| {
            if col % step == 0 && col / step < segments {
                TICK
            } else {
                RULE
            }
        })
        .collect()
}

/// `HH:00` labels from midnight to midnight, each padded to its segment.
pub fn hour_labels(width: usize, interval: usize) -> String {
    let segments = HOURS_PER_DAY / interval;
    let spaces = (width - LABEL_WIDTH * segments) / segments;
    let padding = " ".repeat(spaces);

    let mut out = String::new();
    for i in 0..=segments {
        let _ = write!(out, "{:02}:00{}", (i * interval) % HOURS_PER_DAY, padding);
    }
    out
}

/// Hour with the most events; ties go to the earliest hour.
pub fn peak_hour(hist: &[u64; HOURS_PER_DAY]) -> (usize, u64) {
    first_max(hist.iter().copied().enumerate()).unwrap_or((0, 0))
}

/// Sentence naming the busiest hour.
pub fn most_active_hour_sentence(hist: &[u64; HOURS_PER_DAY], start: &DateTime<Tz>) -> String {
    let (hour, count) = peak_hour(hist);
    format!(
        "Since {}, I'm most active between {:02}:00-{:02}:59 - with {} events in that hour.",
        format_local_time(start),
        hour,
        hour,
        count
    )
}

/// Plot, ruler, labels, caption and summary sentence for an hour histogram.
pub fn render_hour_plot(
    hist: &[u64; HOURS_PER_DAY],
    start: &DateTime<Tz>,
    config: &PlotConfig,
) -> Result<String> {
    config.validate()?;

    let series: Vec<f64> = hist.iter().map(|&count| count as f64).collect();
    let plot = plot_series(&series, config.width, config.height);
    let indent = plot.axis_column;

    let mut out = plot.rows.join("\n");
    out.push('\n');
    out.push_str(&" ".repeat(indent));
    out.push_str(&hour_ruler(config.width, config.interval_hours));
    out.push('\n');
    // Centre each label's colon on its tick
    out.push_str(&" ".repeat(indent.saturating_sub(LABEL_WIDTH / 2)));
    out.push_str(&hour_labels(config.width, config.interval_hours));
    out.push_str("\n\n");
    let caption = format!(
        "{:^total$}",
        config.caption,
        total = indent + config.width
    );
    out.push_str(caption.trim_end());
    out.push_str("\n\n\n");
    out.push_str(&most_active_hour_sentence(hist, start));
    out.push('\n');

    tracing::debug!(
        width = config.width,
        height = config.height,
        rows = plot.rows.len(),
        "Rendered hour plot"
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::{TimeZone, Utc};

    fn start() -> DateTime<Tz> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
            .unwrap()
            .with_timezone(&Tz::UTC)
    }

    fn hist(pairs: &[(usize, u64)]) -> [u64; HOURS_PER_DAY] {
        let mut hist = [0u64; HOURS_PER_DAY];
        for &(hour, count) in pairs {
            hist[hour] = count;
        }
        hist
    }

    #[test]
    fn test_ruler_has_one_tick_per_interval() {
        let ruler = hour_ruler(100, 2);
        assert_eq!(ruler.chars().count(), 100);
        assert_eq!(ruler.chars().filter(|&c| c == TICK).count(), 12);

        let ticks: Vec<usize> = ruler
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == TICK)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(ticks, (0..12).map(|k| k * 8).collect::<Vec<_>>());
    }

    #[test]
    fn test_labels_fill_equal_segments() {
        let labels = hour_labels(100, 2);
        // 13 labels, each 5 wide plus (100 - 60) / 12 = 3 spaces
        assert_eq!(labels.len(), 13 * 8);

        let segments: Vec<&str> = (0..13).map(|i| &labels[i * 8..(i + 1) * 8]).collect();
        assert_eq!(segments[0], "00:00   ");
        assert_eq!(segments[1], "02:00   ");
        assert_eq!(segments[11], "22:00   ");
        assert_eq!(segments[12], "00:00   ");
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(&segment[..5], format!("{:02}:00", (i * 2) % 24));
            assert!(segment[5..].chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn test_labels_other_interval() {
        let labels = hour_labels(80, 4);
        // 6 segments, (80 - 30) / 6 = 8 spaces
        assert_eq!(labels.len(), 7 * 13);
        assert!(labels.starts_with("00:00        04:00"));
        assert_eq!(hour_ruler(80, 4).chars().filter(|&c| c == TICK).count(), 6);
    }

    #[test]
    fn test_peak_hour_first_wins() {
        assert_eq!(peak_hour(&hist(&[(0, 5), (1, 5), (2, 3)])), (0, 5));
        assert_eq!(peak_hour(&hist(&[(3, 2), (17, 4), (20, 4)])), (17, 4));
        assert_eq!(peak_hour(&[0; HOURS_PER_DAY]), (0, 0));
    }

    #[test]
    fn test_sentence() {
        let sentence = most_active_hour_sentence(&hist(&[(9, 2), (14, 1)]), &start());
        assert_eq!(
            sentence,
            "Since 2024-03-01 08:00:00 +0000 UTC, I'm most active between 09:00-09:59 - with 2 events in that hour."
        );
    }

    #[test]
    fn test_interpolate_keeps_endpoints() {
        let out = interpolate(&[0.0, 10.0], 11);
        assert_eq!(out.len(), 11);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[5], 5.0);
        assert_eq!(out[10], 10.0);
    }

    #[test]
    fn test_plot_height_and_labels() {
        // The last point survives interpolation exactly
        let mut series = vec![0.0; 24];
        series[23] = 15.0;
        let plot = plot_series(&series, 100, 15);

        assert_eq!(plot.rows.len(), 16);
        assert!(plot.rows[0].starts_with(" 15 ┤"));
        assert!(plot.rows[15].starts_with("  0 ┼"));
        assert_eq!(plot.axis_column, 4);
        assert!(plot.rows.iter().all(|row| !row.ends_with(' ')));
        assert!(plot.rows.iter().any(|row| row.contains('╭')));
        assert!(plot.rows.iter().any(|row| row.contains('╯')));
    }

    #[test]
    fn test_plot_all_zero_is_flat_line() {
        let plot = plot_series(&[0.0; 24], 100, 15);
        assert_eq!(plot.rows.len(), 1);
        assert_eq!(plot.rows[0], format!(" 0 ┼{}", "─".repeat(99)));
        assert_eq!(plot.axis_column, 3);
    }

    #[test]
    fn test_render_hour_plot_layout() {
        let config = PlotConfig::default();
        let out = render_hour_plot(&hist(&[(9, 2), (14, 1)]), &start(), &config).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        // 2 scaled to 15 rows gives 16 plot rows
        let ruler = lines[16];
        assert_eq!(ruler, format!("   {}", hour_ruler(100, 2)));
        assert_eq!(lines[17], format!(" {}", hour_labels(100, 2)));
        assert_eq!(lines[19].trim(), "Commits by Hour of Day");
        assert!(out.ends_with("with 2 events in that hour.\n"));

        // Axis column matches the first ruler tick
        let axis = lines[0].chars().position(|c| c == '┤').unwrap();
        let tick = ruler.chars().position(|c| c == TICK).unwrap();
        assert_eq!(axis, tick);
    }

    #[test]
    fn test_render_is_deterministic() {
        let h = hist(&[(1, 3), (7, 9), (22, 4)]);
        let config = PlotConfig::default();
        let a = render_hour_plot(&h, &start(), &config).unwrap();
        let b = render_hour_plot(&h, &start(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_rejects_bad_interval() {
        let config = PlotConfig {
            interval_hours: 5,
            ..Default::default()
        };
        let err = render_hour_plot(&hist(&[]), &start(), &config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
