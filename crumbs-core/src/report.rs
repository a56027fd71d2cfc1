//! Report composition
//!
//! Turns a feed into the final markdown document:
//!
//! 1. Bread crumbs for the leading sample of the feed
//! 2. A fenced block with the hour-of-day plot
//! 3. A fenced block with the per-repository bars
//! 4. Attribution and a last-updated stamp
//!
//! Categories without a phrase are left out of the bread crumbs and reported
//! back as [`UnmappedCategoryWarning`]s instead of failing the run.

use std::fmt::{self, Write as _};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::analytics::StatsAggregator;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::format::format_local_time;
use crate::phrases::CategoryPhrases;
use crate::render::{render_group_bars, render_hour_plot};
use crate::timezone::TimeZoneProjector;
use crate::types::{ActivityRecord, AggregateStats};

/// Markdown code fence delimiter.
const FENCE: &str = "```";

/// A sampled record whose category has no phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedCategoryWarning {
    pub category: String,
    pub group: String,
}

impl fmt::Display for UnmappedCategoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "activity {} in {} is not mapped to a phrase",
            self.category, self.group
        )
    }
}

/// Everything needed to turn records into a document.
pub struct ReportSettings<'a> {
    pub projector: &'a dyn TimeZoneProjector,
    pub phrases: &'a dyn CategoryPhrases,
    pub plot: &'a PlotConfig,
    pub sample_size: usize,
    pub attribution: String,
}

/// Rendered document plus any non-fatal warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub text: String,
    pub stats: AggregateStats,
    pub warnings: Vec<UnmappedCategoryWarning>,
}

impl Report {
    /// Write the document to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.text)?;
        tracing::info!(path = %path.display(), bytes = self.text.len(), "Report written");
        Ok(())
    }
}

/// Bread-crumb section for the sampled records.
pub fn render_breadcrumbs(
    sample: &[ActivityRecord],
    phrases: &dyn CategoryPhrases,
    projector: &dyn TimeZoneProjector,
) -> (String, Vec<UnmappedCategoryWarning>) {
    let mut out = String::from("### 🍞 Bread Crumbs\n\n");
    let mut warnings = Vec::new();

    for record in sample {
        let Some(phrase) = phrases.phrase(&record.category) else {
            let warning = UnmappedCategoryWarning {
                category: record.category.clone(),
                group: record.group.clone(),
            };
            tracing::warn!(category = %record.category, "{}", warning);
            warnings.push(warning);
            continue;
        };
        let _ = writeln!(
            out,
            " * {} `{}` at {}",
            phrase,
            record.group,
            format_local_time(&projector.project(record.timestamp))
        );
    }

    (out, warnings)
}

/// Assemble the document from already aggregated statistics.
pub fn compose_document(
    stats: &AggregateStats,
    settings: &ReportSettings<'_>,
    updated_at: DateTime<Utc>,
) -> Result<(String, Vec<UnmappedCategoryWarning>)> {
    let hours = render_hour_plot(&stats.hour_histogram, &stats.start, settings.plot)?;
    let groups = render_group_bars(&stats.group_counts, &stats.start)?;
    let (breadcrumbs, warnings) =
        render_breadcrumbs(&stats.sample, settings.phrases, settings.projector);

    let mut out = breadcrumbs;
    out.push_str("\n### 🕘 Recent Activity");
    push_fenced(&mut out, &hours);
    out.push_str("\n\n");
    push_fenced(&mut out, &groups);
    out.push_str(&settings.attribution);
    out.push_str("  \n");
    let _ = writeln!(
        out,
        "\n\nLast Updated: {}",
        format_local_time(&settings.projector.project(updated_at))
    );

    Ok((out, warnings))
}

fn push_fenced(out: &mut String, body: &str) {
    out.push('\n');
    out.push_str(FENCE);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str(FENCE);
    out.push('\n');
}

/// Aggregate `records` and render the full document.
///
/// `updated_at` is passed in rather than read from the clock so identical
/// inputs give byte-identical output.
pub fn generate_report(
    records: &[ActivityRecord],
    settings: &ReportSettings<'_>,
    updated_at: DateTime<Utc>,
) -> Result<Report> {
    let stats = StatsAggregator::with_sample_size(settings.sample_size)
        .aggregate(records, settings.projector)?;
    let (text, warnings) = compose_document(&stats, settings, updated_at)?;

    tracing::info!(
        records = stats.total,
        groups = stats.group_counts.len(),
        warnings = warnings.len(),
        "Report generated"
    );

    Ok(Report {
        text,
        stats,
        warnings,
    })
}
