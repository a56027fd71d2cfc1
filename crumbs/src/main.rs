//! crumbs - profile README generator
//!
//! Fetches a user's public activity feed and writes a README with recent
//! bread crumbs, an hour-of-day plot and a per-repository bar chart.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Config: $XDG_CONFIG_HOME/crumbs/config.toml (~/.config/crumbs/config.toml)
//! - Logs: $XDG_STATE_HOME/crumbs/crumbs.log (~/.local/state/crumbs/crumbs.log)

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crumbs_core::feed::{ActivityFeed, FileFeed, GithubFeed};
use crumbs_core::phrases::GithubPhrases;
use crumbs_core::report::{generate_report, ReportSettings};
use crumbs_core::timezone::ZoneProjector;
use crumbs_core::Config;

#[derive(Parser, Debug)]
#[command(name = "crumbs")]
#[command(about = "Generate a profile README from your public activity")]
#[command(version)]
struct Args {
    /// Config file (default: $XDG_CONFIG_HOME/crumbs/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Account whose activity is reported
    #[arg(short, long)]
    user: Option<String>,

    /// Number of events to fetch (1-100)
    #[arg(short, long)]
    limit: Option<usize>,

    /// IANA time zone for hours and timestamps (e.g., America/Los_Angeles)
    #[arg(short, long)]
    zone: Option<String>,

    /// Where to write the README
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read events from a saved API response instead of fetching
    #[arg(long)]
    events_file: Option<PathBuf>,

    /// Print the README instead of writing it
    #[arg(long)]
    stdout: bool,
}

impl Args {
    /// Command-line values take precedence over the config file.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(user) = &self.user {
            config.profile.username = Some(user.clone());
        }
        if let Some(limit) = self.limit {
            config.feed.fetch_limit = limit;
        }
        if let Some(zone) = &self.zone {
            config.report.time_zone = zone.clone();
        }
        if let Some(output) = &self.output {
            config.report.output_path = output.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    args.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    let _log_guard = crumbs_core::logging::init(&config.logging).ok();

    tracing::info!("crumbs starting up");

    let projector = ZoneProjector::new(&config.report.time_zone)
        .context("failed to resolve report time zone")?;

    let records = match &args.events_file {
        Some(path) => {
            let feed = FileFeed::new(path).with_limit(config.feed.fetch_limit);
            tracing::info!(path = %feed.path().display(), "Reading events from file");
            feed.fetch()
        }
        None => {
            let username = config.profile.require_username()?;
            GithubFeed::from_env(config.feed.clone(), username)?.fetch()
        }
    }
    .context("can't read events")?;

    let settings = ReportSettings {
        projector: &projector,
        phrases: &GithubPhrases,
        plot: &config.plot,
        sample_size: config.report.sample_size,
        attribution: config.profile.attribution_line(),
    };
    let report =
        generate_report(&records, &settings, Utc::now()).context("failed to build report")?;

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    if args.stdout {
        print!("{}", report.text);
    } else {
        let path = &config.report.output_path;
        report
            .write_to(path)
            .with_context(|| format!("can't write {}", path.display()))?;
        println!(
            "Wrote {} ({} events, {} repositories)",
            path.display(),
            report.stats.total,
            report.stats.group_counts.len()
        );
    }

    tracing::info!("crumbs finished");

    Ok(())
}
