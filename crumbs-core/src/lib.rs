//! # crumbs-core
//!
//! Core library for crumbs - turns a public activity feed into a profile README.
//!
//! This library provides:
//! - Domain types for activity records and aggregated statistics
//! - Hour-of-day and per-repository aggregation in a fixed local zone
//! - Fixed-width ASCII renderers (hour line plot, repository bars)
//! - Report composition with bread crumbs for recent activity
//! - A GitHub events client and an offline file feed
//! - Configuration management and logging infrastructure
//!
//! ## Pipeline
//!
//! ```text
//! feed -> StatsAggregator -> AggregateStats -> { hour plot, group bars, bread crumbs } -> Report
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use crumbs_core::feed::{ActivityFeed, FileFeed};
//! use crumbs_core::phrases::GithubPhrases;
//! use crumbs_core::report::{generate_report, ReportSettings};
//! use crumbs_core::timezone::ZoneProjector;
//! use crumbs_core::Config;
//!
//! let config = Config::load().expect("failed to load config");
//! let records = FileFeed::new("events.json").fetch().expect("failed to read events");
//! let projector = ZoneProjector::new(&config.report.time_zone).expect("unknown zone");
//!
//! let settings = ReportSettings {
//!     projector: &projector,
//!     phrases: &GithubPhrases,
//!     plot: &config.plot,
//!     sample_size: config.report.sample_size,
//!     attribution: config.profile.attribution_line(),
//! };
//! let report = generate_report(&records, &settings, chrono::Utc::now()).expect("empty feed");
//! print!("{}", report.text);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use report::{Report, UnmappedCategoryWarning};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod feed;
pub mod format;
pub mod logging;
pub mod phrases;
pub mod render;
pub mod report;
pub mod timezone;
pub mod types;
