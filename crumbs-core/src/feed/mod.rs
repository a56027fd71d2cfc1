//! Activity feed sources
//!
//! Records come either from the GitHub public events API or from a JSON file
//! holding a saved copy of that API's response. Both produce
//! [`ActivityRecord`]s in feed order, most recent first.
//!
//! ## Usage
//!
//! ```toml
//! [profile]
//! username = "octocat"
//!
//! [feed]
//! fetch_limit = 100
//! token_env = "GITHUB_TOKEN"
//! ```

mod client;
mod events;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::ActivityRecord;

pub use client::GithubFeed;
pub use events::{parse_events, GithubEvent, GithubRepo};

/// Source of activity records.
pub trait ActivityFeed {
    fn fetch(&self) -> Result<Vec<ActivityRecord>>;
}

/// Feed backed by a saved events response on disk.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
    limit: Option<usize>,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            limit: None,
        }
    }

    /// Keep at most `limit` leading records, as the API would.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityFeed for FileFeed {
    fn fetch(&self) -> Result<Vec<ActivityRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::Feed(format!(
                "failed to read events file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let mut records = parse_events(&content)?;
        if let Some(limit) = self.limit {
            records.truncate(limit);
        }
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded events file"
        );
        Ok(records)
    }
}
