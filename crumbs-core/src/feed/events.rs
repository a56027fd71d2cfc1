//! GitHub public event payloads
//!
//! Only the fields the report needs are decoded; everything else in the
//! event (actor, payload, ...) is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::ActivityRecord;

/// One entry of `GET /users/{user}/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubEvent {
    /// Event type, e.g. `PushEvent`
    #[serde(rename = "type")]
    pub event_type: String,

    /// Repository the event happened in
    pub repo: GithubRepo,

    /// When GitHub recorded the event
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    /// `owner/name`
    pub name: String,
}

impl From<GithubEvent> for ActivityRecord {
    fn from(event: GithubEvent) -> Self {
        ActivityRecord {
            timestamp: event.created_at,
            category: event.event_type,
            group: event.repo.name,
        }
    }
}

/// Decode an events response body into records, keeping feed order.
pub fn parse_events(json: &str) -> Result<Vec<ActivityRecord>> {
    let events: Vec<GithubEvent> = serde_json::from_str(json)?;
    Ok(events.into_iter().map(ActivityRecord::from).collect())
}
