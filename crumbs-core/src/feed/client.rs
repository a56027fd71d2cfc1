//! HTTP client for the GitHub public events API
//!
//! The client is async internally but exposes the blocking [`ActivityFeed`]
//! interface by driving a private current-thread runtime.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use crate::config::FeedConfig;
use crate::error::{Error, Result};
use crate::types::ActivityRecord;

use super::events::parse_events;
use super::ActivityFeed;

/// Blocking client for `GET /users/{username}/events`.
pub struct GithubFeed {
    config: FeedConfig,
    username: String,
    http_client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
}

impl GithubFeed {
    /// Create a client for `username` authenticated with `token`.
    pub fn new(config: FeedConfig, username: &str, token: &str) -> Result<Self> {
        config.validate()?;

        let base_url = config.api_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("crumbs/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| Error::Config(format!("invalid access token: {}", e)))?,
        );

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Feed(format!("failed to create runtime: {}", e)))?;

        Ok(Self {
            config,
            username: username.to_string(),
            http_client,
            runtime,
            base_url,
        })
    }

    /// Create a client reading the token from `config.token_env`.
    pub fn from_env(config: FeedConfig, username: &str) -> Result<Self> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "null token in environment, did you forget to set {}?",
                    config.token_env
                ))
            })?;
        Self::new(config, username, &token)
    }

    /// URL of the events page this client requests
    pub fn events_url(&self) -> String {
        format!(
            "{}/users/{}/events?per_page={}",
            self.base_url,
            urlencoding::encode(&self.username),
            self.config.fetch_limit
        )
    }

    async fn fetch_events(&self) -> Result<Vec<ActivityRecord>> {
        let url = self.events_url();

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Feed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Feed(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Feed(format!("API error ({}): {}", status, body)));
        }

        parse_events(&body)
            .map_err(|e| Error::Feed(format!("failed to parse response: {}", e)))
    }

    /// Fetch with retry logic
    ///
    /// Retries transient failures (5xx, timeouts) with exponential backoff.
    async fn fetch_events_with_retry(&self) -> Result<Vec<ActivityRecord>> {
        let mut last_error = None;
        let mut delay = Duration::from_millis(500);

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "Retrying events fetch (attempt {}/{}), waiting {:?}",
                    attempt + 1,
                    self.config.max_retries + 1,
                    delay
                );
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, Duration::from_secs(30));
            }

            match self.fetch_events().await {
                Ok(records) => return Ok(records),
                Err(e) if is_retryable_error(&e) => {
                    tracing::warn!("Transient error fetching events: {}", e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Feed("max retries exceeded".to_string())))
    }
}

impl ActivityFeed for GithubFeed {
    fn fetch(&self) -> Result<Vec<ActivityRecord>> {
        tracing::info!(user = %self.username, limit = self.config.fetch_limit, "Fetching events");
        let mut records = self.runtime.block_on(self.fetch_events_with_retry())?;
        records.truncate(self.config.fetch_limit);
        Ok(records)
    }
}

/// Check if an error is retryable (transient)
fn is_retryable_error(error: &Error) -> bool {
    match error {
        Error::Feed(msg) => {
            // Retry on 5xx errors
            msg.contains("API error (5")
                // Retry on network/timeout errors
                || msg.contains("timeout")
                || msg.contains("connection")
                || msg.contains("request failed")
        }
        _ => false,
    }
}
