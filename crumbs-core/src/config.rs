//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/crumbs/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/crumbs/` (~/.config/crumbs/)
//! - State/Logs: `$XDG_STATE_HOME/crumbs/` (~/.local/state/crumbs/)
//!
//! Every field has a default, so an empty or missing file is valid. Only
//! `profile.username` has to be supplied (here or on the command line) before
//! the feed can be fetched.

use crate::error::{Error, Result};
use crate::render::line_plot::LABEL_WIDTH;
use crate::types::HOURS_PER_DAY;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// GitHub caps a single events page at this many entries.
pub const MAX_FETCH_LIMIT: usize = 100;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Whose activity is reported
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Activity feed access
    #[serde(default)]
    pub feed: FeedConfig,

    /// Report composition and output
    #[serde(default)]
    pub report: ReportConfig,

    /// Hour plot geometry
    #[serde(default)]
    pub plot: PlotConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Profile the report is generated for
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ProfileConfig {
    /// Feed account name
    pub username: Option<String>,

    /// Line placed after the charts (defaults to a link to the profile)
    pub attribution: Option<String>,
}

impl ProfileConfig {
    /// The configured username, or an error naming the missing setting.
    pub fn require_username(&self) -> Result<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "profile.username is required (set it in config.toml or pass --user)"
                        .to_string(),
                )
            })
    }

    /// Attribution line, falling back to a markdown link to the profile.
    pub fn attribution_line(&self) -> String {
        if let Some(line) = &self.attribution {
            return line.clone();
        }
        match self.username.as_deref() {
            Some(name) => format!("**[{name}](https://github.com/{name})** · generated by crumbs"),
            None => "*Generated by crumbs*".to_string(),
        }
    }
}

/// Activity feed configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    /// API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Number of events requested (1-100)
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,

    /// Environment variable holding the access token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,

    /// Max retry attempts for transient failures
    #[serde(default = "default_feed_max_retries")]
    pub max_retries: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            fetch_limit: default_fetch_limit(),
            token_env: default_token_env(),
            timeout_secs: default_feed_timeout(),
            max_retries: default_feed_max_retries(),
        }
    }
}

impl FeedConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.fetch_limit == 0 || self.fetch_limit > MAX_FETCH_LIMIT {
            return Err(Error::Config(format!(
                "feed.fetch_limit must be between 1 and {}",
                MAX_FETCH_LIMIT
            )));
        }
        if self.api_url.trim().is_empty() {
            return Err(Error::Config("feed.api_url must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_fetch_limit() -> usize {
    MAX_FETCH_LIMIT
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_feed_timeout() -> u64 {
    30
}

fn default_feed_max_retries() -> usize {
    3
}

/// Report configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// IANA zone all times are shown in
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Where the document is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Number of recent records listed as bread crumbs
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            output_path: default_output_path(),
            sample_size: default_sample_size(),
        }
    }
}

fn default_time_zone() -> String {
    "America/Los_Angeles".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_sample_size() -> usize {
    crate::analytics::DEFAULT_SAMPLE_SIZE
}

/// Hour plot configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    /// Plot and ruler width in columns
    #[serde(default = "default_plot_width")]
    pub width: usize,

    /// Plot height in rows (above the zero row)
    #[serde(default = "default_plot_height")]
    pub height: usize,

    /// Hours between ruler ticks; must divide 24
    #[serde(default = "default_interval_hours")]
    pub interval_hours: usize,

    /// Caption centred under the hour labels
    #[serde(default = "default_caption")]
    pub caption: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_plot_width(),
            height: default_plot_height(),
            interval_hours: default_interval_hours(),
            caption: default_caption(),
        }
    }
}

impl PlotConfig {
    /// Check that labels and ticks fit the requested geometry.
    pub fn validate(&self) -> Result<()> {
        if self.interval_hours == 0 || HOURS_PER_DAY % self.interval_hours != 0 {
            return Err(Error::Config(format!(
                "plot.interval_hours must divide 24, got {}",
                self.interval_hours
            )));
        }
        if self.height == 0 {
            return Err(Error::Config("plot.height must be at least 1".to_string()));
        }
        let min_width = LABEL_WIDTH * (HOURS_PER_DAY / self.interval_hours);
        if self.width < min_width {
            return Err(Error::Config(format!(
                "plot.width must be at least {} for a {}h interval, got {}",
                min_width, self.interval_hours, self.width
            )));
        }
        Ok(())
    }
}

fn default_plot_width() -> usize {
    100
}

fn default_plot_height() -> usize {
    15
}

fn default_interval_hours() -> usize {
    2
}

fn default_caption() -> String {
    "Commits by Hour of Day".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Validate every section that has constraints
    pub fn validate(&self) -> Result<()> {
        self.feed.validate()?;
        self.plot.validate()?;
        Ok(())
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/crumbs/config.toml` (~/.config/crumbs/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("crumbs").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/crumbs/` (~/.local/state/crumbs/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("crumbs")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/crumbs/crumbs.log` (~/.local/state/crumbs/crumbs.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("crumbs.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.profile.username.is_none());
        assert_eq!(config.feed.fetch_limit, 100);
        assert_eq!(config.feed.token_env, "GITHUB_TOKEN");
        assert_eq!(config.report.time_zone, "America/Los_Angeles");
        assert_eq!(config.report.output_path, PathBuf::from("README.md"));
        assert_eq!(config.report.sample_size, 10);
        assert_eq!(config.plot.width, 100);
        assert_eq!(config.plot.height, 15);
        assert_eq!(config.plot.interval_hours, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[profile]
username = "octocat"

[feed]
fetch_limit = 50

[report]
time_zone = "Europe/London"
output_path = "profile/README.md"

[plot]
width = 80
interval_hours = 4

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.profile.require_username().unwrap(), "octocat");
        assert_eq!(config.feed.fetch_limit, 50);
        assert_eq!(config.feed.api_url, "https://api.github.com");
        assert_eq!(config.report.time_zone, "Europe/London");
        assert_eq!(config.plot.width, 80);
        assert_eq!(config.plot.height, 15);
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_username() {
        let profile = ProfileConfig::default();
        assert!(matches!(profile.require_username(), Err(Error::Config(_))));

        let blank = ProfileConfig {
            username: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.require_username().is_err());
    }

    #[test]
    fn test_attribution_line() {
        assert_eq!(
            ProfileConfig::default().attribution_line(),
            "*Generated by crumbs*"
        );

        let profile = ProfileConfig {
            username: Some("octocat".to_string()),
            attribution: None,
        };
        assert!(profile
            .attribution_line()
            .starts_with("**[octocat](https://github.com/octocat)**"));

        let custom = ProfileConfig {
            username: Some("octocat".to_string()),
            attribution: Some("Not an official product.".to_string()),
        };
        assert_eq!(custom.attribution_line(), "Not an official product.");
    }

    #[test]
    fn test_feed_config_validation() {
        let config = FeedConfig {
            fetch_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FeedConfig {
            fetch_limit: 101,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(FeedConfig::default().validate().is_ok());
    }

    #[test]
    fn test_plot_config_validation() {
        let bad_interval = PlotConfig {
            interval_hours: 7,
            ..Default::default()
        };
        assert!(bad_interval.validate().is_err());

        let too_narrow = PlotConfig {
            width: 59,
            ..Default::default()
        };
        assert!(too_narrow.validate().is_err());

        let flat = PlotConfig {
            height: 0,
            ..Default::default()
        };
        assert!(flat.validate().is_err());

        let hourly = PlotConfig {
            width: 120,
            interval_hours: 1,
            ..Default::default()
        };
        assert!(hourly.validate().is_ok());
    }
}
