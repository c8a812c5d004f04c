//! Configuration management for the learnpath CLI
//!
//! This module handles loading and validating configuration from environment
//! variables, files, and command-line arguments. Precedence is CLI flags over
//! config file over environment variables over built-in defaults; the flag
//! merging itself happens in the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::providers::youtube::SearchOrder;

/// Default number of weeks in a plan
pub const DEFAULT_WEEKS: u32 = 4;

/// Default videos recommended per week
pub const DEFAULT_VIDEOS_PER_WEEK: u32 = 2;

/// Default articles recommended per week
pub const DEFAULT_ARTICLES_PER_WEEK: u32 = 2;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Plan shape configuration
    pub plan: PlanConfig,

    /// Video provider configuration
    pub youtube: YouTubeConfig,

    /// Article provider configuration
    pub medium: MediumConfig,
}

/// Plan shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Skill or topic the plan is built around
    pub skill: String,

    /// Number of weeks in the plan
    pub weeks: u32,

    /// Videos recommended per week
    pub videos_per_week: u32,

    /// Articles recommended per week
    pub articles_per_week: u32,
}

/// Video provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YouTubeConfig {
    /// YouTube Data API key
    pub api_key: String,

    /// Ordering requested from the search endpoint
    pub search_order: SearchOrder,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Article provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediumConfig {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("YOUTUBE_API_KEY").unwrap_or_default();

        let search_order = std::env::var("LEARNPATH_SEARCH_ORDER")
            .ok()
            .and_then(|v| SearchOrder::parse(&v))
            .unwrap_or_default();

        let request_timeout_secs = std::env::var("LEARNPATH_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            plan: PlanConfig::default(),
            youtube: YouTubeConfig {
                api_key,
                search_order,
                request_timeout_secs,
            },
            medium: MediumConfig {
                request_timeout_secs,
            },
        })
    }

    /// Load configuration from a file
    ///
    /// Keys the file leaves unset keep their environment-derived values,
    /// preserving the file-over-env precedence.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let overlay: FileConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        let mut config = Self::from_env()?;
        overlay.apply(&mut config);
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Quotas larger than the providers can serve are not rejected here;
    /// they surface as shortage reports on the generated plan.
    pub fn validate(&self) -> Result<()> {
        if self.plan.skill.trim().is_empty() {
            anyhow::bail!("skill must not be empty");
        }

        if self.youtube.api_key.trim().is_empty() {
            anyhow::bail!(
                "YouTube API key is missing; pass --youtube-api-key or set YOUTUBE_API_KEY"
            );
        }

        if self.youtube.request_timeout_secs == 0 || self.medium.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        Ok(())
    }

    /// Get the YouTube request timeout as Duration
    #[must_use]
    pub fn youtube_timeout(&self) -> Duration {
        Duration::from_secs(self.youtube.request_timeout_secs)
    }

    /// Get the Medium request timeout as Duration
    #[must_use]
    pub fn medium_timeout(&self) -> Duration {
        Duration::from_secs(self.medium.request_timeout_secs)
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            skill: String::new(),
            weeks: DEFAULT_WEEKS,
            videos_per_week: DEFAULT_VIDEOS_PER_WEEK,
            articles_per_week: DEFAULT_ARTICLES_PER_WEEK,
        }
    }
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_order: SearchOrder::default(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for MediumConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

// ============================================================================
// File overlay
// ============================================================================

/// Configuration file schema, every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    plan: FilePlanConfig,
    youtube: FileYouTubeConfig,
    medium: FileMediumConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilePlanConfig {
    skill: Option<String>,
    weeks: Option<u32>,
    videos_per_week: Option<u32>,
    articles_per_week: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileYouTubeConfig {
    api_key: Option<String>,
    search_order: Option<SearchOrder>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileMediumConfig {
    request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Copy every key the file set onto the target configuration
    fn apply(self, config: &mut Config) {
        if let Some(skill) = self.plan.skill {
            config.plan.skill = skill;
        }
        if let Some(weeks) = self.plan.weeks {
            config.plan.weeks = weeks;
        }
        if let Some(videos) = self.plan.videos_per_week {
            config.plan.videos_per_week = videos;
        }
        if let Some(articles) = self.plan.articles_per_week {
            config.plan.articles_per_week = articles;
        }
        if let Some(api_key) = self.youtube.api_key {
            config.youtube.api_key = api_key;
        }
        if let Some(order) = self.youtube.search_order {
            config.youtube.search_order = order;
        }
        if let Some(timeout) = self.youtube.request_timeout_secs {
            config.youtube.request_timeout_secs = timeout;
        }
        if let Some(timeout) = self.medium.request_timeout_secs {
            config.medium.request_timeout_secs = timeout;
        }
    }
}
