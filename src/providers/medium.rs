//! Medium tag feed client
//!
//! Medium has no public search API, but it serves an RSS feed per tag at
//! `https://medium.com/feed/tag/<tag>`. This module fetches that feed,
//! keeps the feed's native newest-first ordering, and truncates to the
//! requested count after parsing.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::Client;
use rss::Channel;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ProviderError, ProviderKind};
use crate::models::Article;
use crate::providers::ArticleSource;
use crate::utils::{normalize_whitespace, truncate_text};

const DEFAULT_BASE_URL: &str = "https://medium.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest summary kept on an article
const SUMMARY_MAX_CHARS: usize = 240;

/// Tag feed client for Medium
pub struct MediumClient {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Base URL, overridable for testing with mock servers
    base_url: String,
}

impl MediumClient {
    /// Create a new client with default settings
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be created
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom request timeout
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be created
    pub fn with_config(timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("learnpath/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ProviderError::from_reqwest(ProviderKind::Medium, e))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a new client with a custom base URL for testing
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidUrl` if the base URL does not parse
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| ProviderError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut client = Self::new()?;
        client.base_url = base_url.trim_end_matches('/').to_string();
        Ok(client)
    }

    /// Fetch recent articles for a tag, newest first
    ///
    /// Feed items missing a title, link, or publication date are skipped.
    /// An unknown tag yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on transport failures, non-success statuses,
    /// or a feed body that is not valid RSS
    pub async fn fetch_articles(
        &self,
        tag: &str,
        max_articles: usize,
    ) -> Result<Vec<Article>, ProviderError> {
        if max_articles == 0 {
            return Ok(Vec::new());
        }

        let url = format!("{}/feed/tag/{}", self.base_url, tag);
        debug!("Fetching tag feed: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(ProviderKind::Medium, e))?;

        let status = response.status();
        if status.as_u16() == 404 {
            // Medium answers unknown tags with 404, treat it as an empty feed
            debug!("Tag feed not found: {tag}");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::Auth {
                    provider: ProviderKind::Medium,
                },
                429 => ProviderError::RateLimited {
                    provider: ProviderKind::Medium,
                },
                code => ProviderError::Status {
                    provider: ProviderKind::Medium,
                    status: code,
                },
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_reqwest(ProviderKind::Medium, e))?;

        let channel = Channel::read_from(&bytes[..]).map_err(|e| ProviderError::Malformed {
            provider: ProviderKind::Medium,
            detail: e.to_string(),
        })?;

        let mut articles = Vec::with_capacity(max_articles.min(channel.items().len()));
        for item in channel.items() {
            if articles.len() == max_articles {
                break;
            }
            match article_from_item(item) {
                Some(article) => articles.push(article),
                None => warn!("Skipping feed item without title, link, or date in tag {tag}"),
            }
        }

        debug!("Tag feed {tag} yielded {} articles", articles.len());
        Ok(articles)
    }
}

#[async_trait]
impl ArticleSource for MediumClient {
    async fn articles_for_tag(
        &self,
        tag: &str,
        max_articles: usize,
    ) -> Result<Vec<Article>, ProviderError> {
        self.fetch_articles(tag, max_articles).await
    }
}

/// Convert a skill name into a tag slug
///
/// Lowercases and joins whitespace-separated words with hyphens, so
/// "Machine Learning" becomes "machine-learning".
pub fn tag_slug(skill: &str) -> String {
    skill
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Build an article from a feed item, if the required fields are present
fn article_from_item(item: &rss::Item) -> Option<Article> {
    let title = item.title()?;
    let link = item.link()?;
    let published_at = item.pub_date().and_then(parse_rfc2822)?;

    Some(Article {
        title: normalize_whitespace(&html_escape::decode_html_entities(title)),
        url: link.to_string(),
        published_at,
        summary: item
            .description()
            .map(clean_summary)
            .filter(|s| !s.is_empty()),
    })
}

/// Clean a feed description
///
/// - Remove HTML tags
/// - Decode HTML entities
/// - Normalize whitespace and truncate
fn clean_summary(description: &str) -> String {
    static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

    let no_tags = HTML_TAG_REGEX.replace_all(description, " ");
    let decoded = html_escape::decode_html_entities(&no_tags);
    truncate_text(&normalize_whitespace(&decoded), SUMMARY_MAX_CHARS)
}

fn parse_rfc2822(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
