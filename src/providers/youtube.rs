//! YouTube Data API v3 client
//!
//! This module implements video search against the `search.list` endpoint,
//! followed by a `videos.list` call that fills in ISO-8601 durations for the
//! found IDs. Results keep the ranking the API returned; the client never
//! re-sorts.
//!
//! The duration lookup is best-effort: when it fails the videos are still
//! returned, with unknown durations.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{ProviderError, ProviderKind};
use crate::models::Video;
use crate::providers::VideoSource;

/// Result ceiling imposed by the search endpoint
pub const MAX_RESULTS: u32 = 50;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Ordering of search results, as defined by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    Date,
    Rating,
    #[default]
    Relevance,
    Title,
    ViewCount,
}

impl SearchOrder {
    /// Get the query parameter value for this ordering
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Rating => "rating",
            Self::Relevance => "relevance",
            Self::Title => "title",
            Self::ViewCount => "viewCount",
        }
    }

    /// Parse a user-supplied ordering name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "date" => Some(Self::Date),
            "rating" => Some(Self::Rating),
            "relevance" => Some(Self::Relevance),
            "title" => Some(Self::Title),
            "viewcount" => Some(Self::ViewCount),
            _ => None,
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// YouTube Data API client
pub struct YouTubeClient {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// API key sent with every request
    api_key: String,

    /// Base URL, overridable for testing with mock servers
    base_url: String,

    /// Matcher for ISO-8601 durations ("PT1H2M30S")
    duration_re: Regex,
}

impl YouTubeClient {
    /// Create a new client with default settings
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be created
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_config(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom request timeout
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be created
    pub fn with_config(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("learnpath/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ProviderError::from_reqwest(ProviderKind::YouTube, e))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            // Days show up on very long streams, the T section covers the rest
            duration_re: Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
                .unwrap(),
        })
    }

    /// Create a new client with a custom base URL for testing
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidUrl` if the base URL does not parse
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| ProviderError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut client = Self::new(api_key)?;
        client.base_url = base_url.trim_end_matches('/').to_string();
        Ok(client)
    }

    /// Search for videos matching a query term
    ///
    /// `max_results` above the API ceiling of 50 is clamped to it. Results
    /// arrive in the requested order and are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on transport failures, non-success statuses,
    /// or an unparseable response body
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
    ) -> Result<Vec<Video>, ProviderError> {
        let capped = max_results.min(MAX_RESULTS);
        if capped == 0 {
            return Ok(Vec::new());
        }

        debug!(
            "Searching videos: query={:?} max_results={} order={}",
            query, capped, order
        );

        let url = format!("{}/search", self.base_url);
        let max_results_param = capped.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results_param.as_str()),
                ("order", order.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(ProviderKind::YouTube, e))?;

        let body: SearchResponse = read_json(response).await?;

        let ids: Vec<String> = body
            .items
            .iter()
            .filter_map(|item| item.id.video_id.clone())
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // Durations are cosmetic, keep the videos if the lookup fails
        let durations = match self.fetch_durations(&ids).await {
            Ok(map) => map,
            Err(err) => {
                warn!("Duration lookup failed, returning videos without durations: {err}");
                HashMap::new()
            }
        };

        let mut videos = Vec::with_capacity(body.items.len());
        for item in body.items {
            let Some(video_id) = item.id.video_id else {
                continue;
            };
            let snippet = item.snippet.unwrap_or_default();
            videos.push(Video {
                url: Video::watch_url(&video_id),
                title: html_escape::decode_html_entities(&snippet.title).into_owned(),
                channel: html_escape::decode_html_entities(&snippet.channel_title).into_owned(),
                published_at: snippet.published_at.as_deref().and_then(parse_rfc3339),
                duration_secs: durations.get(&video_id).copied(),
                video_id,
            });
        }

        debug!("Search returned {} videos", videos.len());
        Ok(videos)
    }

    /// Fetch durations for a batch of video IDs, keyed by ID
    async fn fetch_durations(&self, ids: &[String]) -> Result<HashMap<String, u32>, ProviderError> {
        let url = format!("{}/videos", self.base_url);
        let id_param = ids.join(",");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "contentDetails"),
                ("id", id_param.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(ProviderKind::YouTube, e))?;

        let body: VideosResponse = read_json(response).await?;

        let mut durations = HashMap::with_capacity(body.items.len());
        for item in body.items {
            match self.parse_duration(&item.content_details.duration) {
                Some(secs) => {
                    durations.insert(item.id, secs);
                }
                None => {
                    warn!(
                        "Unparseable duration {:?} for video {}",
                        item.content_details.duration, item.id
                    );
                }
            }
        }
        Ok(durations)
    }

    /// Parse an ISO-8601 duration into whole seconds
    ///
    /// Returns `None` for values that do not match the duration grammar,
    /// including the bare "P"/"PT" forms, and for totals that do not fit
    /// in a `u32`.
    fn parse_duration(&self, value: &str) -> Option<u32> {
        let caps = self.duration_re.captures(value)?;
        if (1..=4).all(|i| caps.get(i).is_none()) {
            return None;
        }
        let part = |i: usize| -> Option<u32> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };
        // The day term alone can exceed u32, so the sum is carried in u64
        let total = u64::from(part(1)?) * 86_400
            + u64::from(part(2)?) * 3_600
            + u64::from(part(3)?) * 60
            + u64::from(part(4)?);
        u32::try_from(total).ok()
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
    ) -> Result<Vec<Video>, ProviderError> {
        self.search_videos(query, max_results, order).await
    }
}

/// Check the status, then parse the body as JSON
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_status(status, &body));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ProviderError::from_reqwest(ProviderKind::YouTube, e))?;
    serde_json::from_str(&text).map_err(|e| ProviderError::Malformed {
        provider: ProviderKind::YouTube,
        detail: e.to_string(),
    })
}

/// Map a non-success status to a provider error
///
/// The API reports quota exhaustion as 403 and key problems as 400, so the
/// error body's `reason` entries are consulted before the status code.
fn classify_status(status: StatusCode, body: &str) -> ProviderError {
    let provider = ProviderKind::YouTube;

    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        for entry in &parsed.error.errors {
            match entry.reason.as_str() {
                "quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded"
                | "userRateLimitExceeded" => return ProviderError::RateLimited { provider },
                "keyInvalid" | "keyExpired" | "authError" | "forbidden" => {
                    return ProviderError::Auth { provider }
                }
                _ => {}
            }
        }
    }

    match status.as_u16() {
        401 | 403 => ProviderError::Auth { provider },
        429 => ProviderError::RateLimited { provider },
        code => ProviderError::Status {
            provider,
            status: code,
        },
    }
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ============================================================================
// API response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ApiErrorDetail {
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ApiErrorEntry {
    reason: String,
}
