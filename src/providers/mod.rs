//! Content providers for learning resources
//!
//! This module implements the clients for the two external sources a plan
//! draws from: YouTube search for videos and Medium tag feeds for articles.
//! Both clients expose a narrow trait so the plan pipeline can be driven by
//! stub sources in tests.

pub mod medium;
pub mod youtube;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{Article, Video};
use crate::providers::youtube::SearchOrder;

pub use medium::MediumClient;
pub use youtube::YouTubeClient;

/// Source of video recommendations
#[async_trait]
pub trait VideoSource {
    /// Search for videos matching a query term
    ///
    /// Zero matches is a valid empty result, not an error.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
    ) -> Result<Vec<Video>, ProviderError>;
}

/// Source of article recommendations
#[async_trait]
pub trait ArticleSource {
    /// Fetch recent articles for a topic tag, newest first
    ///
    /// An empty or missing feed is a valid empty result, not an error.
    async fn articles_for_tag(
        &self,
        tag: &str,
        max_articles: usize,
    ) -> Result<Vec<Article>, ProviderError>;
}
