//! learnpath - Weekly learning-plan generator
//!
//! Fetches video and article recommendations for a skill from YouTube search
//! and Medium tag feeds, then arranges them into a multi-week learning plan.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`providers`] - YouTube and Medium clients behind narrow source traits
//! - [`pipeline`] - Concurrent fetching wired into the allocator
//! - [`plan`] - Pure weekly allocation, themes, and activities
//! - [`presenter`] - Table and plain-text rendering
//! - [`models`] - Core data structures and types
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use learnpath::config::Config;
//! use learnpath::pipeline;
//! use learnpath::presenter::{Presenter, RenderStyle};
//! use learnpath::providers::{MediumClient, YouTubeClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut config = Config::from_env()?;
//!     config.plan.skill = "rust".to_string();
//!     config.validate()?;
//!
//!     let youtube = YouTubeClient::with_config(&config.youtube.api_key, config.youtube_timeout())?;
//!     let medium = MediumClient::with_config(config.medium_timeout())?;
//!
//!     let plan = pipeline::generate(&config, &youtube, &medium).await?;
//!     let presenter = Presenter::new()?;
//!     println!("{}", presenter.render(&plan, RenderStyle::Table)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod plan;
pub mod presenter;
pub mod providers;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, ProviderError, ProviderKind, Result};
    pub use crate::models::{Article, LearningPlan, ShortageReport, Video, WeekModule};
    pub use crate::pipeline::generate;
    pub use crate::presenter::{Presenter, RenderStyle};
    pub use crate::providers::{ArticleSource, MediumClient, VideoSource, YouTubeClient};
}

// Direct re-exports for convenience
pub use models::{Article, LearningPlan, ShortageReport, Video, WeekModule};
