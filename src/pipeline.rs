//! Plan generation pipeline
//!
//! This module wires the two providers to the allocator. Both fetches run
//! concurrently and independently; one provider failing does not cancel the
//! other, and a failure is only reported after both have finished.
//!
//! ```text
//! ┌──────────────┐
//! │ video search │──┐
//! └──────────────┘  │    ┌───────────┐     ┌───────────────┐
//!                   ├───▶│ allocator │────▶│ LearningPlan  │
//! ┌──────────────┐  │    └───────────┘     └───────────────┘
//! │   tag feed   │──┘
//! └──────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use learnpath::config::Config;
//! use learnpath::pipeline;
//! use learnpath::providers::{MediumClient, YouTubeClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = Config::from_env()?;
//! config.plan.skill = "rust".to_string();
//!
//! let youtube = YouTubeClient::new(&config.youtube.api_key)?;
//! let medium = MediumClient::new()?;
//!
//! let plan = pipeline::generate(&config, &youtube, &medium).await?;
//! println!("{} weeks planned", plan.weeks.len());
//! # Ok(())
//! # }
//! ```

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::models::LearningPlan;
use crate::plan;
use crate::providers::medium::tag_slug;
use crate::providers::youtube::MAX_RESULTS;
use crate::providers::{ArticleSource, VideoSource};

/// Fetch resources from both providers and assemble the weekly plan
///
/// The video query is the skill plus a "tutorial" keyword; the article tag
/// is the slugified skill. Shortages are logged here and recorded on the
/// returned plan.
///
/// # Errors
///
/// Returns the video provider's error when it failed, otherwise the article
/// provider's. Both fetches always run to completion first.
pub async fn generate<V, A>(config: &Config, videos: &V, articles: &A) -> Result<LearningPlan>
where
    V: VideoSource,
    A: ArticleSource,
{
    let skill = config.plan.skill.as_str();
    let query = format!("{skill} tutorial");
    let tag = tag_slug(skill);

    let needed_videos = config.plan.weeks.saturating_mul(config.plan.videos_per_week);
    let needed_articles = config
        .plan
        .weeks
        .saturating_mul(config.plan.articles_per_week) as usize;

    if needed_videos > MAX_RESULTS {
        warn!(
            "Plan needs {needed_videos} videos but the search API serves at most {MAX_RESULTS} \
             per query, later weeks may come up short"
        );
    }

    info!("Fetching resources for {skill:?}: query={query:?} tag={tag}");

    let (video_result, article_result) = tokio::join!(
        videos.search(&query, needed_videos, config.youtube.search_order),
        articles.articles_for_tag(&tag, needed_articles),
    );

    let (found_videos, found_articles) = match (video_result, article_result) {
        (Ok(v), Ok(a)) => (v, a),
        (Err(video_err), Err(article_err)) => {
            error!("Article fetch also failed: {article_err}");
            return Err(video_err.into());
        }
        (Err(video_err), Ok(_)) => return Err(video_err.into()),
        (Ok(_), Err(article_err)) => return Err(article_err.into()),
    };

    info!(
        "Found {} videos and {} articles",
        found_videos.len(),
        found_articles.len()
    );

    let plan = plan::allocate(
        skill,
        found_videos,
        found_articles,
        config.plan.weeks,
        config.plan.videos_per_week,
        config.plan.articles_per_week,
    );

    if plan.shortage.videos {
        warn!(
            "Only {} of {} requested videos were found, later weeks are short",
            plan.shortage.usable_videos, plan.shortage.needed_videos
        );
    }
    if plan.shortage.articles {
        warn!(
            "Only {} of {} requested articles were found, later weeks are short",
            plan.shortage.usable_articles, plan.shortage.needed_articles
        );
    }

    Ok(plan)
}
