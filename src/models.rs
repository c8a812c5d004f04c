// Core data structures for the learnpath planner

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video recommendation from the search provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub duration_secs: Option<u32>, // None when the duration lookup failed
}

impl Video {
    /// Build the public watch URL for a video ID
    pub fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={video_id}")
    }

    /// Duration as "m:ss" or "h:mm:ss", "--" when unknown
    pub fn duration_display(&self) -> String {
        match self.duration_secs {
            Some(secs) => format_duration(secs),
            None => "--".to_string(),
        }
    }
}

/// Format whole seconds as "m:ss" or "h:mm:ss"
pub fn format_duration(secs: u32) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Article recommendation from a tag feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub summary: Option<String>,
}

impl Article {
    /// Publication date as "YYYY-MM-DD"
    pub fn published_display(&self) -> String {
        self.published_at.format("%Y-%m-%d").to_string()
    }
}

/// One week of a learning plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekModule {
    /// 1-based week number
    pub index: u32,
    pub theme: String,
    pub videos: Vec<Video>,
    pub articles: Vec<Article>,
    pub activity: String,
}

/// Shortage condition attached to a plan
///
/// Insufficient search results are not an error: the plan is still built
/// from whatever was found, and this report records the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShortageReport {
    pub videos: bool,
    pub articles: bool,
    pub usable_videos: usize,
    pub needed_videos: usize,
    pub usable_articles: usize,
    pub needed_articles: usize,
}

impl ShortageReport {
    /// True when either resource fell short of its quota
    pub fn any(&self) -> bool {
        self.videos || self.articles
    }
}

/// Complete multi-week learning plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub skill: String,
    pub weeks: Vec<WeekModule>,
    /// Requested quotas, kept for rendering shortage notes
    pub videos_per_week: u32,
    pub articles_per_week: u32,
    pub shortage: ShortageReport,
}

impl LearningPlan {
    /// Total videos across all weeks
    pub fn total_videos(&self) -> usize {
        self.weeks.iter().map(|w| w.videos.len()).sum()
    }

    /// Total articles across all weeks
    pub fn total_articles(&self) -> usize {
        self.weeks.iter().map(|w| w.articles.len()).sum()
    }
}
