//! Common test utilities

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod fixtures;

use chrono::{TimeZone, Utc};
use learnpath::models::{Article, Video};

/// Create a numbered test video
///
/// Titles are generic on purpose so theme derivation falls back to the
/// default arc instead of latching onto fixture words.
pub fn make_video(n: usize) -> Video {
    Video {
        video_id: format!("vid{n:02}"),
        title: format!("Video {n}"),
        channel: "Test Channel".to_string(),
        url: format!("https://www.youtube.com/watch?v=vid{n:02}"),
        published_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        duration_secs: Some(300 + n as u32),
    }
}

/// Create a numbered test article
pub fn make_article(n: usize) -> Article {
    Article {
        title: format!("Article {n}"),
        url: format!("https://medium.com/@writer/article-{n}"),
        published_at: Utc
            .with_ymd_and_hms(2024, 4, 1, 0, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::hours(n as i64))
            .unwrap(),
        summary: None,
    }
}

/// First `n` numbered videos
pub fn make_videos(n: usize) -> Vec<Video> {
    (1..=n).map(make_video).collect()
}

/// First `n` numbered articles
pub fn make_articles(n: usize) -> Vec<Article> {
    (1..=n).map(make_article).collect()
}
