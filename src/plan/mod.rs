//! Learning-plan assembly
//!
//! This module turns the fetched resource lists into a weekly plan. The
//! allocation is a pure function of the input sequences and the quotas: no
//! network access, no re-fetching, no randomness. Resources are dealt out
//! in provider order, earliest weeks first, and are never repeated across
//! weeks. When the providers returned fewer items than the quotas need,
//! later weeks stay partially filled or empty and the plan carries a
//! shortage report instead of an error.

use std::collections::HashSet;

use crate::models::{Article, LearningPlan, ShortageReport, Video, WeekModule};

/// Fallback themes for a four-week arc
const DEFAULT_THEMES: [&str; 4] = [
    "Foundations",
    "Core Concepts",
    "Advanced Topics",
    "Project & Practice",
];

/// Words too generic to serve as a weekly theme
const THEME_STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "this", "that", "your", "you", "how", "what", "why",
    "when", "all", "not", "are", "can", "get", "use", "using", "into", "every", "need", "know",
    "tutorial", "tutorials", "course", "courses", "guide", "guides", "learn", "learning",
    "complete", "full", "crash", "beginner", "beginners", "advanced", "introduction", "intro",
    "part", "episode", "series", "explained", "basics", "best", "tips", "tricks", "step",
    "make", "build", "building", "create", "creating", "minutes", "hours", "video", "videos",
    "article", "articles",
];

/// Build a weekly learning plan from fetched resources
///
/// Inputs are deduplicated by URL (first occurrence wins), clamped to what
/// the quotas can use, and sliced into consecutive per-week runs. Calling
/// this again with the same inputs yields an identical plan.
pub fn allocate(
    skill: &str,
    videos: Vec<Video>,
    articles: Vec<Article>,
    weeks: u32,
    videos_per_week: u32,
    articles_per_week: u32,
) -> LearningPlan {
    let videos = dedup_by_url(videos, |v: &Video| &v.url);
    let articles = dedup_by_url(articles, |a: &Article| &a.url);

    let week_count = weeks as usize;
    let per_videos = videos_per_week as usize;
    let per_articles = articles_per_week as usize;

    let needed_videos = week_count.saturating_mul(per_videos);
    let needed_articles = week_count.saturating_mul(per_articles);
    let usable_videos = videos.len().min(needed_videos);
    let usable_articles = articles.len().min(needed_articles);

    let shortage = ShortageReport {
        videos: usable_videos < needed_videos,
        articles: usable_articles < needed_articles,
        usable_videos,
        needed_videos,
        usable_articles,
        needed_articles,
    };

    let mut modules = Vec::with_capacity(week_count);
    for week in 0..week_count {
        let week_videos = slice_week(&videos, week, per_videos, usable_videos);
        let week_articles = slice_week(&articles, week, per_articles, usable_articles);
        modules.push(WeekModule {
            index: (week + 1) as u32,
            theme: derive_theme(skill, week, &week_videos, &week_articles),
            activity: suggest_activity(week, skill),
            videos: week_videos,
            articles: week_articles,
        });
    }

    LearningPlan {
        skill: skill.to_string(),
        weeks: modules,
        videos_per_week,
        articles_per_week,
        shortage,
    }
}

/// Keep the first occurrence of each URL, preserving order
fn dedup_by_url<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item).to_string()))
        .collect()
}

/// Contiguous slice for one week, clipped to the usable prefix
fn slice_week<T: Clone>(items: &[T], week: usize, per_week: usize, usable: usize) -> Vec<T> {
    let start = week.saturating_mul(per_week).min(usable);
    let end = start.saturating_add(per_week).min(usable);
    items[start..end].to_vec()
}

// ============================================================================
// Themes
// ============================================================================

/// Derive a short theme label for a week
///
/// Prefers a keyword that recurs across this week's resource titles. When
/// the titles give no signal, falls back to a fixed four-phase arc and
/// finally to the plain week number. Same inputs, same label.
fn derive_theme(skill: &str, week: usize, videos: &[Video], articles: &[Article]) -> String {
    let titles = videos
        .iter()
        .map(|v| v.title.as_str())
        .chain(articles.iter().map(|a| a.title.as_str()));

    if let Some(keyword) = dominant_keyword(titles, skill) {
        return keyword;
    }

    DEFAULT_THEMES
        .get(week)
        .map(|theme| (*theme).to_string())
        .unwrap_or_else(|| format!("Week {}", week + 1))
}

/// Most frequent meaningful title word, title-cased
///
/// Words must appear at least twice to count. Stopwords, digits, short
/// tokens, and the skill's own words are ignored. Ties resolve to the word
/// seen first, keeping the result stable.
fn dominant_keyword<'a>(titles: impl Iterator<Item = &'a str>, skill: &str) -> Option<String> {
    let skill_words: Vec<String> = skill
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut counts: Vec<(String, usize)> = Vec::new();
    for title in titles {
        for word in title.split(|c: char| !c.is_alphanumeric()) {
            let word = word.to_lowercase();
            if word.len() < 3
                || word.chars().all(|c| c.is_ascii_digit())
                || THEME_STOPWORDS.contains(&word.as_str())
                || skill_words.contains(&word)
            {
                continue;
            }
            match counts.iter_mut().find(|(seen, _)| *seen == word) {
                Some((_, count)) => *count += 1,
                None => counts.push((word, 1)),
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (word, count) in &counts {
        if best.map_or(true, |(_, best_count)| *count > best_count) {
            best = Some((word, *count));
        }
    }

    match best {
        Some((word, count)) if count >= 2 => Some(title_case(word)),
        _ => None,
    }
}

/// Uppercase the first character
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ============================================================================
// Activities
// ============================================================================

/// Suggested hands-on activity for a week
///
/// The suggestions follow the same arc as the fallback themes: set up and
/// absorb, practice, apply, then consolidate in a capstone.
fn suggest_activity(week: usize, skill: &str) -> String {
    match week {
        0 => format!(
            "Set up a working environment for {skill} and reproduce the basic examples \
             from this week's videos, summarising the key ideas in your own words."
        ),
        1 => format!(
            "Write small programs that exercise the core features of {skill}, working \
             through the examples from this week's articles with your own variations."
        ),
        2 => format!(
            "Build a mini-project that applies the more advanced features of {skill} \
             covered this week."
        ),
        _ => format!(
            "Develop a capstone project that combines several aspects of {skill}, and \
             write a short walkthrough of how it works."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn video(n: usize) -> Video {
        Video {
            video_id: format!("vid{n}"),
            title: format!("Video {n}"),
            channel: "Test Channel".to_string(),
            url: format!("https://youtube.example/watch?v=vid{n}"),
            published_at: None,
            duration_secs: Some(60 * n as u32),
        }
    }

    fn article(n: usize) -> Article {
        Article {
            title: format!("Article {n}"),
            url: format!("https://medium.example/article-{n}"),
            published_at: Utc.with_ymd_and_hms(2024, 4, 1 + n as u32, 0, 0, 0).unwrap(),
            summary: None,
        }
    }

    fn videos(n: usize) -> Vec<Video> {
        (1..=n).map(video).collect()
    }

    fn articles(n: usize) -> Vec<Article> {
        (1..=n).map(article).collect()
    }

    #[test]
    fn test_exact_fill() {
        let plan = allocate("rust", videos(8), articles(8), 4, 2, 2);
        assert_eq!(plan.weeks.len(), 4);
        for week in &plan.weeks {
            assert_eq!(week.videos.len(), 2);
            assert_eq!(week.articles.len(), 2);
        }
        assert!(!plan.shortage.any());
    }

    #[test]
    fn test_order_preserved_across_weeks() {
        let plan = allocate("rust", videos(8), articles(8), 4, 2, 2);
        let flattened: Vec<String> = plan
            .weeks
            .iter()
            .flat_map(|w| w.videos.iter().map(|v| v.video_id.clone()))
            .collect();
        let expected: Vec<String> = (1..=8).map(|n| format!("vid{n}")).collect();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_shortage_fills_early_weeks_first() {
        let plan = allocate("rust", videos(3), articles(8), 4, 2, 2);
        let counts: Vec<usize> = plan.weeks.iter().map(|w| w.videos.len()).collect();
        assert_eq!(counts, vec![2, 1, 0, 0]);
        assert!(plan.shortage.videos);
        assert!(!plan.shortage.articles);
        assert_eq!(plan.shortage.usable_videos, 3);
        assert_eq!(plan.shortage.needed_videos, 8);
    }

    #[test]
    fn test_surplus_is_dropped() {
        let plan = allocate("rust", videos(20), articles(20), 2, 2, 2);
        assert_eq!(plan.total_videos(), 4);
        assert_eq!(plan.total_articles(), 4);
        assert!(!plan.shortage.any());
    }

    #[test]
    fn test_zero_weeks_gives_empty_plan() {
        let plan = allocate("rust", videos(5), articles(5), 0, 2, 2);
        assert!(plan.weeks.is_empty());
        assert!(!plan.shortage.any());
        assert_eq!(plan.shortage.needed_videos, 0);
    }

    #[test]
    fn test_zero_quota_gives_empty_slots() {
        let plan = allocate("rust", videos(5), articles(6), 3, 0, 2);
        assert_eq!(plan.weeks.len(), 3);
        for week in &plan.weeks {
            assert!(week.videos.is_empty());
            assert_eq!(week.articles.len(), 2);
        }
        assert!(!plan.shortage.any());
    }

    #[test]
    fn test_duplicate_urls_collapse() {
        let mut input = videos(3);
        input.push(video(2));
        input.push(video(1));
        let plan = allocate("rust", input, vec![], 2, 2, 0);
        let ids: Vec<&str> = plan
            .weeks
            .iter()
            .flat_map(|w| w.videos.iter().map(|v| v.video_id.as_str()))
            .collect();
        assert_eq!(ids, vec!["vid1", "vid2", "vid3"]);
    }

    #[test]
    fn test_allocation_is_idempotent() {
        let first = allocate("rust", videos(7), articles(5), 4, 2, 2);
        let second = allocate("rust", videos(7), articles(5), 4, 2, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_week_indexes_are_one_based() {
        let plan = allocate("rust", videos(4), articles(4), 2, 2, 2);
        let indexes: Vec<u32> = plan.weeks.iter().map(|w| w.index).collect();
        assert_eq!(indexes, vec![1, 2]);
    }

    #[test]
    fn test_theme_from_recurring_keyword() {
        let mut input = videos(2);
        input[0].title = "Rust ownership deep dive".to_string();
        input[1].title = "Understanding ownership rules".to_string();
        let plan = allocate("rust", input, vec![], 1, 2, 0);
        assert_eq!(plan.weeks[0].theme, "Ownership");
    }

    #[test]
    fn test_theme_ignores_skill_words() {
        let mut input = videos(2);
        input[0].title = "Machine learning crash course".to_string();
        input[1].title = "Machine learning explained".to_string();
        let plan = allocate("machine learning", input, vec![], 1, 2, 0);
        // Nothing recurs beyond the skill itself, fall back to the arc
        assert_eq!(plan.weeks[0].theme, "Foundations");
    }

    #[test]
    fn test_theme_falls_back_to_arc_then_week_number() {
        let plan = allocate("rust", videos(12), articles(0), 6, 2, 0);
        assert_eq!(plan.weeks[0].theme, "Foundations");
        assert_eq!(plan.weeks[3].theme, "Project & Practice");
        assert_eq!(plan.weeks[4].theme, "Week 5");
        assert_eq!(plan.weeks[5].theme, "Week 6");
    }

    #[test]
    fn test_themes_are_deterministic() {
        let build = || {
            let mut input = videos(4);
            input[0].title = "Async patterns in practice".to_string();
            input[1].title = "Async runtimes compared".to_string();
            input[2].title = "Testing async code".to_string();
            input[3].title = "Channels and tasks".to_string();
            allocate("rust", input, vec![], 2, 2, 0)
        };
        let themes: Vec<String> = build().weeks.into_iter().map(|w| w.theme).collect();
        for _ in 0..10 {
            let again: Vec<String> = build().weeks.into_iter().map(|w| w.theme).collect();
            assert_eq!(themes, again);
        }
        assert_eq!(themes[0], "Async");
    }

    #[test]
    fn test_activities_mention_skill_and_vary() {
        let plan = allocate("kubernetes", videos(10), articles(10), 5, 2, 2);
        for week in &plan.weeks {
            assert!(week.activity.contains("kubernetes"));
        }
        assert_ne!(plan.weeks[0].activity, plan.weeks[1].activity);
        assert_ne!(plan.weeks[1].activity, plan.weeks[2].activity);
        // Week 4 onwards reuses the capstone suggestion
        assert_eq!(plan.weeks[3].activity, plan.weeks[4].activity);
    }
}
