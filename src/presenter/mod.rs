//! Plan rendering
//!
//! This module renders a finished plan for the terminal. The default layout
//! is one table per week's videos and articles; the plain layout is an
//! indented listing driven by a Handlebars template, for piping into other
//! tools.

use anyhow::{Context, Result};
use comfy_table::{presets, Cell, Table};
use handlebars::Handlebars;
use serde::Serialize;

use crate::models::{LearningPlan, WeekModule};
use crate::utils::truncate_text;

/// Default plain-text template
const PLAN_TEMPLATE: &str = include_str!("../../templates/plan.hbs");

/// Longest title shown in a table cell
const TABLE_TITLE_MAX_CHARS: usize = 60;

/// Output style for a rendered plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Tables per week
    #[default]
    Table,
    /// Indented plain text
    Plain,
}

/// Plan renderer with Handlebars template engine
pub struct Presenter<'a> {
    /// Handlebars template engine
    handlebars: Handlebars<'a>,
}

impl<'a> Presenter<'a> {
    /// Create a new presenter with the default template
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Output is plain text, keep & and friends as-is
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string("plan", PLAN_TEMPLATE)
            .context("Failed to register plan template")?;

        Ok(Self { handlebars })
    }

    /// Render a plan in the requested style
    pub fn render(&self, plan: &LearningPlan, style: RenderStyle) -> Result<String> {
        match style {
            RenderStyle::Table => Ok(self.render_table(plan)),
            RenderStyle::Plain => self.render_plain(plan),
        }
    }

    fn render_plain(&self, plan: &LearningPlan) -> Result<String> {
        let data = PlanTemplateData::from(plan);
        self.handlebars
            .render("plan", &data)
            .context("Failed to render plan template")
    }

    fn render_table(&self, plan: &LearningPlan) -> String {
        let mut out = String::new();
        out.push_str(&summary_line(plan));
        out.push('\n');

        for note in shortage_notes(plan) {
            out.push_str(&format!("Note: {note}\n"));
        }

        if plan.weeks.is_empty() {
            out.push_str(EMPTY_PLAN_NOTICE);
            out.push('\n');
            return out;
        }

        for week in &plan.weeks {
            out.push('\n');
            out.push_str(&format!("Week {}: {}\n", week.index, week.theme));

            if week.videos.is_empty() {
                out.push_str("Videos: none found\n");
            } else {
                out.push_str(&format!("{}\n", video_table(week)));
            }
            if let Some(note) = video_note(plan, week) {
                out.push_str(&format!("({note})\n"));
            }

            if week.articles.is_empty() {
                out.push_str("Articles: none found\n");
            } else {
                out.push_str(&format!("{}\n", article_table(week)));
            }
            if let Some(note) = article_note(plan, week) {
                out.push_str(&format!("({note})\n"));
            }

            out.push_str(&format!("Activity: {}\n", week.activity));
        }
        out
    }
}

const EMPTY_PLAN_NOTICE: &str = "Nothing to plan: the requested week count is 0.";

fn summary_line(plan: &LearningPlan) -> String {
    format!(
        "Learning plan for {}: {} weeks, {} videos, {} articles",
        plan.skill,
        plan.weeks.len(),
        plan.total_videos(),
        plan.total_articles()
    )
}

/// Plan-level shortage notes, videos first
fn shortage_notes(plan: &LearningPlan) -> Vec<String> {
    let mut notes = Vec::new();
    if plan.shortage.videos {
        notes.push(format!(
            "found only {} of {} requested videos",
            plan.shortage.usable_videos, plan.shortage.needed_videos
        ));
    }
    if plan.shortage.articles {
        notes.push(format!(
            "found only {} of {} requested articles",
            plan.shortage.usable_articles, plan.shortage.needed_articles
        ));
    }
    notes
}

fn video_note(plan: &LearningPlan, week: &WeekModule) -> Option<String> {
    (plan.shortage.videos && week.videos.len() < plan.videos_per_week as usize)
        .then(|| "insufficient videos found for this topic".to_string())
}

fn article_note(plan: &LearningPlan, week: &WeekModule) -> Option<String> {
    (plan.shortage.articles && week.articles.len() < plan.articles_per_week as usize)
        .then(|| "insufficient articles found for this topic".to_string())
}

fn video_table(week: &WeekModule) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.set_header(vec!["#", "Video", "Channel", "Duration", "URL"]);
    for (i, video) in week.videos.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(truncate_text(&video.title, TABLE_TITLE_MAX_CHARS)),
            Cell::new(&video.channel),
            Cell::new(video.duration_display()),
            Cell::new(&video.url),
        ]);
    }
    table
}

fn article_table(week: &WeekModule) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.set_header(vec!["#", "Article", "Published", "URL"]);
    for (i, article) in week.articles.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(truncate_text(&article.title, TABLE_TITLE_MAX_CHARS)),
            Cell::new(article.published_display()),
            Cell::new(&article.url),
        ]);
    }
    table
}

// ============================================================================
// Template data
// ============================================================================

/// Template data for the plain rendering
#[derive(Debug, Serialize)]
struct PlanTemplateData {
    skill: String,
    week_count: usize,
    total_videos: usize,
    total_articles: usize,
    notes: Vec<String>,
    weeks: Vec<WeekTemplateData>,
    empty_notice: String,
}

#[derive(Debug, Serialize)]
struct WeekTemplateData {
    index: u32,
    theme: String,
    activity: String,
    videos: Vec<ResourceRow>,
    articles: Vec<ResourceRow>,
    videos_note: Option<String>,
    articles_note: Option<String>,
}

/// One numbered resource line
#[derive(Debug, Serialize)]
struct ResourceRow {
    num: usize,
    title: String,
    detail: String,
    url: String,
}

impl From<&LearningPlan> for PlanTemplateData {
    fn from(plan: &LearningPlan) -> Self {
        let weeks = plan
            .weeks
            .iter()
            .map(|week| WeekTemplateData {
                index: week.index,
                theme: week.theme.clone(),
                activity: week.activity.clone(),
                videos: week
                    .videos
                    .iter()
                    .enumerate()
                    .map(|(i, v)| ResourceRow {
                        num: i + 1,
                        title: v.title.clone(),
                        detail: v.duration_display(),
                        url: v.url.clone(),
                    })
                    .collect(),
                articles: week
                    .articles
                    .iter()
                    .enumerate()
                    .map(|(i, a)| ResourceRow {
                        num: i + 1,
                        title: a.title.clone(),
                        detail: a.published_display(),
                        url: a.url.clone(),
                    })
                    .collect(),
                videos_note: video_note(plan, week),
                articles_note: article_note(plan, week),
            })
            .collect();

        Self {
            skill: plan.skill.clone(),
            week_count: plan.weeks.len(),
            total_videos: plan.total_videos(),
            total_articles: plan.total_articles(),
            notes: shortage_notes(plan),
            weeks,
            empty_notice: EMPTY_PLAN_NOTICE.to_string(),
        }
    }
}
