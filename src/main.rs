use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learnpath::config::Config;
use learnpath::error::{Error, Result};
use learnpath::pipeline;
use learnpath::presenter::{Presenter, RenderStyle};
use learnpath::providers::youtube::SearchOrder;
use learnpath::providers::{MediumClient, YouTubeClient};

#[derive(Parser)]
#[command(
    name = "learnpath",
    version,
    about = "Generate a weekly learning plan from YouTube videos and Medium articles",
    long_about = None
)]
struct Cli {
    /// Skill or topic to build the plan around
    #[arg(long)]
    skill: String,

    /// YouTube Data API key, falls back to the YOUTUBE_API_KEY environment variable
    #[arg(long)]
    youtube_api_key: Option<String>,

    /// Number of weeks in the plan [default: 4]
    #[arg(long)]
    weeks: Option<u32>,

    /// Videos to recommend per week [default: 2]
    #[arg(long)]
    videos_per_week: Option<u32>,

    /// Articles to recommend per week [default: 2]
    #[arg(long)]
    articles_per_week: Option<u32>,

    /// Video search ordering: date, rating, relevance, title, viewCount [default: relevance]
    #[arg(long)]
    search_order: Option<String>,

    /// Render as plain text instead of tables
    #[arg(long)]
    no_table: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, default_value = "text")]
    log_format: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = setup_tracing(&cli.log_format, cli.verbose) {
        eprintln!("Error: {err}");
        std::process::exit(2);
    }

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(|e| Error::config(format!("{e:#}")))?,
        None => Config::from_env().map_err(|e| Error::config(format!("{e:#}")))?,
    };
    apply_cli_overrides(&mut config, &cli)?;
    config
        .validate()
        .map_err(|e| Error::config(format!("{e:#}")))?;

    tracing::info!(
        "Planning {} weeks for {:?} ({} videos, {} articles per week)",
        config.plan.weeks,
        config.plan.skill,
        config.plan.videos_per_week,
        config.plan.articles_per_week
    );

    let youtube = YouTubeClient::with_config(&config.youtube.api_key, config.youtube_timeout())?;
    let medium = MediumClient::with_config(config.medium_timeout())?;

    let plan = pipeline::generate(&config, &youtube, &medium).await?;

    let presenter = Presenter::new()?;
    let style = if cli.no_table {
        RenderStyle::Plain
    } else {
        RenderStyle::Table
    };
    println!("{}", presenter.render(&plan, style)?);

    Ok(())
}

/// Apply command-line flags on top of the loaded configuration
fn apply_cli_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    config.plan.skill = cli.skill.clone();

    if let Some(key) = &cli.youtube_api_key {
        config.youtube.api_key = key.clone();
    }
    if let Some(weeks) = cli.weeks {
        config.plan.weeks = weeks;
    }
    if let Some(videos) = cli.videos_per_week {
        config.plan.videos_per_week = videos;
    }
    if let Some(articles) = cli.articles_per_week {
        config.plan.articles_per_week = articles;
    }
    if let Some(order) = &cli.search_order {
        config.youtube.search_order = SearchOrder::parse(order).ok_or_else(|| {
            Error::config(format!(
                "Unknown search order {order:?}, expected one of: date, rating, relevance, title, viewCount"
            ))
        })?;
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("learnpath=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("learnpath=info,warn")
    };

    // Logs go to stderr so the rendered plan stays clean on stdout
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}
