//! instafill command-line interface

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use field_resolver::Resolution;
use fill_engine::{FillEngine, FillObserver};
use instafill_cli::page_spec::PageSpec;
use instafill_cli::settings;
use instafill_core_types::{FillReport, RunId, Suggestion};
use page_model::{page_context, InMemoryPage};
use value_injector::InjectOutcome;

#[derive(Parser)]
#[command(
    name = "instafill",
    version,
    about = "Resolve suggested field values onto a page and fill them"
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and inject every suggestion against a page, with retries
    Fill {
        /// JSON file holding the suggestion list
        #[arg(long)]
        suggestions: PathBuf,

        /// JSON page spec to fill against
        #[arg(long)]
        page: PathBuf,

        /// Override the number of passes
        #[arg(long)]
        passes: Option<u32>,

        /// Override the pause between passes (e.g. "1s", "250ms")
        #[arg(long, value_parser = humantime::parse_duration)]
        interval: Option<Duration>,

        /// Optional JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },

    /// Print the form context a suggestion service would receive
    Context {
        /// JSON page spec to inspect
        #[arg(long)]
        page: PathBuf,
    },
}

/// Logs per-field outcomes as the run progresses.
struct ConsoleObserver;

#[async_trait]
impl FillObserver for ConsoleObserver {
    async fn on_field(
        &self,
        _run: &RunId,
        suggestion: &Suggestion,
        resolution: Option<&Resolution>,
        outcome: Option<&InjectOutcome>,
    ) {
        match (resolution, outcome) {
            (Some(resolution), Some(outcome)) => info!(
                field = suggestion.display_name(),
                strategy = resolution.strategy.name(),
                action = outcome.action.name(),
                filled = outcome.filled,
                "field processed"
            ),
            _ => info!(field = suggestion.display_name(), "field unresolved"),
        }
    }

    async fn on_pass_finished(&self, _run: &RunId, pass: u32, filled: u32) {
        info!(pass, filled, "pass finished");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Fill {
            suggestions,
            page,
            passes,
            interval,
            config,
            pretty,
        } => run_fill(&suggestions, &page, passes, interval, config.as_deref(), pretty).await,
        Commands::Context { page } => show_context(&page).await,
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn load_page(path: &Path) -> Result<InMemoryPage> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read page spec from {}", path.display()))?;
    Ok(PageSpec::from_json(&raw)?.build())
}

async fn run_fill(
    suggestions_path: &Path,
    page_path: &Path,
    passes: Option<u32>,
    interval: Option<Duration>,
    settings_path: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let raw = tokio::fs::read_to_string(suggestions_path)
        .await
        .with_context(|| {
            format!(
                "failed to read suggestions from {}",
                suggestions_path.display()
            )
        })?;
    let suggestions = parse_suggestions(&raw);
    let page = load_page(page_path).await?;
    let config = settings::load_config(settings_path, passes, interval)?;

    let engine = FillEngine::new(config).with_observer(Arc::new(ConsoleObserver));
    let report = engine.run(&page, &suggestions).await;

    print_report(&report, pretty)
}

/// A payload that is not a suggestion array degrades to an empty run.
fn parse_suggestions(raw: &str) -> Vec<Suggestion> {
    match serde_json::from_str(raw) {
        Ok(suggestions) => suggestions,
        Err(err) => {
            warn!(error = %err, "suggestion list unreadable; treating as empty");
            Vec::new()
        }
    }
}

fn print_report(report: &FillReport, pretty: bool) -> Result<()> {
    let envelope = serde_json::json!({
        "finishedAt": Utc::now().to_rfc3339(),
        "report": report,
    });
    let out = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    println!("{out}");
    Ok(())
}

async fn show_context(page_path: &Path) -> Result<()> {
    let page = load_page(page_path).await?;
    let context = page_context(&page).await?;
    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}
