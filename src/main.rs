//! Vibe Ladder command line
//!
//! # Commands
//!
//! - `render`: write `index.html` and `assets/content.json` into the output dir
//! - `serve`: serve the page, the content document and quiz scoring over HTTP
//! - `quiz --answer q1=2 ...`: score an answer set and print the export text
//! - `theme show|toggle`: inspect or flip the persisted theme

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use vibe_ladder::adapters::clipboard::{FileClipboard, InMemoryClipboard};
use vibe_ladder::adapters::content::{FileContentSource, HttpContentSource};
use vibe_ladder::adapters::html::HtmlPageRenderer;
use vibe_ladder::adapters::http::{page_routes, PageAppState};
use vibe_ladder::adapters::storage::FileThemeStore;
use vibe_ladder::application::{
    CopyResultHandler, EvaluateQuizCommand, EvaluateQuizHandler, LoadContentHandler,
    LoadThemeHandler, PageSession, SessionPorts, ToggleThemeCommand, ToggleThemeHandler,
};
use vibe_ladder::config::{AppConfig, LogFormat};
use vibe_ladder::domain::content::{ContentStore, Score};
use vibe_ladder::domain::foundation::messages::CONTENT_LOAD_FAILED;
use vibe_ladder::domain::quiz::QuizAnswers;
use vibe_ladder::ports::{ContentSource, ThemeStore, CONTENT_PATH};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Vibe Ladder - AI competency article and self-assessment
#[derive(Parser)]
#[command(name = "vibe-ladder")]
#[command(version)]
#[command(about = "Render and serve the AI competency ladder article")]
#[command(propagate_version = true)]
struct Cli {
    /// Content document path, overrides configuration
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the static page and its content document
    Render {
        /// Output directory, overrides configuration
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the page over HTTP
    Serve,
    /// Score a complete answer set
    Quiz {
        /// Answer as `question=score`, repeated per question
        #[arg(short, long = "answer", value_parser = parse_answer, required = true)]
        answers: Vec<(String, Score)>,

        /// Also write the export text to this file
        #[arg(long)]
        copy_to: Option<PathBuf>,
    },
    /// Inspect or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Show,
    /// Flip between light and dark
    Toggle,
}

fn parse_answer(raw: &str) -> Result<(String, Score), String> {
    let (question, score) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected question=score, got '{raw}'"))?;
    let score = score
        .trim()
        .parse::<Score>()
        .map_err(|e| format!("invalid score '{score}': {e}"))?;
    Ok((question.trim().to_string(), score))
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    match config.server.log_format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn content_source(
    config: &AppConfig,
    override_path: Option<PathBuf>,
) -> CliResult<Arc<dyn ContentSource>> {
    if let Some(path) = override_path {
        return Ok(Arc::new(FileContentSource::new(path)));
    }
    match &config.content.base_url {
        Some(url) => Ok(Arc::new(HttpContentSource::new(url.clone())?)),
        None => Ok(Arc::new(FileContentSource::new(&config.content.path))),
    }
}

async fn load_content(source: Arc<dyn ContentSource>) -> CliResult<ContentStore> {
    Ok(LoadContentHandler::new(source).handle().await?)
}

fn theme_store(config: &AppConfig) -> Arc<dyn ThemeStore> {
    Arc::new(FileThemeStore::new(&config.site.state_dir))
}

/// Renders the initial state of a fresh page session.
async fn render(config: &AppConfig, source: Arc<dyn ContentSource>, output: &Path) -> CliResult {
    let ports = SessionPorts {
        content: source,
        theme_store: theme_store(config),
        renderer: Arc::new(HtmlPageRenderer::new()),
        clipboard: Arc::new(InMemoryClipboard::new()),
        fallback_clipboard: None,
    };
    let session = PageSession::open(ports, config.site.session_options()).await;
    let Some(content) = session.content() else {
        return Err(CONTENT_LOAD_FAILED.into());
    };
    let html = session.render(Instant::now());

    let content_path = output.join(CONTENT_PATH);
    if let Some(parent) = content_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output.join("index.html"), html).await?;
    tokio::fs::write(&content_path, serde_json::to_vec_pretty(content.document())?).await?;

    tracing::info!(output = %output.display(), "Page rendered");
    println!("{}", output.join("index.html").display());
    Ok(())
}

async fn serve(config: &AppConfig, source: Arc<dyn ContentSource>) -> CliResult {
    let content = LoadContentHandler::new(source).handle().await.ok();
    let state = PageAppState::new(content, Arc::new(HtmlPageRenderer::new()), theme_store(config));
    let app = page_routes(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn quiz(
    source: Arc<dyn ContentSource>,
    answers: Vec<(String, Score)>,
    copy_to: Option<PathBuf>,
) -> CliResult {
    let content = load_content(source).await?;
    let answers: QuizAnswers = answers.into_iter().collect();
    let result = EvaluateQuizHandler::new(content).handle(EvaluateQuizCommand { answers })?;

    println!("{}", result.export_text());

    if let Some(path) = copy_to {
        CopyResultHandler::new(Arc::new(FileClipboard::new(&path)))
            .handle(&result)
            .await?;
        tracing::info!(path = %path.display(), "Result copied");
    }
    Ok(())
}

async fn theme(config: &AppConfig, action: ThemeAction) -> CliResult {
    let store = theme_store(config);
    let current = LoadThemeHandler::new(store.clone()).handle().await;
    let theme = match action {
        ThemeAction::Show => current,
        ThemeAction::Toggle => {
            ToggleThemeHandler::new(store)
                .handle(ToggleThemeCommand { current })
                .await?
        }
    };
    println!("{theme}");
    Ok(())
}

#[tokio::main]
async fn main() -> CliResult {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let source = content_source(&config, cli.content)?;
    match cli.command {
        Commands::Render { output } => {
            let output = output.unwrap_or_else(|| config.site.output_dir.clone());
            render(&config, source, &output).await
        }
        Commands::Serve => serve(&config, source).await,
        Commands::Quiz { answers, copy_to } => quiz(source, answers, copy_to).await,
        Commands::Theme { action } => theme(&config, action).await,
    }
}
