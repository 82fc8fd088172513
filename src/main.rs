use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use intuition::llm::config::LlmConfig;
use intuition::logging::{self, DEFAULT_LOG_FILE, LogError};
use intuition::llm::{LlmChat, LlmClient, LlmError};
use intuition::services::tutor::ReplySettings;
use intuition::state::{Action, Workspace};
use intuition::ui::{self, App, UiOptions};

#[derive(Debug, thiserror::Error)]
enum MainError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Log(#[from] LogError),
}

#[derive(Parser, Debug)]
#[command(name = "intuition", about = "Interactive calculus storylines with an AI tutor")]
struct Cli {
    /// Topic to open, e.g. TAYLOR_SERIES.
    #[arg(long, env = "INTUITION_TOPIC")]
    topic: Option<String>,

    /// Leave the mouse to the terminal (no drag/wheel on the plot).
    #[arg(long, env = "INTUITION_NO_MOUSE", value_parser = clap::builder::FalseyValueParser::new())]
    no_mouse: bool,

    /// Where `RUST_LOG`-selected events are written. The UI owns the
    /// terminal, so logs never go to stderr.
    #[arg(long, env = "INTUITION_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

/// Build the tutor client; failures leave the app usable without chat.
fn init_llm() -> (Option<Arc<dyn LlmChat>>, ReplySettings, Option<String>) {
    let config = match LlmConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "LLM config invalid; tutor disabled");
            return (None, ReplySettings::default(), Some(format!("Tutor offline: {e}")));
        }
    };
    let settings = ReplySettings::from(&config);
    match LlmClient::from_config(&config) {
        Ok(client) => {
            tracing::info!(provider = ?config.provider, model = client.model(), "LLM client configured");
            let llm: Arc<dyn LlmChat> = Arc::new(client);
            (Some(llm), settings, None)
        }
        Err(e @ LlmError::MissingApiKey { .. }) => {
            tracing::info!(error = %e, "LLM not configured; tutor disabled");
            (None, settings, Some(format!("Tutor offline: {e}")))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client init failed; tutor disabled");
            (None, settings, Some(format!("Tutor offline: {e}")))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring .env: {e}");
        }
    }
    let cli = Cli::parse();
    logging::init(&cli.log_file)?;

    let workspace = match cli.topic.as_deref() {
        Some(topic) => Workspace::default().reduce(Action::SelectTopicByName(topic.to_string())),
        None => Workspace::default(),
    };
    tracing::info!(topic = %workspace.topic, "starting");

    let (llm, settings, offline) = init_llm();
    let mut app = App::new(workspace, llm, settings);
    if let Some(status) = offline {
        app.set_status(status);
    }
    ui::run(app, UiOptions { mouse: !cli.no_mouse })?;
    Ok(())
}
