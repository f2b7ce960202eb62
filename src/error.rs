use std::path::PathBuf;
use thiserror::Error;

// ─── Config errors ───────────────────────────────────────────────────────────

/// Rejected settings. Load and parse failures travel as `anyhow` context
/// chains from the loader.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Per-turn errors ─────────────────────────────────────────────────────────

/// Everything that can end a single turn early. None of these are fatal: the
/// session reports them and keeps reading input. Startup and HTTP plumbing
/// use `anyhow::Result` for ad-hoc context chains instead.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("request to the language model failed: {0}")]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Reply(#[from] ReplyError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("provider {provider} returned an empty reply")]
    EmptyReply { provider: String },
}

// ─── Reply decoding errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("error decoding the model reply as JSON: {0}")]
    Malformed(String),

    #[error("invalid user action detected: {0}")]
    UnknownAction(String),
}

// ─── External action errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("an error occurred with the Google Calendar API: {0}")]
    Calendar(String),

    #[error("an error occurred with the Google Tasks API: {0}")]
    Tasks(String),
}

// ─── Export errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export request failed: {0}")]
    Query(#[source] Box<TurnError>),

    #[error("failed to write export file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),
}
