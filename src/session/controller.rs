use super::console::Console;
use super::export::Exporter;
use super::gateway::ModelGateway;
use super::history::ConversationLog;
use super::reminder::ReminderScheduler;
use super::router::{ResponseRouter, RouteOutcome};
use crate::config::Config;
use crate::error::TurnError;
use crate::google::{EventCreator, TaskCreator};
use crate::llm::traits::messages_to_text;
use crate::llm::{Message, Provider};
use crate::prompt::Prompts;
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Lines that end the session. Matched exactly, case-sensitive.
pub const TERMINATION_TOKENS: [&str; 5] = ["quit", "exit", "over", "done", "bye"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Terminate,
    Blank,
    Prompt(String),
}

impl Input {
    pub fn classify(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Self::Blank
        } else if TERMINATION_TOKENS.contains(&line) {
            Self::Terminate
        } else {
            Self::Prompt(line.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Processing,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub model: String,
    pub history_size: usize,
    pub reminder_interval: u32,
    pub export_path: PathBuf,
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            history_size: config.history_size,
            reminder_interval: config.reminder_interval,
            export_path: config.export_path(),
        }
    }
}

/// Owns all per-run state: the conversation log, the gateway (and with it the
/// reminder counter) and the router.
pub struct Session {
    log: ConversationLog,
    gateway: ModelGateway,
    router: ResponseRouter,
    state: SessionState,
}

impl Session {
    pub fn new(
        prompts: &Prompts,
        settings: SessionSettings,
        provider: Arc<dyn Provider>,
        calendar: Arc<dyn EventCreator>,
        tasks: Arc<dyn TaskCreator>,
    ) -> Self {
        let reminders =
            ReminderScheduler::new(settings.reminder_interval, prompts.reminder.clone());
        let exporter = Exporter::new(prompts.export_instruction.clone(), settings.export_path);
        Self {
            log: ConversationLog::new(
                Message::system(prompts.system_context.clone()),
                settings.history_size,
            ),
            gateway: ModelGateway::new(provider, settings.model, reminders),
            router: ResponseRouter::new(calendar, tasks, exporter),
            state: SessionState::AwaitingInput,
        }
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn gateway(&self) -> &ModelGateway {
        &self.gateway
    }

    /// Process one user prompt: query the model, then route its reply.
    pub async fn run_turn<W: Write, E: Write>(
        &mut self,
        prompt: &str,
        console: &mut Console<W, E>,
    ) -> Result<RouteOutcome, TurnError> {
        self.state = SessionState::Processing;
        self.log.append(Message::user(prompt));

        let outcome = match self.gateway.query(&mut self.log).await {
            Ok(reply) => {
                self.router
                    .route(&reply, &self.log, &mut self.gateway, console)
                    .await
            }
            Err(e) => Err(e.into()),
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(
                "conversation log ({} messages):\n{}",
                self.log.len(),
                messages_to_text(self.log.snapshot())
            );
        }
        self.state = SessionState::AwaitingInput;
        outcome
    }

    /// Read prompts line by line until a termination token or end of input.
    /// Failed turns are reported and the loop keeps going. Bytes that are not
    /// valid UTF-8 are replaced rather than ending the session.
    pub async fn run<R, W, E>(
        &mut self,
        mut input: R,
        console: &mut Console<W, E>,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        while self.state != SessionState::Terminated {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .await
                .context("Failed to read user input")?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            match Input::classify(&line) {
                Input::Terminate => self.state = SessionState::Terminated,
                Input::Blank => {}
                Input::Prompt(prompt) => {
                    if let Err(e) = self.run_turn(&prompt, console).await {
                        console.report(&e);
                    }
                }
            }
        }
        self.state = SessionState::Terminated;
        Ok(())
    }
}
