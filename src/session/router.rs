use super::console::Console;
use super::export::Exporter;
use super::gateway::ModelGateway;
use super::history::ConversationLog;
use super::reply::{Action, StructuredReply};
use crate::error::{ActionError, TurnError};
use crate::google::{EventCreator, TaskCreator};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// What a successfully routed turn did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOutcome {
    pub action: Action,
    /// Set when an export was requested and written.
    pub exported: Option<PathBuf>,
}

/// Turns a model reply into side effects: a calendar event, a task, an
/// optional export, and the dialog line shown to the user.
pub struct ResponseRouter {
    calendar: Arc<dyn EventCreator>,
    tasks: Arc<dyn TaskCreator>,
    exporter: Exporter,
}

impl ResponseRouter {
    pub fn new(
        calendar: Arc<dyn EventCreator>,
        tasks: Arc<dyn TaskCreator>,
        exporter: Exporter,
    ) -> Self {
        Self {
            calendar,
            tasks,
            exporter,
        }
    }

    /// Decode `reply_text` and dispatch it.
    ///
    /// Decode errors and rejected create calls end the turn before anything is
    /// printed. An export failure is reported but leaves the created event in
    /// place and the dialog is still shown.
    pub async fn route<W: Write, E: Write>(
        &self,
        reply_text: &str,
        log: &ConversationLog,
        gateway: &mut ModelGateway,
        console: &mut Console<W, E>,
    ) -> Result<RouteOutcome, TurnError> {
        let reply = StructuredReply::decode(reply_text)?;
        tracing::debug!(?reply, "decoded reply");

        let mut exported = None;
        match &reply {
            StructuredReply::Event { response, .. } => {
                self.calendar
                    .create_event(response)
                    .await
                    .map_err(|e| ActionError::Calendar(format!("{e:#}")))?;

                if reply.wants_export() {
                    match self.exporter.export(log, gateway).await {
                        Ok(path) => {
                            console.note(format_args!("Saved {}", path.display()));
                            exported = Some(path);
                        }
                        Err(e) => console.report(&TurnError::Export(e)),
                    }
                }
            }
            StructuredReply::Todo { response, .. } => {
                self.tasks
                    .create_task(response)
                    .await
                    .map_err(|e| ActionError::Tasks(format!("{e:#}")))?;
            }
            StructuredReply::Advice { .. } => {}
        }

        console.say(reply.dialog());
        Ok(RouteOutcome {
            action: reply.action(),
            exported,
        })
    }
}
