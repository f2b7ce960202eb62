use super::gateway::ModelGateway;
use super::history::ConversationLog;
use crate::error::{ExportError, TurnError};
use crate::llm::Message;
use std::path::PathBuf;

/// Room for the three seeded entries, a due reminder and the model's reply.
const REDUCED_LOG_CAPACITY: usize = 5;

/// Asks the model for a file-importable rendering of the event it just
/// described and writes the answer to a fixed path.
pub struct Exporter {
    instruction: String,
    path: PathBuf,
}

impl Exporter {
    pub fn new(instruction: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            instruction: instruction.into(),
            path: path.into(),
        }
    }

    /// `[pinned context, last message, export instruction]`.
    pub fn reduced_log(&self, log: &ConversationLog) -> ConversationLog {
        let mut reduced = ConversationLog::new(log.pinned().clone(), REDUCED_LOG_CAPACITY);
        reduced.append(log.last().clone());
        reduced.append(Message::system(self.instruction.clone()));
        reduced
    }

    /// Run the export request and overwrite the export file with its reply.
    /// The reply never enters the main conversation.
    pub async fn export(
        &self,
        log: &ConversationLog,
        gateway: &mut ModelGateway,
    ) -> Result<PathBuf, ExportError> {
        let mut reduced = self.reduced_log(log);
        let contents = gateway
            .query(&mut reduced)
            .await
            .map_err(|e| ExportError::Query(Box::new(TurnError::from(e))))?;

        tokio::fs::write(&self.path, contents.as_bytes())
            .await
            .map_err(|source| ExportError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), "export saved");
        Ok(self.path.clone())
    }
}
