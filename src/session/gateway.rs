use super::history::ConversationLog;
use super::reminder::ReminderScheduler;
use crate::error::LlmError;
use crate::llm::{Message, Provider};
use std::sync::Arc;

/// Single entry point for model queries. Every query counts towards the
/// reminder interval, the main conversation and export requests alike.
pub struct ModelGateway {
    provider: Arc<dyn Provider>,
    model: String,
    reminders: ReminderScheduler,
}

impl ModelGateway {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        reminders: ReminderScheduler,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            reminders,
        }
    }

    /// Send `log` to the model and append the reply to it.
    ///
    /// A due reminder is appended before sending so it travels with the same
    /// request. On failure nothing is appended besides that reminder.
    pub async fn query(&mut self, log: &mut ConversationLog) -> Result<String, LlmError> {
        self.reminders.tick(log);

        let reply = self
            .provider
            .complete(log.snapshot(), &self.model)
            .await
            .map_err(|e| LlmError::Request {
                provider: self.provider.name().to_string(),
                message: format!("{e:#}"),
            })?;

        if reply.trim().is_empty() {
            return Err(LlmError::EmptyReply {
                provider: self.provider.name().to_string(),
            });
        }

        tracing::debug!(model = %self.model, reply = %reply, "model reply");
        log.append(Message::assistant(reply.clone()));
        Ok(reply)
    }

    pub fn reminders(&self) -> &ReminderScheduler {
        &self.reminders
    }
}
