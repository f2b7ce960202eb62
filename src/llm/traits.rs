use super::types::Message;
use std::future::Future;
use std::pin::Pin;

/// A chat-completion backend.
///
/// `complete` sends the whole ordered message list and returns the reply text.
/// Implementations own their transport policy (timeouts, auth); a failed call
/// is a plain `Err`, never a panic.
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "openai").
    fn name(&self) -> &str;

    fn complete<'a>(
        &'a self,
        messages: &'a [Message],
        model: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;
}

pub fn messages_to_text(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.role.as_str(), msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}
