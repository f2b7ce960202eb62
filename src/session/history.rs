use crate::llm::Message;

/// Smallest capacity that still fits the pinned entry next to the newest message.
const MIN_CAPACITY: usize = 2;

/// Conversation history with a pinned first entry and a sliding window behind it.
///
/// Index 0 always holds the pinned system context. Once the log is full, every
/// append drops the oldest unpinned message (index 1) first, so the log never
/// grows beyond `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<Message>,
    capacity: usize,
}

impl ConversationLog {
    pub fn new(pinned: Message, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut messages = Vec::with_capacity(capacity);
        messages.push(pinned);
        Self { messages, capacity }
    }

    pub fn append(&mut self, message: Message) {
        if self.messages.len() >= self.capacity {
            self.messages.remove(1);
        }
        self.messages.push(message);
    }

    /// The full ordered history, as sent to the model.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn pinned(&self) -> &Message {
        &self.messages[0]
    }

    /// Most recently appended message (the pinned entry if nothing was appended).
    pub fn last(&self) -> &Message {
        self.messages.last().unwrap_or(&self.messages[0])
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the pinned entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
