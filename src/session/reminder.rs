use super::history::ConversationLog;
use crate::llm::Message;

/// Re-injects the operating rules every `interval` model queries.
#[derive(Debug, Clone)]
pub struct ReminderScheduler {
    interval: u32,
    counter: u32,
    reminder: String,
}

impl ReminderScheduler {
    pub fn new(interval: u32, reminder: impl Into<String>) -> Self {
        Self {
            interval: interval.max(1),
            counter: 0,
            reminder: reminder.into(),
        }
    }

    /// Count one query. When the interval is reached the reminder is appended
    /// to `log` and the counter starts over. Returns whether a reminder was added.
    pub fn tick(&mut self, log: &mut ConversationLog) -> bool {
        self.counter += 1;
        if self.counter < self.interval {
            return false;
        }
        log.append(Message::system(self.reminder.clone()));
        self.counter = 0;
        tracing::debug!(interval = self.interval, "reminder injected");
        true
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}
