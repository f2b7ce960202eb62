#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

use daybook::google::traits::CreateFuture;
use daybook::google::{EventCreator, EventPayload, TaskCreator, TaskPayload};
use daybook::llm::{Message, Provider};
use daybook::prompt::Prompts;
use daybook::session::{Console, Session, SessionSettings};

pub const SYSTEM: &str = "S";
pub const REMINDER: &str = "R";
pub const EXPORT: &str = "X";

/// Replays a fixed list of replies and records every request it receives.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<anyhow::Result<String>>>,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<anyhow::Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::from(replies)),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Self::new(replies.iter().map(|r| Ok((*r).to_string())).collect())
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn complete<'a>(
        &'a self,
        messages: &'a [Message],
        _model: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.seen
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(messages.to_vec());
            self.replies
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("script exhausted")))
        })
    }
}

/// Calendar and task sink that records payloads, or rejects them all.
#[derive(Default)]
pub struct RecordingCreators {
    events: Mutex<Vec<EventPayload>>,
    tasks: Mutex<Vec<TaskPayload>>,
    fail_with: Option<String>,
}

impl RecordingCreators {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        })
    }

    pub fn events(&self) -> Vec<EventPayload> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn tasks(&self) -> Vec<TaskPayload> {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check(&self) -> anyhow::Result<()> {
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

impl EventCreator for RecordingCreators {
    fn create_event<'a>(&'a self, event: &'a EventPayload) -> CreateFuture<'a> {
        Box::pin(async move {
            self.check()?;
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
            Ok(())
        })
    }
}

impl TaskCreator for RecordingCreators {
    fn create_task<'a>(&'a self, task: &'a TaskPayload) -> CreateFuture<'a> {
        Box::pin(async move {
            self.check()?;
            self.tasks
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(task.clone());
            Ok(())
        })
    }
}

pub fn prompts() -> Prompts {
    Prompts {
        system_context: SYSTEM.into(),
        reminder: REMINDER.into(),
        export_instruction: EXPORT.into(),
    }
}

pub fn session(
    provider: &Arc<ScriptedProvider>,
    creators: &Arc<RecordingCreators>,
    history_size: usize,
    reminder_interval: u32,
    export_path: &Path,
) -> Session {
    Session::new(
        &prompts(),
        SessionSettings {
            model: "test-model".into(),
            history_size,
            reminder_interval,
            export_path: export_path.to_path_buf(),
        },
        Arc::clone(provider) as Arc<dyn Provider>,
        Arc::clone(creators) as Arc<dyn EventCreator>,
        Arc::clone(creators) as Arc<dyn TaskCreator>,
    )
}

pub type TestConsole = Console<Vec<u8>, Vec<u8>>;

pub fn console() -> TestConsole {
    Console::new(Vec::new(), Vec::new())
}

pub fn stdout(console: &TestConsole) -> String {
    String::from_utf8_lossy(console.out()).into_owned()
}

pub fn stderr(console: &TestConsole) -> String {
    String::from_utf8_lossy(console.err()).into_owned()
}

pub fn contents(messages: &[Message]) -> Vec<&str> {
    messages.iter().map(|m| m.content.as_str()).collect()
}

pub fn advice(dialog: &str) -> String {
    serde_json::json!({ "action": "Advice", "dialog": dialog }).to_string()
}

pub fn todo(dialog: &str, title: &str) -> String {
    serde_json::json!({
        "action": "Todo",
        "dialog": dialog,
        "response": { "title": title },
    })
    .to_string()
}

pub fn event(dialog: &str, summary: &str, save: &str) -> String {
    serde_json::json!({
        "action": "Event",
        "dialog": dialog,
        "save": save,
        "response": {
            "summary": summary,
            "start": { "dateTime": "2026-10-16T09:00:00", "timeZone": "Europe/Budapest" },
            "end": { "dateTime": "2026-10-16T10:00:00", "timeZone": "Europe/Budapest" },
        },
    })
    .to_string()
}
