use super::types::{EventPayload, TaskPayload};
use std::future::Future;
use std::pin::Pin;

pub type CreateFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

/// Inserts a calendar event. A rejected payload or auth failure is an `Err`.
pub trait EventCreator: Send + Sync {
    fn create_event<'a>(&'a self, event: &'a EventPayload) -> CreateFuture<'a>;
}

/// Inserts an item into a task list.
pub trait TaskCreator: Send + Sync {
    fn create_task<'a>(&'a self, task: &'a TaskPayload) -> CreateFuture<'a>;
}
