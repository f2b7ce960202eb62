use super::auth::GoogleAuth;
use super::traits::{CreateFuture, TaskCreator};
use super::types::TaskPayload;
use crate::llm::api_error;
use anyhow::Context;
use reqwest::Client;
use std::sync::Arc;

pub const DEFAULT_TASKS_BASE_URL: &str = "https://tasks.googleapis.com";
pub const DEFAULT_TASKLIST_ID: &str = "@default";

/// Google Tasks v1 `tasks.insert`.
pub struct TasksClient {
    auth: Arc<GoogleAuth>,
    client: Client,
    base_url: String,
    tasklist_id: String,
}

impl TasksClient {
    pub fn new(auth: Arc<GoogleAuth>, client: Client, base_url: &str, tasklist_id: &str) -> Self {
        Self {
            auth,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tasklist_id: tasklist_id.to_string(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks/v1/lists/{}/tasks", self.base_url, self.tasklist_id)
    }
}

impl TaskCreator for TasksClient {
    fn create_task<'a>(&'a self, task: &'a TaskPayload) -> CreateFuture<'a> {
        Box::pin(async move {
            let token = self.auth.access_token().await?;
            let response = self
                .client
                .post(self.tasks_url())
                .bearer_auth(token)
                .json(task)
                .send()
                .await
                .context("Google Tasks request failed")?;

            if !response.status().is_success() {
                return Err(api_error("Google Tasks", response).await);
            }
            tracing::debug!(title = ?task.title, "task created");
            Ok(())
        })
    }
}
