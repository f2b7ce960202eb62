use super::auth::GoogleAuth;
use super::traits::{CreateFuture, EventCreator};
use super::types::EventPayload;
use crate::llm::api_error;
use anyhow::Context;
use reqwest::Client;
use std::sync::Arc;

pub const DEFAULT_CALENDAR_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Google Calendar v3 `events.insert`.
pub struct CalendarClient {
    auth: Arc<GoogleAuth>,
    client: Client,
    base_url: String,
    calendar_id: String,
}

impl CalendarClient {
    pub fn new(auth: Arc<GoogleAuth>, client: Client, base_url: &str, calendar_id: &str) -> Self {
        Self {
            auth,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            calendar_id: calendar_id.to_string(),
        }
    }

    fn events_url(&self) -> String {
        format!(
            "{}/calendar/v3/calendars/{}/events",
            self.base_url, self.calendar_id
        )
    }
}

impl EventCreator for CalendarClient {
    fn create_event<'a>(&'a self, event: &'a EventPayload) -> CreateFuture<'a> {
        Box::pin(async move {
            let token = self.auth.access_token().await?;
            let response = self
                .client
                .post(self.events_url())
                .bearer_auth(token)
                .json(event)
                .send()
                .await
                .context("Google Calendar request failed")?;

            if !response.status().is_success() {
                return Err(api_error("Google Calendar", response).await);
            }
            tracing::debug!(summary = ?event.summary, "calendar event created");
            Ok(())
        })
    }
}
