//! Stored Google OAuth credentials.
//!
//! Daybook does not run the browser consent flow itself. It reads an
//! authorized-user `token.json` (the format written by Google's client
//! libraries) and keeps the access token fresh with the `refresh_token` grant.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";
pub const TASKS_SCOPE: &str = "https://www.googleapis.com/auth/tasks";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Refresh this long before the recorded expiry.
const EXPIRY_SKEW_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.into()
}

impl StoredToken {
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.expiry
            .is_some_and(|expiry| expiry - now < Duration::seconds(EXPIRY_SKEW_SECS))
    }

    pub fn missing_scopes(&self) -> Vec<&'static str> {
        if self.scopes.is_empty() {
            return Vec::new();
        }
        [CALENDAR_SCOPE, TASKS_SCOPE]
            .into_iter()
            .filter(|scope| !self.scopes.iter().any(|s| s == scope))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
}

/// Access-token source shared by the Calendar and Tasks clients.
pub struct GoogleAuth {
    path: PathBuf,
    client: Client,
    token: Mutex<StoredToken>,
}

impl GoogleAuth {
    pub fn load(path: &Path, client: Client) -> Result<Self> {
        if !path.exists() {
            bail!(
                "Google token file not found at {}. Authorize Daybook for the Calendar and \
                 Tasks scopes and save the resulting authorized-user token.json there.",
                path.display()
            );
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let token: StoredToken = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let missing = token.missing_scopes();
        if !missing.is_empty() {
            tracing::warn!(?missing, "Google token lacks required scopes");
        }

        Ok(Self {
            path: path.to_path_buf(),
            client,
            token: Mutex::new(token),
        })
    }

    /// Current bearer token, refreshed first when it is about to expire.
    pub async fn access_token(&self) -> Result<String> {
        let mut token = self.token.lock().await;
        if token.needs_refresh(Utc::now()) {
            self.refresh(&mut token).await?;
        }
        Ok(token.token.clone())
    }

    async fn refresh(&self, token: &mut StoredToken) -> Result<()> {
        let Some(refresh_token) = token.refresh_token.clone() else {
            bail!("Google access token expired and token.json has no refresh_token");
        };
        let client_id = token
            .client_id
            .clone()
            .context("token.json has no client_id; cannot refresh")?;

        let mut form = vec![
            ("grant_type", "refresh_token".to_string()),
            ("client_id", client_id),
            ("refresh_token", refresh_token),
        ];
        if let Some(secret) = &token.client_secret {
            form.push(("client_secret", secret.clone()));
        }

        tracing::debug!(token_uri = %token.token_uri, "refreshing Google access token");
        let response = self
            .client
            .post(&token.token_uri)
            .form(&form)
            .send()
            .await
            .context("Google token refresh request failed")?;

        if !response.status().is_success() {
            return Err(crate::llm::api_error("Google OAuth", response).await);
        }

        let refreshed: RefreshResponse = response
            .json()
            .await
            .context("Google token refresh JSON decode failed")?;

        token.token = refreshed.access_token;
        token.expiry = refreshed
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));
        if let Some(rotated) = refreshed.refresh_token {
            token.refresh_token = Some(rotated);
        }

        let serialized =
            serde_json::to_string_pretty(&*token).context("Failed to serialize token.json")?;
        tokio::fs::write(&self.path, serialized)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
