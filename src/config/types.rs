use crate::google::calendar::{DEFAULT_CALENDAR_BASE_URL, DEFAULT_CALENDAR_ID};
use crate::google::tasks::{DEFAULT_TASKLIST_ID, DEFAULT_TASKS_BASE_URL};
use crate::llm::openai::DEFAULT_OPENAI_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Daybook home (`~/.daybook`) - computed, not serialized
    #[serde(skip)]
    pub home_dir: PathBuf,
    /// Path to config.toml - computed, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Maximum number of messages kept in the conversation, pinned context included.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// Re-send the operating rules every this many model queries.
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval: u32,
    /// Where `.ics` exports are written; `~` is expanded.
    #[serde(default = "default_export_path")]
    pub export_path: String,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// Authorized-user token file. Relative paths resolve against the Daybook home.
    #[serde(default = "default_token_path")]
    pub token_path: String,
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    #[serde(default = "default_tasklist_id")]
    pub tasklist_id: String,
    #[serde(default = "default_calendar_base_url")]
    pub calendar_base_url: String,
    #[serde(default = "default_tasks_base_url")]
    pub tasks_base_url: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
            calendar_id: default_calendar_id(),
            tasklist_id: default_tasklist_id(),
            calendar_base_url: default_calendar_base_url(),
            tasks_base_url: default_tasks_base_url(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".into()
}

fn default_time_zone() -> String {
    "Europe/Budapest".into()
}

fn default_history_size() -> usize {
    8
}

fn default_reminder_interval() -> u32 {
    2
}

fn default_export_path() -> String {
    "events.ics".into()
}

fn default_llm_base_url() -> String {
    DEFAULT_OPENAI_BASE_URL.into()
}

fn default_token_path() -> String {
    "auth/token.json".into()
}

fn default_calendar_id() -> String {
    DEFAULT_CALENDAR_ID.into()
}

fn default_tasklist_id() -> String {
    DEFAULT_TASKLIST_ID.into()
}

fn default_calendar_base_url() -> String {
    DEFAULT_CALENDAR_BASE_URL.into()
}

fn default_tasks_base_url() -> String {
    DEFAULT_TASKS_BASE_URL.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_dir: PathBuf::new(),
            config_path: PathBuf::new(),
            api_key: None,
            model: default_model(),
            time_zone: default_time_zone(),
            history_size: default_history_size(),
            reminder_interval: default_reminder_interval(),
            export_path: default_export_path(),
            llm: LlmConfig::default(),
            google: GoogleConfig::default(),
        }
    }
}
