use crate::config::Config;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

/// `Daybook` - turn chat into calendar events and to-dos.
#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(version = "0.1.0")]
#[command(about = "A conversational assistant for calendar events, to-dos and advice.", long_about = None)]
pub struct Cli {
    /// Enable debugging output (model replies, decoded payloads, conversation log)
    #[arg(short, long)]
    pub debug: bool,

    /// Model to use for the chat-completions API
    #[arg(short, long)]
    pub model: Option<String>,

    /// Reference date in YYYY-MM-DD format (default: today)
    #[arg(long, visible_alias = "dt", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Time zone used for new events (e.g. Europe/Budapest)
    #[arg(long = "time-zone", visible_alias = "tz")]
    pub time_zone: Option<String>,

    /// Path to config.toml (default: ~/.daybook/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2024-03-01: {e}"))
}

impl Cli {
    /// Command-line values take precedence over the environment and the file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.model.clone_from(model);
        }
        if let Some(tz) = &self.time_zone {
            config.time_zone.clone_from(tz);
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}
