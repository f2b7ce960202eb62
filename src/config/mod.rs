mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;
mod types;

pub use types::{Config, GoogleConfig, LlmConfig};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_size < 2 {
            return Err(ConfigError::Validation(format!(
                "history_size must be at least 2 (pinned context plus one message), got {}",
                self.history_size
            )));
        }
        if self.reminder_interval == 0 {
            return Err(ConfigError::Validation(
                "reminder_interval must be at least 1".into(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("model must not be empty".into()));
        }
        Ok(())
    }

    /// Export target with `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.export_path).into_owned())
    }

    /// Google token file; relative paths resolve against the Daybook home.
    pub fn token_path(&self) -> PathBuf {
        resolve_against(&self.home_dir, &self.google.token_path)
    }
}

fn resolve_against(base: &Path, raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
