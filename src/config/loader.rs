use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.daybook/config.toml`, writing the defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Self::load_or_init_at(&home.join(".daybook").join("config.toml"))
    }

    /// Same as [`Config::load_or_init`] for an explicit config file. The
    /// file's directory becomes the Daybook home.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        let home_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if !home_dir.as_os_str().is_empty() && !home_dir.exists() {
            fs::create_dir_all(&home_dir).context("Failed to create Daybook home directory")?;
        }

        let config = if config_path.exists() {
            let contents = fs::read_to_string(config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path.to_path_buf();
            config.home_dir = home_dir;
            config
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                home_dir,
                ..Self::default()
            };
            config.save()?;
            tracing::info!(path = %config_path.display(), "wrote default config");
            config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
