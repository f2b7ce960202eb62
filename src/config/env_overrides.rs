use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("DAYBOOK_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY"))
            && !key.is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("DAYBOOK_MODEL")
            && !model.is_empty()
        {
            self.model = model;
        }

        if let Ok(tz) = std::env::var("DAYBOOK_TIME_ZONE")
            && !tz.is_empty()
        {
            self.time_zone = tz;
        }

        if let Ok(path) = std::env::var("DAYBOOK_EXPORT_PATH")
            && !path.is_empty()
        {
            self.export_path = path;
        }
    }
}
