use crate::error::PromptError;
use tera::{Context, Tera};

/// Tera-backed renderer for the instruction texts sent to the model.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Build an engine with the given `(name, source)` templates registered.
    pub fn with_templates(templates: &[(&str, &str)]) -> Result<Self, PromptError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())
            .map_err(|e| PromptError::Render(e.to_string()))?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, PromptError> {
        self.tera
            .render(name, context)
            .map_err(|e| PromptError::Render(format!("{name}: {e}")))
    }
}
