pub mod engine;
pub mod templates;

pub use engine::TemplateEngine;
pub use templates::{GREETING, Prompts};
