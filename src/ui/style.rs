use console::style;
use std::fmt::Display;

/// Cyan bold: greeting banner
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Yellow: recoverable errors, retry hints
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Dim: secondary notes (export saved, debug hints)
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

