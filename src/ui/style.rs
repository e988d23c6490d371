use console::style;
use std::fmt::Display;

/// Check mark for finished work, cross for failures.
pub fn status_mark(ok: bool) -> String {
    if ok {
        style("✓").green().bold().to_string()
    } else {
        style("✗").red().bold().to_string()
    }
}

/// Bold title line for a report section.
pub fn heading<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

pub fn muted<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// A configured value such as a URL or path.
pub fn setting<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Question ids and category names.
pub fn label<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}
