//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render a section title, styled unless colors are disabled.
#[must_use]
pub fn styled_title(text: &str, plain: bool) -> String {
    if plain {
        text.to_string()
    } else {
        style(text).bold().cyan().to_string()
    }
}

/// Print a styled section title.
pub fn print_title(text: &str) {
    println!("{}", styled_title(text, is_color_disabled()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
