//! Styles for scaffold's console output.
//!
//! Templates refer to semantic style names (`component`, `command`, ...)
//! through the `style` filter that `outstanding` registers; the actual colors
//! live in the theme below. A name missing from the theme is rendered with
//! outstanding's `(!?)` prefix, so typos in templates show up in the output.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::Theme;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const DEBUG: &str = "debug";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const HEADING: &str = "heading";
    pub const COMPONENT: &str = "component";
    pub const COMMAND: &str = "command";
}

pub static SCAFFOLD_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    Theme::new()
        .add(names::DEBUG, Style::new().dim().italic())
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::HEADING, Style::new().bold())
        .add(names::COMPONENT, Style::new().cyan())
        .add(names::COMMAND, Style::new().yellow())
}
