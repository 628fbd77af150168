//! Command-line client for the scaffold library.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: dispatch and exit codes
//! - `render.rs`: turns messages and guidance into console output
//! - `styles.rs`, `templates.rs`: the theme and the output templates
//! - `guidance.rs`: per-component next steps

mod commands;
mod guidance;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
