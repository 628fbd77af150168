//! # Scaffold Architecture
//!
//! Scaffold adds platforms and features to a custom integration by rendering
//! Jinja templates from `scripts/scaffolds/` into `custom_components/<slug>/`
//! and `tests/`. Like the CLI it ships with, it is organized as a library that
//! happens to have a command-line client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders messages and next steps        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + context setup (init.rs)               │
//! │  - Finds the integration, loads manifest.json               │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - resolve (resolve.rs) → render (render.rs)                │
//! │    → guarded write (writer.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Template Sources (templates/)                              │
//! │  - TemplateSource trait                                     │
//! │  - DirTemplates (production), MemoryTemplates (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Pass, At Most Two Files
//!
//! Every run handles one [`model::Component`]. Its primary template is found by
//! probing `{component}.py.jinja` then `{component}.yaml.jinja`; the companion
//! `test_{component}.py.jinja` is optional. Both are rendered with the same
//! [`model::RenderContext`] before anything is written. The primary file is
//! only replaced with `--force`; an existing test file is never replaced.
//!
//! There is no caching, retrying or locking. Two runs racing on the same
//! project are not protected against each other.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and reports through
//! [`commands::CmdMessage`]s. It never writes to stdout/stderr and never calls
//! `std::process::exit`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`init`]: Integration discovery and context setup
//! - [`config`]: Project layout and `manifest.json`
//! - [`model`]: Components, file kinds, render context, artifacts
//! - [`templates`]: Template source abstraction and implementations
//! - [`resolve`]: Template resolution by naming convention
//! - [`render`]: minijinja rendering
//! - [`writer`]: Overwrite guard and atomic writes
//! - [`commands`]: Generation and listing
//! - [`error`]: Error types
//! - `cli`: Argument parsing, styled output and next-steps guidance for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod render;
pub mod resolve;
pub mod templates;
pub mod writer;
