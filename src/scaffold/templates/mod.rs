//! # Template Sources
//!
//! Scaffold templates are looked up by file name (`sensor.py.jinja`,
//! `test_sensor.py.jinja`, ...) through the [`TemplateSource`] trait, so that
//! resolution and rendering never touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::DirTemplates`]: templates in a directory on disk (`scripts/scaffolds/`)
//! - [`memory::MemoryTemplates`]: in-memory templates for testing
//!
//! Sources are read-only. Nothing is cached between runs.

use crate::error::Result;

pub mod fs;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

/// Read-only access to a set of named templates.
pub trait TemplateSource {
    /// Whether a template with this file name exists.
    fn contains(&self, name: &str) -> bool;

    /// Returns the template source text.
    fn load(&self, name: &str) -> Result<String>;

    /// Human-readable location of a (possibly missing) template, for messages.
    fn describe(&self, name: &str) -> String;
}
