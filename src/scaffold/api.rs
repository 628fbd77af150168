//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! scaffolding operations. It dispatches to `commands/*.rs` and returns
//! structured [`CmdResult`] values; it never prints and never exits.
//!
//! `ScaffoldApi<T: TemplateSource>` is generic over where templates come from:
//! - Production: `ScaffoldApi<DirTemplates>`
//! - Testing: `ScaffoldApi<MemoryTemplates>`

use crate::commands;
use crate::config::ScaffoldPaths;
use crate::error::Result;
use crate::model::{Component, RenderContext};
use crate::templates::TemplateSource;

pub struct ScaffoldApi<T: TemplateSource> {
    templates: T,
    paths: ScaffoldPaths,
}

impl<T> ScaffoldApi<T>
where
    T: TemplateSource + Clone + Send + Sync + 'static,
{
    pub fn new(templates: T, paths: ScaffoldPaths) -> Self {
        Self { templates, paths }
    }

    pub fn generate(
        &self,
        component: Component,
        context: &RenderContext,
        force: bool,
    ) -> Result<CmdResult> {
        commands::generate::run(&self.templates, &self.paths, context, component, force)
    }

    pub fn paths(&self) -> &ScaffoldPaths {
        &self.paths
    }

    pub fn templates(&self) -> &T {
        &self.templates
    }
}

/// Lists the available components. Needs no project or templates.
pub fn list_components() -> CmdResult {
    commands::list::run()
}

pub use commands::{ArtifactRecord, ArtifactRole, CmdMessage, CmdResult, MessageLevel};
pub use crate::writer::WriteOutcome;
