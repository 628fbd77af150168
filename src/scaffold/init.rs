use crate::api::ScaffoldApi;
use crate::config::{Manifest, ScaffoldPaths};
use crate::error::{PreconditionError, Result, ScaffoldError};
use crate::model::RenderContext;
use crate::templates::fs::DirTemplates;
use std::fs;
use std::io;
use std::path::Path;

pub struct ScaffoldContext {
    pub api: ScaffoldApi<DirTemplates>,
    pub render: RenderContext,
}

/// Finds the integration slug: the single directory under `custom_components/`.
///
/// Hidden directories and `__pycache__` are not integrations. Zero or several
/// candidates is an error. A missing `custom_components/` counts as zero; any
/// other failure to read it is an I/O error.
pub fn find_integration(components_dir: &Path) -> Result<String> {
    let entries = fs::read_dir(components_dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            ScaffoldError::from(PreconditionError::NoIntegration(components_dir.to_path_buf()))
        }
        _ => ScaffoldError::Io(e),
    })?;

    let mut candidates: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.') && name != "__pycache__")
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Err(PreconditionError::NoIntegration(components_dir.to_path_buf()).into()),
        1 => Ok(candidates.remove(0)),
        _ => Err(PreconditionError::AmbiguousIntegration {
            dir: components_dir.to_path_buf(),
            candidates,
        }
        .into()),
    }
}

/// Builds everything a generation run needs from the project at `root`.
///
/// Checks run in order: integration directory, manifest, template directory.
/// The first failure stops initialization before any template is touched.
pub fn initialize(root: &Path) -> Result<ScaffoldContext> {
    let paths = ScaffoldPaths::new(root);

    let slug = find_integration(&paths.components_dir())?;
    let manifest = Manifest::load(paths.integration_dir(&slug))?;
    let has_entity_base = paths.entity_base_file(&slug).is_file();
    let render = RenderContext::from_manifest(&slug, &manifest, has_entity_base);

    let templates = DirTemplates::open(paths.templates_dir())?;
    let api = ScaffoldApi::new(templates, paths);

    Ok(ScaffoldContext { api, render })
}
