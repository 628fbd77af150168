use crate::error::{PreconditionError, Result, ScaffoldError};
use crate::model::{Component, FileKind, RenderContext};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const COMPONENTS_DIR: &str = "custom_components";
pub const TEMPLATES_DIR: &str = "scripts/scaffolds";
pub const TESTS_DIR: &str = "tests";
pub const MANIFEST_FILENAME: &str = "manifest.json";
pub const ENTITY_BASE_FILENAME: &str = "entity.py";

/// Project layout, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPaths {
    root: PathBuf,
}

impl ScaffoldPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.root.join(TESTS_DIR)
    }

    pub fn integration_dir(&self, slug: &str) -> PathBuf {
        self.components_dir().join(slug)
    }

    pub fn entity_base_file(&self, slug: &str) -> PathBuf {
        self.integration_dir(slug).join(ENTITY_BASE_FILENAME)
    }

    /// Where the primary artifact for `component` goes, e.g.
    /// `custom_components/<slug>/sensor.py`.
    pub fn component_file(&self, slug: &str, component: Component, kind: FileKind) -> PathBuf {
        self.integration_dir(slug)
            .join(format!("{}{}", component.name(), kind.suffix()))
    }

    /// Where the test artifact for `component` goes, e.g. `tests/test_sensor.py`.
    pub fn test_file(&self, component: Component) -> PathBuf {
        self.tests_dir().join(format!(
            "{}{}",
            component.test_stem(),
            FileKind::Source.suffix()
        ))
    }

    /// `path` relative to the project root when possible, for messages.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// The integration's `manifest.json`. Only the fields used for naming are
/// read; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub domain: Option<String>,
}

impl Manifest {
    /// Load the manifest from an integration directory.
    pub fn load<P: AsRef<Path>>(integration_dir: P) -> Result<Self> {
        let manifest_path = integration_dir.as_ref().join(MANIFEST_FILENAME);

        if !manifest_path.is_file() {
            return Err(PreconditionError::ManifestNotFound(manifest_path).into());
        }

        let content = fs::read_to_string(&manifest_path).map_err(ScaffoldError::Io)?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(ScaffoldError::Serialization)?;
        Ok(manifest)
    }
}

impl RenderContext {
    /// Builds the template context, falling back to names derived from the slug.
    pub fn from_manifest(slug: &str, manifest: &Manifest, has_entity_base: bool) -> Self {
        Self {
            component_slug: slug.to_string(),
            component_name: manifest
                .name
                .clone()
                .unwrap_or_else(|| display_name_from_slug(slug)),
            domain: manifest.domain.clone().unwrap_or_else(|| slug.to_string()),
            has_entity_base,
        }
    }
}

/// `my_device` -> `My Device`
pub fn display_name_from_slug(slug: &str) -> String {
    title_case(&slug.replace('_', " "))
}

/// Upper-cases every letter that follows a non-letter and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
