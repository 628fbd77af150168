use super::TemplateSource;
use crate::error::{PreconditionError, Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

/// Templates stored as files in a single directory.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    dir: PathBuf,
}

impl DirTemplates {
    /// Opens a template directory, failing if it does not exist.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(PreconditionError::TemplateDirNotFound(dir.to_path_buf()).into());
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl TemplateSource for DirTemplates {
    fn contains(&self, name: &str) -> bool {
        self.template_path(name).is_file()
    }

    fn load(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.template_path(name)).map_err(ScaffoldError::Io)
    }

    fn describe(&self, name: &str) -> String {
        self.template_path(name).display().to_string()
    }
}
