use super::TemplateSource;
use crate::error::{Result, ScaffoldError};
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

/// In-memory templates, for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    templates: Arc<HashMap<String, String>>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template. Returns self for chaining.
    pub fn with(mut self, name: &str, source: &str) -> Self {
        Arc::make_mut(&mut self.templates).insert(name.to_string(), source.to_string());
        self
    }
}

impl TemplateSource for MemoryTemplates {
    fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn load(&self, name: &str) -> Result<String> {
        self.templates.get(name).cloned().ok_or_else(|| {
            ScaffoldError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no template named {}", name),
            ))
        })
    }

    fn describe(&self, name: &str) -> String {
        name.to_string()
    }
}
