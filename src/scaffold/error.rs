use std::path::PathBuf;
use thiserror::Error;

/// Conditions that must hold before any template work begins.
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("No component found in {}", .0.display())]
    NoIntegration(PathBuf),

    #[error("Multiple components found in {}: {}", .dir.display(), .candidates.join(", "))]
    AmbiguousIntegration {
        dir: PathBuf,
        candidates: Vec<String>,
    },

    #[error("manifest.json not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Template directory not found: {}", .0.display())]
    TemplateDirNotFound(PathBuf),
}

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("Template not found for component: {component} (expected {})", .tried.join(" or "))]
    TemplateNotFound {
        component: String,
        tried: Vec<String>,
    },

    #[error("Target directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScaffoldError {
    /// A follow-up line for the user, when there is an obvious fix.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScaffoldError::Precondition(PreconditionError::TemplateDirNotFound(_)) => {
                Some("Make sure you're running this from the project root.")
            }
            ScaffoldError::Precondition(PreconditionError::AmbiguousIntegration { .. }) => {
                Some("Keep a single integration directory under custom_components/.")
            }
            ScaffoldError::MissingDirectory(_) => Some("Create the directory and run again."),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_names_every_candidate() {
        let err = ScaffoldError::TemplateNotFound {
            component: "sensor".into(),
            tried: vec!["sensor.py.jinja".into(), "sensor.yaml.jinja".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("sensor.py.jinja"));
        assert!(msg.contains("sensor.yaml.jinja"));
    }

    #[test]
    fn test_precondition_is_transparent() {
        let err: ScaffoldError =
            PreconditionError::NoIntegration(PathBuf::from("custom_components")).into();
        assert_eq!(err.to_string(), "No component found in custom_components");
    }

    #[test]
    fn test_hint_for_missing_template_dir() {
        let err: ScaffoldError =
            PreconditionError::TemplateDirNotFound(PathBuf::from("scripts/scaffolds")).into();
        assert!(err.hint().unwrap().contains("project root"));
        assert!(ScaffoldError::Io(std::io::Error::other("x")).hint().is_none());
    }
}
