use crate::error::{Result, ScaffoldError};
use crate::model::GeneratedArtifact;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// What happened to an artifact's destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    /// The destination already existed and overwriting was not requested.
    Skipped,
}

/// The directory `path` will be written into. It must already exist; it is
/// never created.
pub fn target_dir(path: &Path) -> Result<&Path> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(ScaffoldError::MissingDirectory(dir.to_path_buf()));
    }
    Ok(dir)
}

/// Writes an artifact unless its destination exists and `overwrite` is false.
///
/// Content goes to a temporary sibling first and is renamed over the
/// destination. The temporary file is removed if either step fails.
pub fn write_artifact(artifact: &GeneratedArtifact, overwrite: bool) -> Result<WriteOutcome> {
    let path = &artifact.path;
    let dir = target_dir(path)?;

    let existed = path.exists();
    if existed && !overwrite {
        return Ok(WriteOutcome::Skipped);
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
    let written =
        fs::write(&tmp_path, &artifact.content).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(ScaffoldError::Io(e));
    }

    Ok(if existed {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileKind;
    use tempfile::TempDir;

    fn artifact(path: &Path, content: &str) -> GeneratedArtifact {
        GeneratedArtifact {
            path: path.to_path_buf(),
            kind: FileKind::Source,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_creates_new_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sensor.py");

        let outcome = write_artifact(&artifact(&path, "new"), false).unwrap();
        assert_eq!(outcome, WriteOutcome::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_existing_file_is_left_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sensor.py");
        fs::write(&path, b"original bytes").unwrap();

        let outcome = write_artifact(&artifact(&path, "new"), false).unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read(&path).unwrap(), b"original bytes");
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sensor.py");
        fs::write(&path, "old").unwrap();

        let outcome = write_artifact(&artifact(&path, "new"), true).unwrap();
        assert_eq!(outcome, WriteOutcome::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_parent_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tests").join("test_sensor.py");

        let err = write_artifact(&artifact(&path, "x"), false).unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingDirectory(ref dir) if dir == &temp.path().join("tests")));
        assert!(!temp.path().join("tests").exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("api.py");
        write_artifact(&artifact(&path, "x"), false).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = temp.path().join("light.py");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_artifact(&artifact(&path, "new"), true).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io(_)));

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["light.py".to_string()]);
    }

    #[test]
    fn test_target_dir_requires_existing_parent() {
        let temp = TempDir::new().unwrap();
        let ok = temp.path().join("sensor.py");
        assert_eq!(target_dir(&ok).unwrap(), temp.path());

        let missing = temp.path().join("tests").join("test_sensor.py");
        assert!(matches!(
            target_dir(&missing).unwrap_err(),
            ScaffoldError::MissingDirectory(_)
        ));
    }
}
