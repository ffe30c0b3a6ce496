//! Artifact files written by a search run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Artifact write errors
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("output path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Locations of the raw response and its email/password side files.
///
/// Side files sit next to the output file, named by prefixing its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub output: PathBuf,
    pub emails: PathBuf,
    pub passwords: PathBuf,
}

impl ArtifactPaths {
    pub fn new(
        output: impl Into<PathBuf>,
        email_prefix: &str,
        password_prefix: &str,
    ) -> Result<Self, OutputError> {
        let output = output.into();
        let emails = prefixed_sibling(&output, email_prefix)?;
        let passwords = prefixed_sibling(&output, password_prefix)?;
        Ok(Self {
            output,
            emails,
            passwords,
        })
    }
}

fn prefixed_sibling(path: &Path, prefix: &str) -> Result<PathBuf, OutputError> {
    let name = path
        .file_name()
        .ok_or_else(|| OutputError::InvalidPath(path.to_path_buf()))?;
    Ok(path.with_file_name(format!("{}{}", prefix, name.to_string_lossy())))
}

/// Write raw bytes to `path`, replacing any existing file.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `lines` joined by newlines, without a trailing newline.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), OutputError> {
    write_artifact(path, lines.join("\n").as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_artifact_paths_bare_name() {
        let paths = ArtifactPaths::new("output.json", "emails_", "passwords_").unwrap();
        assert_eq!(paths.output, PathBuf::from("output.json"));
        assert_eq!(paths.emails, PathBuf::from("emails_output.json"));
        assert_eq!(paths.passwords, PathBuf::from("passwords_output.json"));
    }

    #[test]
    fn test_artifact_paths_in_directory() {
        let paths = ArtifactPaths::new("runs/today/out.json", "e_", "p_").unwrap();
        assert_eq!(paths.emails, PathBuf::from("runs/today/e_out.json"));
        assert_eq!(paths.passwords, PathBuf::from("runs/today/p_out.json"));
    }

    #[test]
    fn test_artifact_paths_without_file_name() {
        let result = ArtifactPaths::new("..", "e_", "p_");
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_write_lines_no_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("emails.txt");

        write_lines(&path, &["a@x.com".to_string(), "b@x.com".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a@x.com\nb@x.com");
    }

    #[test]
    fn test_write_artifact_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_artifact(&path, b"{}").unwrap_err();
        match err {
            OutputError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
