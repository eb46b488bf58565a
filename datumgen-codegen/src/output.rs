//! Writing generated units to a source tree.

use crate::error::CodegenError;
use crate::generator::GeneratedUnit;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of writing a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Path of the source file.
    pub path: PathBuf,
    /// False if the file already held identical content.
    pub written: bool,
}

/// Writes `unit` under the source root `dir`, creating package directories.
///
/// Files whose content is already identical are left untouched, so their
/// modification time does not trigger downstream rebuilds.
///
/// # Errors
/// Returns `CodegenError::Io` if a directory or the file cannot be written.
pub fn write_unit(unit: &GeneratedUnit, dir: &Path) -> Result<WriteOutcome, CodegenError> {
    let path = dir.join(unit.relative_path());

    if let Ok(existing) = fs::read(&path) {
        if existing == unit.source.as_bytes() {
            tracing::debug!("{} is up to date", path.display());
            return Ok(WriteOutcome {
                path,
                written: false,
            });
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &unit.source)?;
    tracing::info!("Wrote {} to {}", unit.qualified_name(), path.display());

    Ok(WriteOutcome {
        path,
        written: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(source: &str) -> GeneratedUnit {
        GeneratedUnit {
            package_name: "com.example".to_string(),
            class_name: "UserDatum".to_string(),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_write_creates_package_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = write_unit(&unit("class UserDatum {}\n"), dir.path()).unwrap();

        assert!(outcome.written);
        assert_eq!(outcome.path, dir.path().join("com/example/UserDatum.java"));
        assert_eq!(
            fs::read_to_string(&outcome.path).unwrap(),
            "class UserDatum {}\n"
        );
    }

    #[test]
    fn test_identical_content_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_unit(&unit("a\n"), dir.path()).unwrap();

        let outcome = write_unit(&unit("a\n"), dir.path()).unwrap();
        assert!(!outcome.written);

        let outcome = write_unit(&unit("b\n"), dir.path()).unwrap();
        assert!(outcome.written);
        assert_eq!(fs::read_to_string(&outcome.path).unwrap(), "b\n");
    }

    #[test]
    fn test_write_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("com");
        fs::write(&blocker, "not a directory").unwrap();

        assert!(matches!(
            write_unit(&unit("a\n"), dir.path()),
            Err(CodegenError::Io(_))
        ));
    }
}
