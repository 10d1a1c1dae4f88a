use crate::core::Storage;
use crate::utils::error::{CourseGenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 本機檔案系統，相對路徑以 `base_path` 為根
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

fn access_error(path: &Path) -> impl FnOnce(std::io::Error) -> CourseGenError + '_ {
    move |source| CourseGenError::FileAccessError {
        path: path.display().to_string(),
        source,
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        fs::read_to_string(&full_path).map_err(access_error(&full_path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve(path);
        fs::create_dir_all(&full_path).map_err(access_error(&full_path))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, data).map_err(access_error(&full_path))
    }
}

impl<S: Storage> Storage for &S {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        (**self).create_dir_all(path)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.create_dir_all(Path::new("outputs/a")).unwrap();
        storage
            .write_file(Path::new("outputs/a/index.md"), b"hello")
            .unwrap();

        assert!(temp_dir.path().join("outputs/a/index.md").exists());
        assert_eq!(
            storage.read_to_string(Path::new("outputs/a/index.md")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        storage.create_dir_all(Path::new("outputs")).unwrap();
        storage.create_dir_all(Path::new("outputs")).unwrap();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let err = storage.read_to_string(Path::new("template.md")).unwrap_err();
        match err {
            CourseGenError::FileAccessError { path, source } => {
                assert!(path.ends_with("template.md"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
