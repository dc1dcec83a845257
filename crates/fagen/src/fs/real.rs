use std::{
    fs,
    path::{Path, PathBuf},
};

use super::filesystem::{FileSystem, FileSystemError};

/// Environment variable that overrides the project directory.
///
pub const PROJECT_DIR_ENV: &str = "FA_GEN_PROJECT_DIR";

/// Real file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FileSystemError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(fs::write(path, data)?)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        Ok(fs::rename(from, to)?)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn expand_path(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        let binding = path.to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(&binding).as_ref());

        if expanded.exists() {
            Ok(expanded.canonicalize()?)
        } else {
            Ok(expanded)
        }
    }

    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        if let Ok(dir) = std::env::var(PROJECT_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        Ok(std::env::current_dir()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_creates_parent_dirs() {
        let fs = RealFileSystem;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("src").join("boot").join("fa.js");

        fs.write_file(&file_path, b"export {}").unwrap();

        assert!(fs.path_exists(&file_path));
        assert_eq!(fs.read_file(&file_path).unwrap(), "export {}");
    }

    #[test]
    fn test_rename_replaces_target() {
        let fs = RealFileSystem;
        let dir = tempdir().unwrap();
        let tmp = dir.path().join("fa.config.json.tmp");
        let target = dir.path().join("fa.config.json");

        fs.write_file(&target, b"old").unwrap();
        fs.write_file(&tmp, b"new").unwrap();
        fs.rename(&tmp, &target).unwrap();

        assert!(!fs.path_exists(&tmp));
        assert_eq!(fs.read_file(&target).unwrap(), "new");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let fs = RealFileSystem;
        let dir = tempdir().unwrap();

        let result = fs.read_file(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(FileSystemError::IoError(_))));
    }

    #[test]
    fn test_expand_path_leaves_plain_missing_paths_alone() {
        let fs = RealFileSystem;
        let path = Path::new("/definitely/not/here/defs.json");

        assert_eq!(fs.expand_path(path).unwrap(), path);
    }
}
