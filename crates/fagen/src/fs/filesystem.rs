//! File system abstraction layer
//!
//! Everything the library reads or writes on disk (the project config, definition
//! documents, the generated icon module) goes through the [`FileSystem`] port so the
//! domain logic can be exercised against a mock.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

/// Port for file system operations
///
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait FileSystem {
    /// Read a file and return its contents as a string
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if the file does not exist, cannot be read, or is not
    /// valid UTF-8.
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Write data to a file, creating missing parent directories
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if the parent directory cannot be created or the file
    /// cannot be written.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FileSystemError>;

    /// Move `from` over `to`, replacing `to` if it exists
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if the rename fails.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError>;

    /// Check if a path exists
    ///
    fn path_exists(&self, path: &Path) -> bool;

    /// Expand a path with shell-like expansions (`~`)
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if the expanded path exists but cannot be resolved.
    fn expand_path(&self, path: &Path) -> Result<PathBuf, FileSystemError>;

    /// The directory holding the project the CLI operates on
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if the process working directory is unavailable.
    fn current_dir(&self) -> Result<PathBuf, FileSystemError>;
}

/// Errors that can occur during file system operations
///
#[derive(Error, Debug, Clone)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    IoError(Arc<io::Error>),
}

impl From<io::Error> for FileSystemError {
    fn from(error: io::Error) -> Self {
        Self::IoError(Arc::new(error))
    }
}

#[cfg(test)]
impl MockFileSystem {
    /// Make `path` read back as `content`, as many times as it is asked for.
    ///
    pub(crate) fn mock_read_file<P, S>(&mut self, path: P, content: S)
    where
        PathBuf: From<P>,
        S: ToString,
    {
        let path_buf = PathBuf::from(path);
        let content_string = content.to_string();
        self.expect_read_file()
            .with(mockall::predicate::eq(path_buf))
            .returning(move |_| Ok(content_string.clone()));
    }

    /// Make reading `path` fail with `NotFound`.
    ///
    pub(crate) fn mock_read_file_missing<P>(&mut self, path: P)
    where
        PathBuf: From<P>,
    {
        self.expect_read_file()
            .with(mockall::predicate::eq(PathBuf::from(path)))
            .returning(|_| {
                Err(FileSystemError::from(io::Error::new(
                    io::ErrorKind::NotFound,
                    "file not found",
                )))
            });
    }

    pub(crate) fn mock_path_exists<P>(&mut self, path: P, exists: bool)
    where
        PathBuf: From<P>,
    {
        self.expect_path_exists()
            .with(mockall::predicate::eq(PathBuf::from(path)))
            .returning(move |_| exists);
    }

    /// Accept a single write to `path`, handing the written bytes to `check`.
    ///
    pub(crate) fn mock_write_file<P, C>(&mut self, path: P, check: C)
    where
        PathBuf: From<P>,
        C: Fn(&[u8]) + Send + 'static,
    {
        self.expect_write_file()
            .with(
                mockall::predicate::eq(PathBuf::from(path)),
                mockall::predicate::always(),
            )
            .times(1)
            .returning(move |_, data| {
                check(data);
                Ok(())
            });
    }

    pub(crate) fn mock_rename<P>(&mut self, from: P, to: P)
    where
        PathBuf: From<P>,
    {
        self.expect_rename()
            .with(
                mockall::predicate::eq(PathBuf::from(from)),
                mockall::predicate::eq(PathBuf::from(to)),
            )
            .times(1)
            .returning(|_, _| Ok(()));
    }
}
