pub mod filesystem;
pub mod real;

pub use self::filesystem::{FileSystem, FileSystemError};

#[cfg(any(test, feature = "with_mocks"))]
pub use self::filesystem::MockFileSystem;
