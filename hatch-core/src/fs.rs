//! Filesystem capability passed explicitly to every generator step.

use std::{io, path::Path};

/// The filesystem operations generators need.
///
/// Generators never touch `std::fs` directly so that step sequencing can be
/// exercised against an in-memory implementation.
pub trait FileSystem {
    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate a file. The parent directory must exist.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryFs;

#[cfg(any(test, feature = "testing"))]
mod memory {
    use std::{
        cell::RefCell,
        collections::{BTreeMap, BTreeSet},
        io,
        path::{Component, Path, PathBuf},
    };

    use super::FileSystem;

    /// In-memory filesystem for tests.
    ///
    /// Paths are normalized by dropping `.` components, so `./a/b` and `a/b`
    /// name the same entry. The empty path is the root and always exists.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        dirs: RefCell<BTreeSet<PathBuf>>,
        files: RefCell<BTreeMap<PathBuf, String>>,
        denied: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFs {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a directory (and its parents).
        pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
            self.add_dir(path.as_ref());
            self
        }

        /// Add a file, creating its parent directories.
        pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
            let path = normalize(path.as_ref());
            if let Some(parent) = path.parent() {
                self.add_dir(parent);
            }
            self.files.borrow_mut().insert(path, contents.into());
            self
        }

        /// Make every mutation at or below `path` fail with `PermissionDenied`.
        pub fn deny(self, path: impl AsRef<Path>) -> Self {
            self.denied.borrow_mut().push(normalize(path.as_ref()));
            self
        }

        /// Contents of a file, if present.
        pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files.borrow().get(&normalize(path.as_ref())).cloned()
        }

        /// All file paths, sorted.
        pub fn files(&self) -> Vec<PathBuf> {
            self.files.borrow().keys().cloned().collect()
        }

        /// All directory paths, sorted.
        pub fn dirs(&self) -> Vec<PathBuf> {
            self.dirs.borrow().iter().cloned().collect()
        }

        fn add_dir(&self, path: &Path) {
            let mut dirs = self.dirs.borrow_mut();
            for ancestor in normalize(path).ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    dirs.insert(ancestor.to_path_buf());
                }
            }
        }

        fn check_allowed(&self, path: &Path) -> io::Result<()> {
            if self.denied.borrow().iter().any(|d| path.starts_with(d)) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("permission denied: {}", path.display()),
                ));
            }
            Ok(())
        }

        fn dir_exists(&self, path: &Path) -> bool {
            path.as_os_str().is_empty() || self.dirs.borrow().contains(path)
        }
    }

    impl FileSystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            let path = normalize(path);
            self.dir_exists(&path) || self.files.borrow().contains_key(&path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dir_exists(&normalize(path))
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            let path = normalize(path);
            if self.files.borrow().contains_key(&path) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("file exists: {}", path.display()),
                ));
            }
            if self.dir_exists(&path) {
                return Ok(());
            }
            self.check_allowed(&path)?;
            self.add_dir(&path);
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            let path = normalize(path);
            self.files.borrow().get(&path).cloned().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                )
            })
        }

        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            let path = normalize(path);
            self.check_allowed(&path)?;
            let parent = path.parent().unwrap_or(Path::new(""));
            if !self.dir_exists(parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such directory: {}", parent.display()),
                ));
            }
            if self.dir_exists(&path) {
                return Err(io::Error::new(
                    io::ErrorKind::IsADirectory,
                    format!("is a directory: {}", path.display()),
                ));
            }
            self.files.borrow_mut().insert(path, contents.to_string());
            Ok(())
        }
    }

    fn normalize(path: &Path) -> PathBuf {
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}
