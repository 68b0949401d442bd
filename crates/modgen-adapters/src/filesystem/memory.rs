//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScaffoldResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can hand one clone to the
/// scaffolder and inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Make every mutation fail with `PermissionDenied`.
    pub fn read_only(self) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only = true;
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of directories known, ancestors included.
    pub fn directory_count(&self) -> usize {
        self.inner.read().map(|i| i.directories.len()).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn lock_error() -> ApplicationError {
    ApplicationError::AdapterState {
        name: "memory filesystem",
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        if inner.read_only {
            return Err(ApplicationError::filesystem(
                path,
                "create directory",
                io::Error::from(io::ErrorKind::PermissionDenied),
            )
            .into());
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::filesystem(
                path,
                "read file",
                io::Error::from(io::ErrorKind::NotFound),
            )
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        if inner.read_only {
            return Err(ApplicationError::filesystem(
                path,
                "write file",
                io::Error::from(io::ErrorKind::PermissionDenied),
            )
            .into());
        }

        // Parent must exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::filesystem(
                    path,
                    "write file",
                    io::Error::from(io::ErrorKind::NotFound),
                )
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();
        assert!(fs.exists(Path::new("/a")));
        assert!(fs.exists(Path::new("/a/b")));
        assert!(fs.exists(Path::new("/a/b/c")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("/x/y.txt"), "y").unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));

        fs.create_dir_all(Path::new("/x")).unwrap();
        fs.write_file(Path::new("/x/y.txt"), "y").unwrap();
        assert_eq!(fs.file(Path::new("/x/y.txt")).as_deref(), Some("y"));
    }

    #[test]
    fn seeded_file_is_readable() {
        let fs = MemoryFilesystem::new().with_file("/t/a.template", "content");
        assert!(fs.exists(Path::new("/t")));
        assert_eq!(fs.read_to_string(Path::new("/t/a.template")).unwrap(), "content");
    }

    #[test]
    fn read_only_rejects_mutations() {
        let fs = MemoryFilesystem::new().read_only();
        let err = fs.create_dir_all(Path::new("/a")).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(fs.directory_count(), 0);
    }
}
