//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{ModuleTemplate, TemplateKind};
use crate::error::ScaffoldResult;

/// Port for locating the application root (the directory holding `code/`).
///
/// Implemented by:
/// - `modgen_adapters::paths::FixedPathResolver` (explicit directory)
/// - `modgen_adapters::paths::DiscoveringPathResolver` (walks up from a start dir)
#[cfg_attr(test, mockall::automock)]
pub trait PathResolver: Send + Sync {
    /// Absolute or caller-relative path of the application root.
    fn app_root(&self) -> ScaffoldResult<PathBuf>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Errors must carry the underlying I/O failure unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `modgen_adapters::template_store::EmbeddedTemplates` (compiled in)
/// - `modgen_adapters::template_store::DirectoryTemplates` (read from disk)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the template for `kind`.
    fn load(&self, kind: TemplateKind) -> ScaffoldResult<ModuleTemplate>;
}

/// Progress notifications emitted while a module is being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// The module directory and its `etc/` subdirectory exist.
    DirectoriesCreated,
    /// Both module files were written.
    FilesCreated,
}

impl ScaffoldEvent {
    /// Console line for this event.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::DirectoriesCreated => "Necessary directories created!",
            Self::FilesCreated => "Necessary files created!",
        }
    }
}

/// Port receiving [`ScaffoldEvent`]s as they happen.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressSink {
    fn on_event(&self, event: ScaffoldEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_event(&self, _event: ScaffoldEvent) {}
}
