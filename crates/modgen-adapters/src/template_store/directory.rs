//! Templates read from a directory at runtime.

use std::path::{Path, PathBuf};

use modgen_core::{
    application::ports::{Filesystem, TemplateStore},
    domain::{ModuleTemplate, TemplateKind},
    error::ScaffoldResult,
};
use tracing::debug;

/// Loads `<dir>/<kind.template_file()>` through a [`Filesystem`].
///
/// A missing file is reported as the filesystem's own I/O error.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates<F> {
    dir: PathBuf,
    filesystem: F,
}

impl<F: Filesystem> DirectoryTemplates<F> {
    pub fn new(dir: impl Into<PathBuf>, filesystem: F) -> Self {
        Self {
            dir: dir.into(),
            filesystem,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, kind: TemplateKind) -> PathBuf {
        self.dir.join(kind.template_file())
    }
}

impl<F: Filesystem> TemplateStore for DirectoryTemplates<F> {
    fn load(&self, kind: TemplateKind) -> ScaffoldResult<ModuleTemplate> {
        let path = self.path_of(kind);
        debug!(path = %path.display(), "Reading template");
        let source = self.filesystem.read_to_string(&path)?;
        Ok(ModuleTemplate::new(kind, source))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::filesystem::{LocalFilesystem, MemoryFilesystem};

    #[test]
    fn loads_from_memory_directory() {
        let fs = MemoryFilesystem::new()
            .with_file("/tpl/module.xml.template", "m {VendorName_ModuleName}")
            .with_file("/tpl/registration.php.template", "r");
        let store = DirectoryTemplates::new("/tpl", fs);

        let manifest = store.load(TemplateKind::Manifest).unwrap();
        assert_eq!(manifest.source(), "m {VendorName_ModuleName}");
        assert_eq!(manifest.kind(), TemplateKind::Manifest);
        assert_eq!(store.load(TemplateKind::Registration).unwrap().source(), "r");
    }

    #[test]
    fn missing_template_is_io_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DirectoryTemplates::new(tmp.path(), LocalFilesystem::new());

        let err = store.load(TemplateKind::Registration).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn reads_real_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("module.xml.template"), "<x/>").unwrap();
        let store = DirectoryTemplates::new(tmp.path(), LocalFilesystem::new());

        assert_eq!(store.load(TemplateKind::Manifest).unwrap().source(), "<x/>");
        assert_eq!(store.dir(), tmp.path());
    }
}
