use std::path::{Path, PathBuf};

use crate::domain::entities::{
    identifier::ModuleIdentifier,
    template::{ModuleTemplate, TemplateKind},
};

/// Name of the configuration directory inside a module.
pub const ETC_DIR: &str = "etc";

/// Module layout ready for materialization.
///
/// Holds absolute directory paths in creation order and rendered files with
/// paths relative to `root`. It contains no I/O, only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStructure {
    pub(crate) root: PathBuf,
    pub(crate) directories: Vec<PathBuf>,
    pub(crate) files: Vec<FileToWrite>,
}

impl ModuleStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            directories: vec![root.clone(), root.join(ETC_DIR)],
            root,
            files: Vec::new(),
        }
    }

    /// Render every template for `identifier` and lay them out under `root`.
    ///
    /// Templates are added in the order given; callers pass them in
    /// [`TemplateKind::ALL`] order.
    pub fn render(
        identifier: &ModuleIdentifier,
        root: impl Into<PathBuf>,
        templates: &[ModuleTemplate],
    ) -> Self {
        let mut structure = Self::new(root);
        for template in templates {
            structure.add_file(template.kind(), template.render(identifier));
        }
        structure
    }

    pub fn add_file(&mut self, kind: TemplateKind, content: String) {
        self.files.push(FileToWrite {
            kind,
            path: PathBuf::from(kind.output_path()),
            content,
        });
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Absolute destination of `file`.
    pub fn target_of(&self, file: &FileToWrite) -> PathBuf {
        self.root.join(&file.path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub kind: TemplateKind,
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_structure_has_root_and_etc() {
        let s = ModuleStructure::new("/app/code/Foo/Bar");
        let dirs: Vec<_> = s.directories().collect();
        assert_eq!(
            dirs,
            vec![
                Path::new("/app/code/Foo/Bar"),
                Path::new("/app/code/Foo/Bar/etc")
            ]
        );
        assert_eq!(s.file_count(), 0);
    }

    #[test]
    fn render_places_files_under_root() {
        let id = ModuleIdentifier::parse("Foo_Bar").unwrap();
        let templates = [
            ModuleTemplate::new(TemplateKind::Manifest, "m={VendorName_ModuleName}"),
            ModuleTemplate::new(TemplateKind::Registration, "r={VendorName_ModuleName}"),
        ];

        let s = ModuleStructure::render(&id, "/app/code/Foo/Bar", &templates);
        let files: Vec<_> = s.files().collect();

        assert_eq!(files.len(), 2);
        assert_eq!(
            s.target_of(files[0]),
            PathBuf::from("/app/code/Foo/Bar/etc/module.xml")
        );
        assert_eq!(files[0].content, "m=Foo_Bar");
        assert_eq!(
            s.target_of(files[1]),
            PathBuf::from("/app/code/Foo/Bar/registration.php")
        );
        assert_eq!(files[1].content, "r=Foo_Bar");
        assert_eq!(files[1].size(), 9);
    }
}
