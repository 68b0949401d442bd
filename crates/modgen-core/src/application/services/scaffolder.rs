//! Module Scaffolder - main application orchestrator.
//!
//! This service coordinates the module creation workflow:
//! 1. Parse and validate the `Vendor_Module` identifier
//! 2. Resolve the module directory under the application root
//! 3. Stop if the directory already exists
//! 4. Create directories, then render and write each template
//!
//! There is no rollback. An I/O failure half way leaves whatever was already
//! created on disk and is returned to the caller unchanged.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, PathResolver, ProgressSink, ScaffoldEvent, TemplateStore},
    domain::{ModuleIdentifier, ModuleStructure, ModuleTemplate, TemplateKind},
    error::ScaffoldResult,
};

/// Result of a successful [`ModuleScaffolder::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The module was created.
    Created {
        identifier: ModuleIdentifier,
        path: PathBuf,
        files: Vec<PathBuf>,
    },
    /// The module directory was already there; nothing was touched.
    AlreadyExists {
        identifier: ModuleIdentifier,
        path: PathBuf,
    },
}

impl ScaffoldOutcome {
    pub fn identifier(&self) -> &ModuleIdentifier {
        match self {
            Self::Created { identifier, .. } | Self::AlreadyExists { identifier, .. } => identifier,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path, .. } | Self::AlreadyExists { path, .. } => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// Final console line.
    pub fn message(&self) -> String {
        match self {
            Self::Created { identifier, .. } => {
                format!("Module {identifier} successfully created!")
            }
            Self::AlreadyExists { identifier, .. } => {
                format!("Module {identifier} already exist!")
            }
        }
    }
}

/// What [`ModuleScaffolder::run`] would do, computed without writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub identifier: ModuleIdentifier,
    pub structure: ModuleStructure,
    pub already_exists: bool,
}

/// Main scaffolding service.
pub struct ModuleScaffolder {
    resolver: Box<dyn PathResolver>,
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateStore>,
}

impl ModuleScaffolder {
    /// Create a new scaffolder with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use modgen_core::application::ModuleScaffolder;
    ///
    /// let scaffolder = ModuleScaffolder::new(
    ///     resolver,   // impl PathResolver
    ///     filesystem, // impl Filesystem
    ///     templates,  // impl TemplateStore
    /// );
    /// ```
    pub fn new(
        resolver: Box<dyn PathResolver>,
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateStore>,
    ) -> Self {
        Self {
            resolver,
            filesystem,
            templates,
        }
    }

    /// Create the module named by `raw` (`Vendor_Module`).
    ///
    /// Validation happens before any port is called, so an invalid
    /// identifier touches neither the filesystem nor the path resolver.
    #[instrument(skip_all, fields(module = %raw))]
    pub fn run(&self, raw: &str, progress: &dyn ProgressSink) -> ScaffoldResult<ScaffoldOutcome> {
        let identifier = ModuleIdentifier::parse(raw)?;
        self.create(identifier, progress)
    }

    /// Create the module for an already parsed identifier.
    pub fn create(
        &self,
        identifier: ModuleIdentifier,
        progress: &dyn ProgressSink,
    ) -> ScaffoldResult<ScaffoldOutcome> {
        let module_dir = self.module_dir(&identifier)?;

        if self.filesystem.exists(&module_dir) {
            info!(path = %module_dir.display(), "Module directory already exists");
            return Ok(ScaffoldOutcome::AlreadyExists {
                identifier,
                path: module_dir,
            });
        }

        let structure = ModuleStructure::new(&module_dir);

        for dir in structure.directories() {
            debug!(path = %dir.display(), "Creating directory");
            self.filesystem.create_dir_all(dir)?;
        }
        progress.on_event(ScaffoldEvent::DirectoriesCreated);

        // Each template is loaded right before its file is written, so a
        // missing registration template still leaves the manifest on disk.
        let mut written = Vec::with_capacity(TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            let template = self.load_template(kind)?;
            let content = template.render(&identifier);
            let target = structure.root().join(kind.output_path());
            debug!(path = %target.display(), bytes = content.len(), "Writing file");
            self.filesystem.write_file(&target, &content)?;
            written.push(target);
        }
        progress.on_event(ScaffoldEvent::FilesCreated);

        info!(module = %identifier, path = %module_dir.display(), "Module created");
        Ok(ScaffoldOutcome::Created {
            identifier,
            path: module_dir,
            files: written,
        })
    }

    /// Compute the layout `run` would produce, without side effects.
    ///
    /// An existing module yields a plan with no files and no template is
    /// loaded, matching what `run` does in that case.
    #[instrument(skip_all, fields(module = %raw))]
    pub fn plan(&self, raw: &str) -> ScaffoldResult<ScaffoldPlan> {
        let identifier = ModuleIdentifier::parse(raw)?;
        let module_dir = self.module_dir(&identifier)?;
        if self.filesystem.exists(&module_dir) {
            return Ok(ScaffoldPlan {
                identifier,
                structure: ModuleStructure::new(module_dir),
                already_exists: true,
            });
        }

        let templates = TemplateKind::ALL
            .into_iter()
            .map(|kind| self.load_template(kind))
            .collect::<ScaffoldResult<Vec<_>>>()?;

        let structure = ModuleStructure::render(&identifier, module_dir, &templates);

        Ok(ScaffoldPlan {
            identifier,
            structure,
            already_exists: false,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn module_dir(&self, identifier: &ModuleIdentifier) -> ScaffoldResult<PathBuf> {
        let app_root = self.resolver.app_root()?;
        let dir = identifier.module_dir(&app_root);
        debug!(app_root = %app_root.display(), module_dir = %dir.display(), "Destination resolved");
        Ok(dir)
    }

    fn load_template(&self, kind: TemplateKind) -> ScaffoldResult<ModuleTemplate> {
        let template = self.templates.load(kind)?;
        debug!(
            template = %kind,
            placeholders = template.placeholder_count(),
            "Template loaded"
        );
        Ok(template)
    }
}
