//! Integration tests for modgen-core's public API, using small in-process
//! port implementations.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use modgen_core::application::ApplicationError;
use modgen_core::prelude::*;

// ── fakes ─────────────────────────────────────────────────────────────────────

struct Root(PathBuf);

impl PathResolver for Root {
    fn app_root(&self) -> ScaffoldResult<PathBuf> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct Recording {
    dirs: Mutex<Vec<PathBuf>>,
    files: Mutex<BTreeMap<PathBuf, String>>,
    existing: Vec<PathBuf>,
}

/// Shared handle so the test keeps access after boxing.
struct Shared(Arc<Recording>);

impl Filesystem for Shared {
    fn exists(&self, path: &Path) -> bool {
        self.0.existing.iter().any(|p| p == path)
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        self.0.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        Err(ApplicationError::filesystem(
            path,
            "read file",
            io::Error::from(io::ErrorKind::NotFound),
        )
        .into())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        self.0
            .files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }
}

struct Fixed;

impl TemplateStore for Fixed {
    fn load(&self, kind: TemplateKind) -> ScaffoldResult<ModuleTemplate> {
        Ok(ModuleTemplate::new(kind, format!("{kind}:{{VendorName_ModuleName}}")))
    }
}

#[derive(Default)]
struct Events(Mutex<Vec<ScaffoldEvent>>);

impl ProgressSink for Events {
    fn on_event(&self, event: ScaffoldEvent) {
        self.0.lock().unwrap().push(event);
    }
}

fn shared(fs: Recording) -> Arc<Recording> {
    Arc::new(fs)
}

fn scaffolder(fs: &Arc<Recording>) -> ModuleScaffolder {
    ModuleScaffolder::new(
        Box::new(Root(PathBuf::from("/shop/app"))),
        Box::new(Shared(Arc::clone(fs))),
        Box::new(Fixed),
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[test]
fn creates_two_directories_and_two_files() {
    let fs = shared(Recording::default());
    let events = Events::default();

    let outcome = scaffolder(&fs).run("Foo_Bar", &events).unwrap();

    assert_eq!(outcome.message(), "Module Foo_Bar successfully created!");
    assert_eq!(outcome.path(), Path::new("/shop/app/code/Foo/Bar"));
    assert_eq!(
        *fs.dirs.lock().unwrap(),
        vec![
            PathBuf::from("/shop/app/code/Foo/Bar"),
            PathBuf::from("/shop/app/code/Foo/Bar/etc"),
        ]
    );

    let files = fs.files.lock().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(
        files[Path::new("/shop/app/code/Foo/Bar/etc/module.xml")],
        "manifest:Foo_Bar"
    );
    assert_eq!(
        files[Path::new("/shop/app/code/Foo/Bar/registration.php")],
        "registration:Foo_Bar"
    );

    assert_eq!(
        *events.0.lock().unwrap(),
        vec![ScaffoldEvent::DirectoriesCreated, ScaffoldEvent::FilesCreated]
    );
}

#[test]
fn invalid_identifier_has_no_side_effects() {
    let fs = shared(Recording::default());
    let events = Events::default();

    let err = scaffolder(&fs).run("InvalidName", &events).unwrap_err();

    assert!(err.is_invalid_identifier());
    assert!(fs.dirs.lock().unwrap().is_empty());
    assert!(fs.files.lock().unwrap().is_empty());
    assert!(events.0.lock().unwrap().is_empty());
}

#[test]
fn existing_module_is_left_alone() {
    let fs = shared(Recording {
        existing: vec![PathBuf::from("/shop/app/code/Foo/Bar")],
        ..Recording::default()
    });
    let events = Events::default();

    let outcome = scaffolder(&fs).run("Foo_Bar", &events).unwrap();

    assert!(!outcome.is_created());
    assert_eq!(outcome.message(), "Module Foo_Bar already exist!");
    assert!(fs.dirs.lock().unwrap().is_empty());
    assert!(events.0.lock().unwrap().is_empty());
}

// Leading, trailing and extra underscores still pass; anything after a
// second underscore is dropped.
#[test]
fn lax_identifiers_are_accepted() {
    for (raw, full_name) in [("A_B_C", "A_B"), ("_Foo", "_Foo"), ("Foo_", "Foo_")] {
        let fs = shared(Recording::default());
        let outcome = scaffolder(&fs).run(raw, &NoProgress).unwrap();
        assert!(outcome.is_created());
        assert_eq!(outcome.identifier().full_name(), full_name);
        assert!(outcome.path().starts_with("/shop/app/code"));
        assert_eq!(fs.files.lock().unwrap().len(), 2);
    }

    let fs = shared(Recording::default());
    let outcome = scaffolder(&fs).run("A_B_C", &NoProgress).unwrap();
    assert_eq!(outcome.identifier().vendor(), "A");
    assert_eq!(outcome.identifier().module(), "B");
    assert_eq!(outcome.path(), Path::new("/shop/app/code/A/B"));
    assert_eq!(outcome.message(), "Module A_B successfully created!");
    assert_eq!(
        fs.files.lock().unwrap()[Path::new("/shop/app/code/A/B/registration.php")],
        "registration:A_B"
    );
}

#[test]
fn absolute_segment_is_written_below_code_dir() {
    let fs = shared(Recording::default());
    scaffolder(&fs).run("Foo_/etc/evil", &NoProgress).unwrap();

    let dirs = fs.dirs.lock().unwrap();
    assert!(dirs.iter().all(|d| d.starts_with("/shop/app/code/Foo")), "{dirs:?}");
    let files = fs.files.lock().unwrap();
    assert!(files.keys().all(|f| f.starts_with("/shop/app/code/Foo")), "{files:?}");
}

#[test]
fn plan_matches_run_without_writing() {
    let fs = shared(Recording::default());
    let plan = scaffolder(&fs).plan("Acme_Catalog").unwrap();

    assert!(!plan.already_exists);
    assert_eq!(plan.structure.root(), Path::new("/shop/app/code/Acme/Catalog"));
    assert_eq!(plan.structure.file_count(), 2);
    assert!(fs.dirs.lock().unwrap().is_empty());
    assert!(fs.files.lock().unwrap().is_empty());
}
