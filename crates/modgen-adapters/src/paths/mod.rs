//! Application root resolvers.
//!
//! The application root is the `app/` directory of a checkout: the one that
//! holds `etc/` and receives `code/<Vendor>/<Module>`.

use std::path::{Path, PathBuf};

use modgen_core::{
    application::{ApplicationError, ports::PathResolver},
    error::ScaffoldResult,
};
use tracing::debug;

/// Name of the application directory inside a checkout.
pub const APP_DIR: &str = "app";

/// Subdirectory whose presence marks `app/` as a real application root.
pub const APP_MARKER: &str = "etc";

/// Resolver returning a fixed directory, from a flag or configuration.
#[derive(Debug, Clone)]
pub struct FixedPathResolver {
    root: PathBuf,
}

impl FixedPathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PathResolver for FixedPathResolver {
    fn app_root(&self) -> ScaffoldResult<PathBuf> {
        Ok(self.root.clone())
    }
}

/// Resolver that walks up from `start` until it finds a directory
/// containing `app/etc`, and returns that `app/` directory.
#[derive(Debug, Clone)]
pub struct DiscoveringPathResolver {
    start: PathBuf,
}

impl DiscoveringPathResolver {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }

    /// Start from the process working directory.
    pub fn from_current_dir() -> ScaffoldResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| crate::filesystem::map_io_error(Path::new("."), e, "read current directory"))?;
        Ok(Self::new(cwd))
    }

    fn find(&self) -> Option<PathBuf> {
        self.start.ancestors().find_map(|dir| {
            let candidate = dir.join(APP_DIR);
            candidate.join(APP_MARKER).is_dir().then_some(candidate)
        })
    }
}

impl PathResolver for DiscoveringPathResolver {
    fn app_root(&self) -> ScaffoldResult<PathBuf> {
        match self.find() {
            Some(root) => {
                debug!(root = %root.display(), "Application root discovered");
                Ok(root)
            }
            None => Err(ApplicationError::AppRootNotFound {
                start: self.start.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn fixed_returns_given_root() {
        let resolver = FixedPathResolver::new("/srv/shop/app");
        assert_eq!(resolver.app_root().unwrap(), PathBuf::from("/srv/shop/app"));
    }

    #[test]
    fn discovers_from_checkout_root() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("app/etc")).unwrap();

        let root = DiscoveringPathResolver::new(tmp.path()).app_root().unwrap();
        assert_eq!(root, tmp.path().join("app"));
    }

    #[test]
    fn discovers_from_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("app/etc")).unwrap();
        let nested = tmp.path().join("app/code/Foo");
        fs::create_dir_all(&nested).unwrap();

        let root = DiscoveringPathResolver::new(&nested).app_root().unwrap();
        assert_eq!(root, tmp.path().join("app"));
    }

    #[test]
    fn app_without_etc_is_not_a_root() {
        let tmp = tempfile::tempdir().unwrap();
        let start = tmp.path().join("work");
        fs::create_dir_all(start.join("app")).unwrap();

        let found = DiscoveringPathResolver::new(&start).find();
        assert_ne!(found, Some(start.join("app")));
    }
}
