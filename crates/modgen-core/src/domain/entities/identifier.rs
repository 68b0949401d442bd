//! `Vendor_Module` identifiers.

use std::fmt;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Separator between the vendor and module segments.
pub const SEPARATOR: char = '_';

/// Directory under the application root that holds vendor code.
pub const CODE_DIR: &str = "code";

/// A module identifier such as `Foo_Bar`.
///
/// Parsing only requires the separator to be present. It does not check
/// that both segments are non-empty or that there is a single separator:
/// `"_Foo"`, `"Foo_"` and `"A_B_C"` are all accepted. The vendor ends at the
/// first separator and the module at the second, so `"A_B_C"` becomes vendor
/// `A`, module `B`, and the trailing `_C` is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleIdentifier {
    vendor: String,
    module: String,
}

impl ModuleIdentifier {
    /// Parse a raw `Vendor_Module` token.
    ///
    /// # Errors
    /// [`DomainError::InvalidIdentifier`] when `raw` has no `_`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (vendor, rest) =
            raw.split_once(SEPARATOR)
                .ok_or_else(|| DomainError::InvalidIdentifier {
                    raw: raw.to_owned(),
                })?;
        let module = rest.split_once(SEPARATOR).map_or(rest, |(module, _)| module);

        Ok(Self {
            vendor: vendor.to_owned(),
            module: module.to_owned(),
        })
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// `<vendor>_<module>`, the value substituted into templates.
    pub fn full_name(&self) -> String {
        format!("{}{SEPARATOR}{}", self.vendor, self.module)
    }

    /// `<app_root>/code/<vendor>/<module>`.
    ///
    /// Segments are appended as text, never joined: an absolute segment such
    /// as `/etc` stays below `<app_root>/code` instead of replacing it.
    pub fn module_dir(&self, app_root: &Path) -> PathBuf {
        let mut dir = app_root.join(CODE_DIR).into_os_string();
        for segment in [&self.vendor, &self.module] {
            dir.push(MAIN_SEPARATOR_STR);
            dir.push(segment);
        }
        PathBuf::from(dir)
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.vendor, self.module)
    }
}

impl FromStr for ModuleIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
