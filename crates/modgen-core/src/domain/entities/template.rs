//! Module file templates and placeholder substitution.
//!
//! Rendering is plain literal replacement: every occurrence of
//! [`PLACEHOLDER`] becomes the identifier's full name. There is no escaping
//! and no other variable.

use std::fmt;

use crate::domain::entities::identifier::ModuleIdentifier;

/// Token replaced by `<Vendor>_<Module>` when rendering.
pub const PLACEHOLDER: &str = "{VendorName_ModuleName}";

/// The two files every new module receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `etc/module.xml`, declares the module to the framework.
    Manifest,
    /// `registration.php`, registers the module path with the autoloader.
    Registration,
}

impl TemplateKind {
    /// Write order.
    pub const ALL: [TemplateKind; 2] = [Self::Manifest, Self::Registration];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Registration => "registration",
        }
    }

    /// File name of the template resource.
    pub const fn template_file(&self) -> &'static str {
        match self {
            Self::Manifest => "module.xml.template",
            Self::Registration => "registration.php.template",
        }
    }

    /// Output path, relative to the module directory.
    pub const fn output_path(&self) -> &'static str {
        match self {
            Self::Manifest => "etc/module.xml",
            Self::Registration => "registration.php",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded template: its kind plus raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTemplate {
    kind: TemplateKind,
    source: String,
}

impl ModuleTemplate {
    pub fn new(kind: TemplateKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of placeholder occurrences in the source.
    pub fn placeholder_count(&self) -> usize {
        self.source.matches(PLACEHOLDER).count()
    }

    /// Substitute every placeholder with `identifier.full_name()`.
    pub fn render(&self, identifier: &ModuleIdentifier) -> String {
        self.source.replace(PLACEHOLDER, &identifier.full_name())
    }
}
