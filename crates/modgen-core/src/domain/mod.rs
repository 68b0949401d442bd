// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for modgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! Path resolution, template loading and file writes are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
pub mod entities;
pub mod error;

// Re-exports for convenience
pub use entities::{
    identifier::{CODE_DIR, ModuleIdentifier, SEPARATOR},
    module_structure::{ETC_DIR, FileToWrite, ModuleStructure},
    template::{ModuleTemplate, PLACEHOLDER, TemplateKind},
};

pub use error::{DomainError, ErrorCategory};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Cross-entity properties
    // ========================================================================

    #[test]
    fn split_feeds_both_path_and_placeholder() {
        for raw in ["Foo_Bar", "Acme_Catalog", "A_B_C", "x_y"] {
            let id = ModuleIdentifier::parse(raw).unwrap();
            let root = id.module_dir(Path::new("/app"));
            let templates = [
                ModuleTemplate::new(TemplateKind::Manifest, PLACEHOLDER),
                ModuleTemplate::new(TemplateKind::Registration, PLACEHOLDER),
            ];
            let structure = ModuleStructure::render(&id, &root, &templates);

            assert!(root.ends_with(Path::new(id.vendor()).join(id.module())));
            for file in structure.files() {
                assert_eq!(file.content, format!("{}_{}", id.vendor(), id.module()));
            }
        }
    }

    #[test]
    fn inputs_without_separator_never_parse() {
        for raw in ["", "Foo", "FooBar", "Foo-Bar", "Foo.Bar"] {
            assert!(matches!(
                ModuleIdentifier::parse(raw),
                Err(DomainError::InvalidIdentifier { .. })
            ));
        }
    }
}
