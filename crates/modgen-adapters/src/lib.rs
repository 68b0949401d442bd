//! Infrastructure adapters for modgen.
//!
//! This crate implements the ports defined in `modgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod paths;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use paths::{DiscoveringPathResolver, FixedPathResolver};
pub use template_store::{DirectoryTemplates, EmbeddedTemplates};
