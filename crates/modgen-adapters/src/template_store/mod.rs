//! Template stores.

mod directory;
mod embedded;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;
