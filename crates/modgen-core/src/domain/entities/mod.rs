pub mod identifier;
pub mod module_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use identifier::ModuleIdentifier;
pub use module_structure::ModuleStructure;
pub use template::{ModuleTemplate, TemplateKind};
