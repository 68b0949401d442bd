//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `PathResolver`: Application root lookup
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template retrieval
//!   - `ProgressSink`: Progress reporting
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, NoProgress, PathResolver, ProgressSink, ScaffoldEvent, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockPathResolver, MockProgressSink, MockTemplateStore};
