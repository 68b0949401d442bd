//! modgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the modgen
//! module scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ModuleScaffolder)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (PathResolver, Filesystem, Templates)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      modgen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, EmbeddedTemplates)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ModuleIdentifier, ModuleTemplate, ...) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modgen_core::application::{ModuleScaffolder, NoProgress};
//!
//! // Inject adapters, then create `<app>/code/Acme/Catalog`
//! let scaffolder = ModuleScaffolder::new(resolver, filesystem, templates);
//! let outcome = scaffolder.run("Acme_Catalog", &NoProgress)?;
//! println!("{}", outcome.message());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ModuleScaffolder, NoProgress, ScaffoldEvent, ScaffoldOutcome, ScaffoldPlan,
        ports::{Filesystem, PathResolver, ProgressSink, TemplateStore},
    };
    pub use crate::domain::{ModuleIdentifier, ModuleStructure, ModuleTemplate, TemplateKind};
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
