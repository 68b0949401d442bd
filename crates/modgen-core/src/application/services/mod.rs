//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a module structure".

pub mod scaffolder;

pub use scaffolder::{ModuleScaffolder, ScaffoldOutcome, ScaffoldPlan};
