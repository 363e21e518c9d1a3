//! Domain layer - Manifest model and retag planning

pub mod manifest;
pub mod planner;
pub mod target;

pub use manifest::ManifestEntry;
pub use planner::{plan, snapshot_name, RetagDirective, RunParameters};
pub use target::TargetSystem;
