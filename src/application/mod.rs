//! Application layer - Use cases and orchestration

pub mod retag_release;

pub use retag_release::{RetagOptions, RetagReleaseService, RetagReport};
