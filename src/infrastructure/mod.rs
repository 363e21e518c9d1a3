//! Infrastructure layer - Manifest files and build tool processes

pub mod build_tool;
pub mod manifest;

pub use build_tool::{BuildInvocation, BuildTool, TaskRunner, DEFAULT_BUILD_TOOL};
pub use manifest::load_manifest;
