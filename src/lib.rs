//! manifest-retag - Release manifest image retagging
//!
//! Reads a release manifest of built container images and retags the images
//! owned by open-cluster-management, either on the source-control host or in
//! the container registry, by running the build tool's retag targets.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RetagError;
