//! CLI command definitions

use crate::domain::{RunParameters, TargetSystem};
use crate::error::{RetagError, Result};
use crate::infrastructure::DEFAULT_BUILD_TOOL;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "manifest-retag")]
#[command(about = "Retag release manifest images in git or quay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Release manifest (JSON array of built images)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Tag to apply: a release tag, or a YYYY-MM-DD-HH-MM-SS snapshot timestamp
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Dry-run token forwarded to the build tool as RETAG_DRY_RUN
    #[arg(value_name = "DRY_RUN")]
    pub dry_run: String,

    /// Where to retag (git, quay)
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Release name used for snapshot tags (e.g., 2.0.1)
    #[arg(value_name = "RELEASE")]
    pub release: String,

    /// Build tool command line
    #[arg(long, env = "RETAG_BUILD_TOOL", default_value = DEFAULT_BUILD_TOOL)]
    pub build_tool: String,

    /// Print retag directives without running the build tool
    #[arg(long)]
    pub plan: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build run parameters; fails on an unknown target system
    pub fn run_parameters(&self) -> Result<RunParameters> {
        let target_system =
            TargetSystem::from_str(&self.target).map_err(RetagError::InvalidTarget)?;

        Ok(RunParameters {
            requested_tag: self.tag.clone(),
            dry_run: self.dry_run.clone(),
            target_system,
            release_name: self.release.clone(),
        })
    }
}
