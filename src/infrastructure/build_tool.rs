//! Build tool integration for running retag targets

use crate::error::{RetagError, Result};
use std::process::Command;

/// Build tool used when nothing else is configured
pub const DEFAULT_BUILD_TOOL: &str = "make";

/// One build target run with `KEY=value` variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInvocation {
    pub target: String,
    pub variables: Vec<(String, String)>,
}

impl BuildInvocation {
    pub fn new(target: impl Into<String>) -> Self {
        BuildInvocation {
            target: target.into(),
            variables: Vec::new(),
        }
    }

    /// Append a variable, keeping insertion order
    pub fn var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.variables.push((key.to_string(), value.into()));
        self
    }

    /// Arguments after the program: target first, then `KEY=value` pairs
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.variables.len() + 1);
        args.push(self.target.clone());
        args.extend(
            self.variables
                .iter()
                .map(|(key, value)| format!("{}={}", key, value)),
        );
        args
    }
}

/// Runs build targets
pub trait TaskRunner {
    /// Run the invocation to completion; a non-success status is an error
    fn run(&self, invocation: &BuildInvocation) -> Result<()>;
}

/// Build tool started as a child process
#[derive(Debug, Clone)]
pub struct BuildTool {
    command: String,
}

impl BuildTool {
    /// Create a build tool from a command line such as `make -C release`
    pub fn new(command: String) -> Self {
        BuildTool { command }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return (DEFAULT_BUILD_TOOL.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

impl Default for BuildTool {
    fn default() -> Self {
        BuildTool::new(DEFAULT_BUILD_TOOL.to_string())
    }
}

impl TaskRunner for BuildTool {
    fn run(&self, invocation: &BuildInvocation) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.extend(invocation.args());

        tracing::debug!(program = %program, args = ?args, "running build target");

        // Arguments go straight to the process, never through a shell
        let status = Command::new(&program)
            .args(&args)
            .status()
            .map_err(|source| RetagError::BuildToolLaunch {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            tracing::error!(
                build_target = %invocation.target,
                code = ?status.code(),
                "build target failed"
            );
            return Err(RetagError::BuildToolFailed {
                target: invocation.target.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
