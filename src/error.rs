//! Error types for manifest-retag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for manifest-retag
#[derive(Debug, Error)]
pub enum RetagError {
    #[error("Cannot read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid target system: {0}")]
    InvalidTarget(String),

    #[error("Failed to launch build tool '{program}': {source}")]
    BuildToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Build target '{target}' failed ({})", describe_code(.code))]
    BuildToolFailed { target: String, code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl RetagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RetagError::ManifestRead { .. } | RetagError::ManifestParse { .. } => 2,
            RetagError::InvalidTarget(_) => 3,
            RetagError::BuildToolLaunch { .. } | RetagError::BuildToolFailed { .. } => 4,
            RetagError::Io(_) => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RetagError::ManifestParse { .. } => {
                format!(
                    "{}\n\n\
                    The manifest must be a JSON array of objects, each with the keys:\n\
                    • image-name\n\
                    • image-tag\n\
                    • git-sha256\n\
                    • git-repository",
                    self
                )
            }
            RetagError::InvalidTarget(token) => {
                format!(
                    "Invalid target system: '{}'\n\n\
                    Valid targets: git, quay\n\
                    Example: manifest-retag manifest.json v2.0.1 false quay 2.0.1",
                    token
                )
            }
            RetagError::BuildToolLaunch { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the build tool is installed and in PATH\n\
                    • Pass a different build tool: --build-tool 'make -C build'\n\
                    • Set the RETAG_BUILD_TOOL environment variable",
                    self
                )
            }
            RetagError::BuildToolFailed { .. } => {
                format!(
                    "{}\n\n\
                    Remaining manifest entries were not processed.\n\
                    Re-run with --plan to review the retag directives.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RetagError
pub type Result<T> = std::result::Result<T, RetagError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> serde_json::Error {
        serde_json::from_str::<Vec<String>>("{").unwrap_err()
    }

    #[test]
    fn test_exit_codes_by_category() {
        let read = RetagError::ManifestRead {
            path: PathBuf::from("manifest.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let parse = RetagError::ManifestParse {
            path: PathBuf::from("manifest.json"),
            source: parse_error(),
        };
        let failed = RetagError::BuildToolFailed {
            target: "retag/git".to_string(),
            code: Some(2),
        };

        assert_eq!(read.exit_code(), 2);
        assert_eq!(parse.exit_code(), 2);
        assert_eq!(RetagError::InvalidTarget("svn".into()).exit_code(), 3);
        assert_eq!(failed.exit_code(), 4);
    }

    #[test]
    fn test_manifest_parse_lists_required_keys() {
        let err = RetagError::ManifestParse {
            path: PathBuf::from("manifest.json"),
            source: parse_error(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("manifest.json"));
        assert!(msg.contains("git-sha256"));
        assert!(msg.contains("git-repository"));
    }

    #[test]
    fn test_invalid_target_suggestions() {
        let msg = RetagError::InvalidTarget("svn".to_string()).display_with_suggestions();
        assert!(msg.contains("'svn'"));
        assert!(msg.contains("git, quay"));
    }

    #[test]
    fn test_build_tool_failed_message() {
        let err = RetagError::BuildToolFailed {
            target: "retag/quay".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "Build target 'retag/quay' failed (exit code 2)");
        assert!(err.display_with_suggestions().contains("--plan"));

        let signalled = RetagError::BuildToolFailed {
            target: "retag/git".to_string(),
            code: None,
        };
        assert!(signalled.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = RetagError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(err.display_with_suggestions(), "IO error: boom");
    }
}
