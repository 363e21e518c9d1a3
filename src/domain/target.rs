//! Target system selection

use std::fmt;
use std::str::FromStr;

/// Where a retag is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSystem {
    /// Source-control host
    Git,
    /// Container registry
    Quay,
}

impl TargetSystem {
    /// Token used on the command line and in the audit line
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSystem::Git => "git",
            TargetSystem::Quay => "quay",
        }
    }

    /// Build tool target that performs the retag
    pub fn build_target(&self) -> &'static str {
        match self {
            TargetSystem::Git => "retag/git",
            TargetSystem::Quay => "retag/quay",
        }
    }
}

impl fmt::Display for TargetSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git" => Ok(TargetSystem::Git),
            "quay" => Ok(TargetSystem::Quay),
            _ => Err(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets() {
        assert_eq!(TargetSystem::from_str("git").unwrap(), TargetSystem::Git);
        assert_eq!(TargetSystem::from_str("quay").unwrap(), TargetSystem::Quay);
        assert_eq!(TargetSystem::from_str("QUAY").unwrap(), TargetSystem::Quay);
    }

    #[test]
    fn test_parse_unknown_target_returns_token() {
        assert_eq!(TargetSystem::from_str("svn").unwrap_err(), "svn");
        assert!(TargetSystem::from_str("").is_err());
    }

    #[test]
    fn test_display_and_build_target() {
        assert_eq!(TargetSystem::Git.to_string(), "git");
        assert_eq!(TargetSystem::Quay.to_string(), "quay");
        assert_eq!(TargetSystem::Git.build_target(), "retag/git");
        assert_eq!(TargetSystem::Quay.build_target(), "retag/quay");
    }
}
