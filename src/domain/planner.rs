//! Manifest entry to retag directive derivation

use crate::domain::manifest::ManifestEntry;
use crate::domain::target::TargetSystem;
use regex::Regex;
use std::sync::OnceLock;

/// Only repositories under this owner are retagged
pub const OWNED_REPOSITORY_PREFIX: &str = "open-cluster-management";

/// YYYY-MM-DD-HH-MM-SS shaped tag, not validated as a calendar date
fn snapshot_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[0-9]{4}(-[0-9]{2}){5}$").unwrap())
}

/// Scalar inputs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub requested_tag: String,
    /// Forwarded to the build tool untouched
    pub dry_run: String,
    pub target_system: TargetSystem,
    pub release_name: String,
}

/// Everything needed to retag one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagDirective {
    pub snapshot_name: String,
    pub component_name: String,
    pub repository: String,
    pub quay_component_tag: String,
    pub github_sha: String,
    pub dry_run: String,
    pub target_system: TargetSystem,
}

/// Returns true if the tag marks an automated snapshot build
pub fn is_snapshot_tag(tag: &str) -> bool {
    snapshot_tag_regex().is_match(tag)
}

/// Derive the name images are retagged to.
///
/// Snapshot tags are anchored to the release (`2.0.1-SNAPSHOT-2020-05-01-10-00-00`),
/// anything else is used verbatim.
pub fn snapshot_name(requested_tag: &str, release_name: &str) -> String {
    if is_snapshot_tag(requested_tag) {
        format!("{}-SNAPSHOT-{}", release_name, requested_tag)
    } else {
        requested_tag.to_string()
    }
}

/// Whether an entry belongs to a repository this tool may retag
pub fn is_owned(entry: &ManifestEntry) -> bool {
    entry.git_repository.starts_with(OWNED_REPOSITORY_PREFIX)
}

/// Produce one directive per owned entry, in manifest order
pub fn plan<'a>(
    entries: &'a [ManifestEntry],
    params: &'a RunParameters,
) -> impl Iterator<Item = RetagDirective> + 'a {
    let name = snapshot_name(&params.requested_tag, &params.release_name);

    entries
        .iter()
        .filter(|entry| is_owned(entry))
        .map(move |entry| RetagDirective {
            snapshot_name: name.clone(),
            component_name: entry.image_name.clone(),
            repository: entry.git_repository.clone(),
            quay_component_tag: entry.image_tag.clone(),
            github_sha: entry.git_sha.clone(),
            dry_run: params.dry_run.clone(),
            target_system: params.target_system,
        })
}
