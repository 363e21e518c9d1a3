//! Release manifest entries

use serde::Deserialize;

/// One built image as described by the release manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    #[serde(rename = "image-name")]
    pub image_name: String,
    /// Expected to end with `-<git_sha>`
    #[serde(rename = "image-tag")]
    pub image_tag: String,
    #[serde(rename = "git-sha256")]
    pub git_sha: String,
    #[serde(rename = "git-repository")]
    pub git_repository: String,
}

impl ManifestEntry {
    pub fn new(
        image_name: impl Into<String>,
        image_tag: impl Into<String>,
        git_sha: impl Into<String>,
        git_repository: impl Into<String>,
    ) -> Self {
        ManifestEntry {
            image_name: image_name.into(),
            image_tag: image_tag.into(),
            git_sha: git_sha.into(),
            git_repository: git_repository.into(),
        }
    }

    /// Image tag with the `-<git_sha>` part removed.
    ///
    /// Tags that do not carry the sha come back unchanged.
    pub fn version(&self) -> String {
        let suffix = format!("-{}", self.git_sha);
        self.image_tag.replace(&suffix, "")
    }
}
