use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn retag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("manifest-retag").unwrap();
    cmd.env_remove("RETAG_BUILD_TOOL");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub const SAMPLE_MANIFEST: &str = r#"[
  {
    "image-name": "multicloud-manager",
    "image-tag": "2.0.1-1a2b3c",
    "git-sha256": "1a2b3c",
    "git-repository": "open-cluster-management/multicloud-manager",
    "image-remote": "quay.io/open-cluster-management"
  },
  {
    "image-name": "origin-oauth-proxy",
    "image-tag": "4.5.0-4d5e6f",
    "git-sha256": "4d5e6f",
    "git-repository": "open-cluster-management/origin-oauth-proxy"
  },
  {
    "image-name": "thanos",
    "image-tag": "0.13.0-777888",
    "git-sha256": "777888",
    "git-repository": "thanos-io/thanos"
  },
  {
    "image-name": "grafana",
    "image-tag": "7.1.3-999aaa",
    "git-sha256": "999aaa",
    "git-repository": "open-cluster-management/grafana"
  },
  {
    "image-name": "search-api",
    "image-tag": "2.0.1-bbbccc",
    "git-sha256": "bbbccc",
    "git-repository": "open-cluster-management/search-api"
  }
]"#;

pub fn write_manifest(temp: &TempDir, contents: &str) -> PathBuf {
    let path = temp.path().join("manifest.json");
    fs::write(&path, contents).unwrap();
    path
}
