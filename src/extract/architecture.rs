//! Architecture pattern tags from directory layout and manifest hints.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::types::ProjectMetadata;

pub const TAG_PLUGIN_SYSTEM: &str = "plugin/extension system";
pub const TAG_GATEWAY: &str = "gateway pattern";
pub const TAG_MULTI_CHANNEL: &str = "multi-channel architecture";
pub const TAG_WORKSPACES: &str = "workspace/multi-package architecture";

/// Detect architecture patterns for a project.
///
/// Purely additive directory-existence and manifest-key checks; each tag is
/// emitted at most once. Never fails.
pub fn extract_architecture_patterns(path: &Path, metadata: &ProjectMetadata) -> Vec<String> {
    let mut patterns = Vec::new();
    let path_str = metadata.path.to_string_lossy().to_lowercase();

    if path.join("extensions").is_dir() || path.join("plugins").is_dir() {
        patterns.push(TAG_PLUGIN_SYSTEM.to_string());
    }

    if path.join("gateway").is_dir() || path_str.contains("gateway") {
        patterns.push(TAG_GATEWAY.to_string());
    }

    if path.join("src").join("channels").is_dir() || path_str.contains("channel") {
        patterns.push(TAG_MULTI_CHANNEL.to_string());
    }

    if has_workspaces_key(path) {
        patterns.push(TAG_WORKSPACES.to_string());
    }

    patterns
}

fn has_workspaces_key(path: &Path) -> bool {
    let Ok(raw) = fs::read_to_string(path.join("package.json")) else {
        return false;
    };
    serde_json::from_str::<Value>(&raw)
        .map(|v| v.get("workspaces").is_some())
        .unwrap_or(false)
}
