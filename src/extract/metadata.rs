//! Metadata extraction from manifest files and the README.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::types::{ProjectMetadata, ProjectType};

/// How many README lines the description search looks at
const DESCRIPTION_SCAN_LINES: usize = 20;
/// Cap on the extracted description
const DESCRIPTION_MAX_CHARS: usize = 200;
/// Caps on dependency keys taken from package.json
const MAX_DEPENDENCIES: usize = 20;
const MAX_DEV_DEPENDENCIES: usize = 10;

/// Build the flat metadata record for one project.
///
/// Never fails: a manifest that is missing or fails to parse contributes
/// nothing, and extraction continues with whatever was already gathered.
pub fn extract_metadata(path: &Path) -> ProjectMetadata {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mut meta = ProjectMetadata {
        name,
        path: path.to_path_buf(),
        ..Default::default()
    };

    let readme_path = path.join("README.md");
    if readme_path.is_file() {
        meta.has_readme = true;
        if let Ok(text) = fs::read_to_string(&readme_path) {
            meta.description = extract_description(&text);
        }
    }

    let package_json = path.join("package.json");
    if package_json.is_file() {
        meta.project_type = ProjectType::NodeJs;
        append_node_dependencies(&package_json, &mut meta.tech_stack);
    } else if path.join("requirements.txt").is_file() {
        meta.project_type = ProjectType::Python;
    }

    if path.join("docs").is_dir() {
        meta.has_docs = true;
    }

    meta
}

/// First non-blank line in the opening of the README that is neither a
/// heading nor a link/badge line, truncated to 200 characters.
fn extract_description(readme: &str) -> String {
    for line in readme.lines().take(DESCRIPTION_SCAN_LINES) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('[') {
            continue;
        }
        return truncate_chars(trimmed, DESCRIPTION_MAX_CHARS);
    }
    String::new()
}

/// Append dependency names from package.json: up to 20 from `dependencies`,
/// then up to 10 from `devDependencies`. Parse errors are swallowed.
fn append_node_dependencies(package_json: &Path, tech_stack: &mut Vec<String>) {
    let Ok(raw) = fs::read_to_string(package_json) else {
        return;
    };
    let Ok(value) = serde_json::from_str::<Value>(&raw) else {
        return;
    };

    for (key, cap) in [
        ("dependencies", MAX_DEPENDENCIES),
        ("devDependencies", MAX_DEV_DEPENDENCIES),
    ] {
        if let Some(deps) = value.get(key).and_then(|d| d.as_object()) {
            tech_stack.extend(deps.keys().take(cap).cloned());
        }
    }
}

pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
