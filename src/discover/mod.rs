//! Project discovery: list candidate project directories under a root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DiscoverError;

/// Marker files that identify a directory as a project.
pub const MANIFEST_FILES: &[&str] = &[
    "README.md",
    "package.json",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
    "pom.xml",
];

/// List project directories under `root`.
///
/// With an explicit `project` name only that subdirectory is returned, and it
/// must exist. Otherwise every immediate, non-hidden subdirectory containing
/// at least one recognized manifest is a project. Results are sorted by name
/// so repeated runs process projects in the same order.
pub fn discover_projects(
    root: &Path,
    project: Option<&str>,
) -> Result<Vec<PathBuf>, DiscoverError> {
    if !root.is_dir() {
        return Err(DiscoverError::ProjectDirNotFound(root.to_path_buf()));
    }

    if let Some(name) = project {
        let path = root.join(name);
        if !path.is_dir() {
            return Err(DiscoverError::ProjectNotFound {
                name: name.to_string(),
                root: root.to_path_buf(),
            });
        }
        return Ok(vec![path]);
    }

    let mut projects = Vec::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return Ok(projects),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        if has_manifest(&path) {
            projects.push(path);
        }
    }

    projects.sort();
    Ok(projects)
}

fn has_manifest(dir: &Path) -> bool {
    MANIFEST_FILES.iter().any(|m| dir.join(m).is_file())
}
