//! Complexity classification from file count, dependency count, and
//! structural flags.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::types::{Complexity, ComplexitySignals, ProjectMetadata};

/// Directory names skipped anywhere in the path when counting files
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "vendor",
    "dist",
    "build",
    ".next",
    "__pycache__",
];

const SIMPLE_MAX_FILES: usize = 100;
const SIMPLE_MAX_DEPS: usize = 20;
const MEDIUM_MAX_FILES: usize = 500;
const MEDIUM_MAX_DEPS: usize = 50;

/// Number of `src/` entries above which a project counts as multi-module
const MULTI_MODULE_SRC_ENTRIES: usize = 5;

/// Classify a project into a complexity tier.
///
/// Pure function of the directory contents and the metadata; also returns
/// the raw signals the decision was made from. The `has_multiple_modules`
/// signal is computed but does not influence the tier.
pub fn assess_complexity(
    path: &Path,
    metadata: &ProjectMetadata,
) -> (Complexity, ComplexitySignals) {
    let signals = ComplexitySignals {
        file_count: count_files(path),
        dep_count: metadata.tech_stack.len(),
        has_extensions: path.join("extensions").is_dir() || path.join("plugins").is_dir(),
        has_multiple_modules: has_multiple_modules(path),
    };

    (classify(&signals), signals)
}

/// The tier decision, separated out so monotonicity is easy to test.
pub fn classify(signals: &ComplexitySignals) -> Complexity {
    if signals.file_count < SIMPLE_MAX_FILES
        && signals.dep_count < SIMPLE_MAX_DEPS
        && !signals.has_extensions
    {
        Complexity::Simple
    } else if signals.file_count < MEDIUM_MAX_FILES && signals.dep_count < MEDIUM_MAX_DEPS {
        Complexity::Medium
    } else {
        Complexity::Complex
    }
}

/// Recursive file count, skipping build and VCS directories.
fn count_files(path: &Path) -> usize {
    WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .map(|name| SKIP_DIRS.contains(&name))
                    .unwrap_or(false))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

fn has_multiple_modules(path: &Path) -> bool {
    let src = path.join("src");
    if !src.is_dir() {
        return false;
    }
    fs::read_dir(&src)
        .map(|entries| entries.flatten().count() > MULTI_MODULE_SRC_ENTRIES)
        .unwrap_or(false)
}
