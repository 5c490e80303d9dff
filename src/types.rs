//! Per-project records produced by the extraction pipeline.
//!
//! Every record here lives for the duration of one project's processing:
//! built once by an extractor, read by the document generators, then dropped.
//! Nothing is cached across runs.

use serde::Serialize;
use std::path::PathBuf;

/// Project type inferred from manifest presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// package.json present
    NodeJs,
    /// requirements.txt present (and no package.json)
    Python,
    /// no recognized type manifest
    #[default]
    Unknown,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::NodeJs => "nodejs",
            ProjectType::Python => "python",
            ProjectType::Unknown => "unknown",
        }
    }
}

/// Flat per-project record derived from manifest and README inspection.
///
/// Built once by [`crate::extract::extract_metadata`] and immutable afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectMetadata {
    /// Directory name of the project
    pub name: String,
    /// Absolute or root-relative path to the project directory
    pub path: PathBuf,
    pub project_type: ProjectType,
    /// First meaningful README line, capped at 200 chars
    pub description: String,
    /// Dependency names in manifest order; duplicates are not removed
    pub tech_stack: Vec<String>,
    pub has_readme: bool,
    pub has_docs: bool,
}

/// Best-effort content pulled out of a README.
///
/// The empty default stands in for a missing or unreadable README.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReadmeContent {
    /// Up to 3 prose lines joined together, capped at 300 chars
    pub description: String,
    /// List items under a Features/Highlights heading, at most 5
    pub key_features: Vec<String>,
    /// Prose lines near an architecture keyword, at most 3
    pub architecture_hints: Vec<String>,
}

/// Candidate design principles assembled from keyword matches.
///
/// These are heuristic candidates, not verified facts; generators render
/// them as-is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Principles {
    pub design_decisions: Vec<String>,
    pub key_abstractions: Vec<String>,
    pub architectural_patterns: Vec<String>,
    pub tech_choices: Vec<String>,
}

/// Coarse complexity tier driving which documents get generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

/// Raw inputs the complexity decision was made from.
///
/// `has_multiple_modules` is computed but does not participate in the
/// tier decision; it is carried here so the signal stays observable.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComplexitySignals {
    pub file_count: usize,
    pub dep_count: usize,
    pub has_extensions: bool,
    pub has_multiple_modules: bool,
}
