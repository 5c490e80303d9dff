use std::path::PathBuf;
use thiserror::Error;

/// Fatal, user-reported failures from project discovery.
///
/// Everything else in the pipeline recovers silently: a manifest that fails
/// to parse or a README that fails to read is treated as absent.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("project directory not found: {}", .0.display())]
    ProjectDirNotFound(PathBuf),

    #[error("project '{}' not found under {}", .name, .root.display())]
    ProjectNotFound { name: String, root: PathBuf },
}
