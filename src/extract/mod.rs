//! Heuristic extractors.
//!
//! Each extractor is an independent best-effort pass over one project:
//! missing files and malformed content degrade to empty records, never to
//! errors. Outputs are candidates derived from pattern matching, not
//! verified facts.

mod architecture;
mod changelog;
mod complexity;
mod metadata;
mod principles;
mod readme;

pub use architecture::extract_architecture_patterns;
pub use changelog::extract_changelog_updates;
pub use complexity::{assess_complexity, classify};
pub use metadata::extract_metadata;
pub use principles::extract_principles;
pub use readme::extract_readme_content;
