//! projdoc scans a directory of software projects and generates heuristic
//! technical documents for each one: core principles, architecture, and
//! implementation detail, depending on the project's complexity tier.
//!
//! The pipeline per project: metadata extraction → complexity assessment →
//! content extraction → document generation. Every extractor is best-effort;
//! missing or malformed input degrades to empty records rather than errors.

pub mod cli;
pub mod discover;
pub mod error;
pub mod extract;
pub mod generate;
pub mod types;
