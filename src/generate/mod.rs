//! Markdown document generators.
//!
//! Which documents a project gets depends on its complexity tier:
//! principles always, architecture from medium up, implementation only for
//! complex projects. Existing files are overwritten, never merged.

mod architecture_doc;
mod implementation_doc;
mod principles_doc;

pub use architecture_doc::{generate_architecture_doc, ARCHITECTURE_DOC};
pub use implementation_doc::{generate_implementation_doc, implementation_doc_name};
pub use principles_doc::{generate_principles_doc, PRINCIPLES_DOC};

/// Closing line shared by every generated document.
pub(crate) const DOC_FOOTER: &str =
    "\n---\n*由技术分析器自动生成。建议进一步审查源代码和文档以完善分析。*\n";

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::{Complexity, Principles, ProjectMetadata, ReadmeContent};

/// Render and write every document the project's tier calls for, under
/// `<output_dir>/<project-name>/`. Returns the written filenames.
pub fn write_project_docs(
    output_dir: &Path,
    metadata: &ProjectMetadata,
    principles: &Principles,
    readme: &ReadmeContent,
    updates: &[String],
    complexity: Complexity,
) -> Result<Vec<String>> {
    let project_out = output_dir.join(&metadata.name);
    fs::create_dir_all(&project_out)
        .with_context(|| format!("failed to create output directory {}", project_out.display()))?;

    let mut written = Vec::new();

    let principles_md = generate_principles_doc(metadata, principles, readme, updates);
    write_doc(&project_out, PRINCIPLES_DOC, &principles_md)?;
    written.push(PRINCIPLES_DOC.to_string());

    if complexity >= Complexity::Medium {
        let architecture_md = generate_architecture_doc(metadata, principles);
        write_doc(&project_out, ARCHITECTURE_DOC, &architecture_md)?;
        written.push(ARCHITECTURE_DOC.to_string());
    }

    if complexity == Complexity::Complex {
        let name = implementation_doc_name(&metadata.name);
        let implementation_md = generate_implementation_doc(metadata);
        write_doc(&project_out, &name, &implementation_md)?;
        written.push(name);
    }

    Ok(written)
}

fn write_doc(dir: &Path, filename: &str, content: &str) -> Result<()> {
    let path = dir.join(filename);
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn meta(name: &str, path: &Path) -> ProjectMetadata {
        ProjectMetadata {
            name: name.to_string(),
            path: path.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_writes_principles_only() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let metadata = meta("app", project.path());

        let written = write_project_docs(
            out.path(),
            &metadata,
            &Principles::default(),
            &ReadmeContent::default(),
            &[],
            Complexity::Simple,
        )
        .unwrap();

        assert_eq!(written, vec![PRINCIPLES_DOC]);
        assert!(out.path().join("app").join(PRINCIPLES_DOC).is_file());
        assert!(!out.path().join("app").join(ARCHITECTURE_DOC).exists());
    }

    #[test]
    fn test_medium_adds_architecture() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let metadata = meta("app", project.path());

        let written = write_project_docs(
            out.path(),
            &metadata,
            &Principles::default(),
            &ReadmeContent::default(),
            &[],
            Complexity::Medium,
        )
        .unwrap();

        assert_eq!(written.len(), 2);
        assert!(out.path().join("app").join(ARCHITECTURE_DOC).is_file());
        assert!(!out.path().join("app").join("app-实现细节.md").exists());
    }

    #[test]
    fn test_complex_writes_all_three() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let metadata = meta("app", project.path());

        let written = write_project_docs(
            out.path(),
            &metadata,
            &Principles::default(),
            &ReadmeContent::default(),
            &[],
            Complexity::Complex,
        )
        .unwrap();

        assert_eq!(written.len(), 3);
        assert!(out.path().join("app").join("app-实现细节.md").is_file());
    }

    #[test]
    fn test_existing_file_overwritten() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let metadata = meta("app", project.path());
        let target = out.path().join("app");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join(PRINCIPLES_DOC), "stale content").unwrap();

        write_project_docs(
            out.path(),
            &metadata,
            &Principles::default(),
            &ReadmeContent::default(),
            &[],
            Complexity::Simple,
        )
        .unwrap();

        let content = fs::read_to_string(target.join(PRINCIPLES_DOC)).unwrap();
        assert!(!content.contains("stale content"));
        assert!(content.contains("核心技术原理"));
    }
}
