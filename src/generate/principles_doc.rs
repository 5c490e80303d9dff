//! 核心技术原理.md — always generated.

use super::DOC_FOOTER;
use crate::types::{Principles, ProjectMetadata, ReadmeContent};

/// Fixed output filename for the core principles document.
pub const PRINCIPLES_DOC: &str = "核心技术原理.md";

/// Tech-stack entries mentioned in the overview line
const MAX_STACK_OVERVIEW: usize = 10;
/// Tech-stack entries in the tech-choice fallback line
const MAX_STACK_FALLBACK: usize = 5;

const NO_DESCRIPTION: &str = "项目描述待补充";
const NO_DECISIONS: &str = "（待深入分析核心设计决策）";
const NO_ABSTRACTIONS: &str = "（待识别关键抽象）";
const NO_PATTERNS: &str = "（待识别架构模式）";
const NO_STACK: &str = "待分析";

pub fn generate_principles_doc(
    metadata: &ProjectMetadata,
    principles: &Principles,
    readme: &ReadmeContent,
    updates: &[String],
) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {} - 核心技术原理\n\n", metadata.name));

    output.push_str("## 概述\n\n");
    // Prefer the richer multi-line README description over the metadata one.
    let description = if !readme.description.is_empty() {
        &readme.description
    } else if !metadata.description.is_empty() {
        &metadata.description
    } else {
        NO_DESCRIPTION
    };
    output.push_str(&format!("{}\n\n", description));

    output.push_str(&format!(
        "**项目类型**: {}\n",
        metadata.project_type.as_str().to_uppercase()
    ));
    output.push_str(&format!(
        "**技术栈**: {}\n\n",
        join_stack(&metadata.tech_stack, MAX_STACK_OVERVIEW)
    ));

    if !readme.key_features.is_empty() {
        output.push_str("## 主要特性\n\n");
        for feature in &readme.key_features {
            output.push_str(&format!("- {}\n", feature));
        }
        output.push('\n');
    }

    output.push_str("## 核心设计原则\n\n");
    if principles.design_decisions.is_empty() {
        output.push_str(NO_DECISIONS);
        output.push('\n');
    } else {
        for (i, decision) in principles.design_decisions.iter().enumerate() {
            output.push_str(&format!("{}. **{}**: 核心设计决策之一\n", i + 1, decision));
        }
    }

    output.push_str("\n## 关键抽象\n\n");
    if principles.key_abstractions.is_empty() {
        output.push_str(NO_ABSTRACTIONS);
        output.push('\n');
    } else {
        for abstraction in &principles.key_abstractions {
            output.push_str(&format!("- **{}**: 系统核心抽象\n", abstraction));
        }
    }

    output.push_str("\n## 架构模式\n\n");
    if principles.architectural_patterns.is_empty() {
        output.push_str(NO_PATTERNS);
        output.push('\n');
    } else {
        for pattern in &principles.architectural_patterns {
            output.push_str(&format!("- **{}**: 采用的架构模式\n", pattern));
        }
    }

    output.push_str("\n## 技术选型\n\n");
    if principles.tech_choices.is_empty() {
        output.push_str(&format!(
            "- 主要技术: {}\n",
            join_stack(&metadata.tech_stack, MAX_STACK_FALLBACK)
        ));
    } else {
        for choice in &principles.tech_choices {
            output.push_str(&format!("- {}\n", choice));
        }
    }

    if !updates.is_empty() {
        output.push_str("\n## 最新技术更新\n\n");
        for update in updates {
            output.push_str(&format!("- {}\n", update));
        }
    }

    output.push_str(DOC_FOOTER);
    output
}

fn join_stack(tech_stack: &[String], cap: usize) -> String {
    if tech_stack.is_empty() {
        NO_STACK.to_string()
    } else {
        tech_stack
            .iter()
            .take(cap)
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectType;

    fn meta(name: &str) -> ProjectMetadata {
        ProjectMetadata {
            name: name.to_string(),
            project_type: ProjectType::NodeJs,
            ..Default::default()
        }
    }

    #[test]
    fn test_placeholders_for_empty_principles() {
        let doc = generate_principles_doc(
            &meta("app"),
            &Principles::default(),
            &ReadmeContent::default(),
            &[],
        );
        assert!(doc.contains("# app - 核心技术原理"));
        assert!(doc.contains(NO_DESCRIPTION));
        assert!(doc.contains("**项目类型**: NODEJS"));
        assert!(doc.contains("**技术栈**: 待分析"));
        assert!(doc.contains(NO_DECISIONS));
        assert!(doc.contains(NO_PATTERNS));
        assert!(doc.contains("- 主要技术: 待分析"));
        assert!(!doc.contains("最新技术更新"));
        assert!(doc.contains("*由技术分析器自动生成"));
    }

    #[test]
    fn test_overview_lists_first_ten_stack_entries() {
        let mut metadata = meta("app");
        metadata.tech_stack = (0..12).map(|i| format!("dep{:02}", i)).collect();

        let doc = generate_principles_doc(
            &metadata,
            &Principles::default(),
            &ReadmeContent::default(),
            &[],
        );
        assert!(doc.contains("**技术栈**: dep00, dep01"));
        assert!(doc.contains("dep09"));
        assert!(!doc.contains("dep10"));
    }

    #[test]
    fn test_numbered_design_decisions() {
        let principles = Principles {
            design_decisions: vec![
                "local-first design".into(),
                "personal/single-user design".into(),
            ],
            ..Default::default()
        };
        let doc = generate_principles_doc(
            &meta("app"),
            &principles,
            &ReadmeContent::default(),
            &[],
        );
        assert!(doc.contains("1. **local-first design**: 核心设计决策之一"));
        assert!(doc.contains("2. **personal/single-user design**: 核心设计决策之一"));
    }

    #[test]
    fn test_tech_choice_fallback_lists_first_five() {
        let mut metadata = meta("app");
        metadata.tech_stack = (0..8).map(|i| format!("lib{i}")).collect();

        let doc = generate_principles_doc(
            &metadata,
            &Principles::default(),
            &ReadmeContent::default(),
            &[],
        );
        assert!(doc.contains("- 主要技术: lib0, lib1, lib2, lib3, lib4\n"));
        assert!(!doc.contains("lib5\n"));
    }

    #[test]
    fn test_tech_choices_suppress_fallback() {
        let mut metadata = meta("app");
        metadata.tech_stack = vec!["typescript".to_string()];
        let principles = Principles {
            tech_choices: vec!["TypeScript for static typing".into()],
            ..Default::default()
        };

        let doc = generate_principles_doc(
            &metadata,
            &principles,
            &ReadmeContent::default(),
            &[],
        );
        assert!(doc.contains("- TypeScript for static typing"));
        assert!(!doc.contains("主要技术"));
    }

    #[test]
    fn test_updates_section_when_present() {
        let doc = generate_principles_doc(
            &meta("app"),
            &Principles::default(),
            &ReadmeContent::default(),
            &["Added gateway reconnect logic".to_string()],
        );
        assert!(doc.contains("## 最新技术更新"));
        assert!(doc.contains("- Added gateway reconnect logic"));
    }

    #[test]
    fn test_readme_description_preferred() {
        let readme = ReadmeContent {
            description: "Longer joined readme prose.".to_string(),
            ..Default::default()
        };
        let mut metadata = meta("app");
        metadata.description = "short readme line".to_string();

        let doc = generate_principles_doc(&metadata, &Principles::default(), &readme, &[]);
        assert!(doc.contains("Longer joined readme prose."));
        assert!(!doc.contains("short readme line"));
    }
}
