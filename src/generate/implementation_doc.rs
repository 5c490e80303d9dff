//! <name>-实现细节.md — generated for complex projects only.

use super::DOC_FOOTER;
use crate::types::ProjectMetadata;

/// Tech-stack entries in the overview line
const MAX_STACK_OVERVIEW: usize = 20;
/// Dependencies listed as bullets
const MAX_STACK_BULLETS: usize = 15;

/// Output filename for the implementation document of one project.
pub fn implementation_doc_name(project_name: &str) -> String {
    format!("{}-实现细节.md", project_name)
}

pub fn generate_implementation_doc(metadata: &ProjectMetadata) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {} - 实现细节\n\n", metadata.name));

    output.push_str("## 技术栈\n\n");
    if metadata.tech_stack.is_empty() {
        output.push_str("待分析\n\n");
    } else {
        let overview: Vec<&str> = metadata
            .tech_stack
            .iter()
            .take(MAX_STACK_OVERVIEW)
            .map(|s| s.as_str())
            .collect();
        output.push_str(&format!("{}\n\n", overview.join(", ")));
    }

    output.push_str("## 关键依赖\n\n");
    if metadata.tech_stack.is_empty() {
        output.push_str("（待分析）\n");
    } else {
        for dep in metadata.tech_stack.iter().take(MAX_STACK_BULLETS) {
            output.push_str(&format!("- {}\n", dep));
        }
    }

    // Static placeholders: nothing in the pipeline extracts these.
    output.push_str("\n## 实现模式\n\n");
    output.push_str("（待分析使用的编码模式和设计模式）\n\n");

    output.push_str("## 构建和部署\n\n");
    output.push_str("（待分析构建和部署流程）\n\n");

    output.push_str("## 配置\n\n");
    output.push_str("（待分析配置机制和选项）\n");

    output.push_str(DOC_FOOTER);
    output
}
