//! 架构设计.md — generated for medium and complex projects.

use super::DOC_FOOTER;
use crate::types::{Principles, ProjectMetadata};

/// Fixed output filename for the architecture document.
pub const ARCHITECTURE_DOC: &str = "架构设计.md";

/// Top-level directories reported as components when present
const COMPONENT_DIRS: &[(&str, &str)] = &[
    ("src", "核心源代码"),
    ("extensions", "扩展/插件系统"),
    ("gateway", "网关组件"),
    ("docs", "文档和架构说明"),
];

pub fn generate_architecture_doc(metadata: &ProjectMetadata, principles: &Principles) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {} - 架构设计\n\n", metadata.name));

    output.push_str("## 系统架构\n\n");
    output.push_str("（待深入分析系统整体架构）\n\n");

    output.push_str("## 组件概述\n\n");
    for (dir, label) in COMPONENT_DIRS {
        if metadata.path.join(dir).is_dir() {
            output.push_str(&format!("- **{}/**: {}\n", dir, label));
        }
    }
    output.push('\n');

    // No extractor produces data-flow or communication information; these
    // sections stay as placeholders.
    output.push_str("## 数据流\n\n");
    output.push_str("（待分析数据如何在系统中流动）\n\n");

    output.push_str("## 扩展点\n\n");
    let has_plugin_pattern = principles
        .architectural_patterns
        .iter()
        .any(|p| p.contains("plugin") || p.contains("extension"));
    if has_plugin_pattern {
        output.push_str("系统支持通过扩展/插件机制进行扩展。\n");
    } else {
        output.push_str("（待分析扩展机制）\n");
    }

    output.push_str("\n## 通信模式\n\n");
    output.push_str("（待分析组件间通信方式）\n");

    output.push_str(DOC_FOOTER);
    output
}
