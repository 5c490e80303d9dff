//! Core principle candidates from description keywords, the agents file,
//! and the tech stack.

use std::fs;
use std::path::Path;

use super::architecture::extract_architecture_patterns;
use crate::types::{Principles, ProjectMetadata};

/// Agent-definition file scanned for abstraction keywords
const AGENTS_FILE: &str = "AGENTS.md";

pub const TAG_LOCAL_FIRST: &str = "local-first design";
pub const TAG_PERSONAL: &str = "personal/single-user design";
pub const TAG_GATEWAY_PLANE: &str = "gateway control-plane architecture";
pub const TAG_WORKSPACE_ABSTRACTION: &str = "workspace as the agent working context";
pub const TAG_SKILL_ABSTRACTION: &str = "skills as pluggable capabilities";
pub const TAG_AGENT_PROTOCOL: &str = "Agent Client Protocol (standardized agent communication)";
pub const TAG_TYPESCRIPT: &str = "TypeScript for static typing";

/// Dependency marker for the Agent Client Protocol tech choice
const AGENT_PROTOCOL_DEP: &str = "@agentclientprotocol";

/// Description keywords (with CJK equivalents) mapped to design decisions
const DECISION_KEYWORDS: &[(&[&str], &str)] = &[
    (&["local", "本地"], TAG_LOCAL_FIRST),
    (&["personal", "个人"], TAG_PERSONAL),
    (&["gateway", "网关"], TAG_GATEWAY_PLANE),
];

/// Assemble candidate principles for a project. Never fails; missing
/// sources simply contribute nothing.
pub fn extract_principles(path: &Path, metadata: &ProjectMetadata) -> Principles {
    let mut principles = Principles::default();

    let description = metadata.description.to_lowercase();
    for (keywords, tag) in DECISION_KEYWORDS {
        if keywords.iter().any(|kw| description.contains(kw)) {
            principles.design_decisions.push(tag.to_string());
        }
    }

    if let Ok(agents) = fs::read_to_string(path.join(AGENTS_FILE)) {
        let agents = agents.to_lowercase();
        if agents.contains("workspace") {
            principles
                .key_abstractions
                .push(TAG_WORKSPACE_ABSTRACTION.to_string());
        }
        if agents.contains("skill") {
            principles
                .key_abstractions
                .push(TAG_SKILL_ABSTRACTION.to_string());
        }
    }

    principles.architectural_patterns = extract_architecture_patterns(path, metadata);

    let stack_has = |needle: &str| {
        metadata
            .tech_stack
            .iter()
            .any(|dep| dep.to_lowercase().contains(needle))
    };
    if stack_has(AGENT_PROTOCOL_DEP) {
        principles.tech_choices.push(TAG_AGENT_PROTOCOL.to_string());
    }
    if stack_has("typescript") {
        principles.tech_choices.push(TAG_TYPESCRIPT.to_string());
    }

    principles
}
