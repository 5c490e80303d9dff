//! README content extraction: description prose, feature lists, and
//! architecture hints.

use once_cell::sync::Lazy;
use regex::Regex;

use super::metadata::truncate_chars;
use crate::types::ReadmeContent;

/// Lines inspected for the description
const DESCRIPTION_SCAN_LINES: usize = 50;
const DESCRIPTION_LINES: usize = 3;
const DESCRIPTION_MIN_LINE_CHARS: usize = 20;
const DESCRIPTION_MAX_CHARS: usize = 300;

const MAX_FEATURES: usize = 5;
const MAX_HINTS: usize = 3;
/// Lines scanned after an architecture keyword line
const HINT_WINDOW_LINES: usize = 9;

static FEATURES_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^##+\s*(features?|highlights?|特性|特点)").unwrap());

/// Keywords whose surrounding lines hint at architecture notes
const ARCHITECTURE_KEYWORDS: &[&str] = &["architecture", "how it works", "架构", "工作原理"];

/// Pull description, key features, and architecture hints out of raw README
/// text. Returns the empty default for empty input; never fails.
pub fn extract_readme_content(text: &str) -> ReadmeContent {
    let lines: Vec<&str> = text.lines().collect();

    ReadmeContent {
        description: extract_description(&lines),
        key_features: extract_key_features(&lines),
        architecture_hints: extract_architecture_hints(&lines),
    }
}

/// Join the first 3 substantial prose lines into a description.
///
/// A line qualifies when it is non-blank, does not open a heading, link, or
/// image, and is longer than 20 characters.
fn extract_description(lines: &[&str]) -> String {
    let mut picked = Vec::new();
    for line in lines.iter().take(DESCRIPTION_SCAN_LINES) {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with('[')
            || trimmed.starts_with('!')
        {
            continue;
        }
        if trimmed.chars().count() <= DESCRIPTION_MIN_LINE_CHARS {
            continue;
        }
        picked.push(trimmed);
        if picked.len() == DESCRIPTION_LINES {
            break;
        }
    }
    truncate_chars(&picked.join(" "), DESCRIPTION_MAX_CHARS)
}

/// List items directly under a Features/Highlights heading, capped at 5.
/// Collection stops at the next `##` heading.
fn extract_key_features(lines: &[&str]) -> Vec<String> {
    let mut features = Vec::new();

    let Some(start) = lines.iter().position(|l| FEATURES_HEADING.is_match(l)) else {
        return features;
    };

    for line in &lines[start + 1..] {
        if line.starts_with("##") {
            break;
        }
        let trimmed = line.trim();
        if trimmed.starts_with('-') {
            let item = trimmed.trim_start_matches(['-', ' ']).trim();
            if !item.is_empty() {
                features.push(item.to_string());
                if features.len() == MAX_FEATURES {
                    break;
                }
            }
        }
    }

    features
}

/// First 3 prose lines within a 9-line window after the first line that
/// mentions an architecture keyword. Only the first keyword match is used.
fn extract_architecture_hints(lines: &[&str]) -> Vec<String> {
    let mut hints = Vec::new();

    let keyword_at = lines.iter().position(|l| {
        let lower = l.to_lowercase();
        ARCHITECTURE_KEYWORDS.iter().any(|kw| lower.contains(kw))
    });
    let Some(start) = keyword_at else {
        return hints;
    };

    for line in lines[start + 1..].iter().take(HINT_WINDOW_LINES) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        hints.push(trimmed.to_string());
        if hints.len() == MAX_HINTS {
            break;
        }
    }

    hints
}
