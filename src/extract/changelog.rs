//! Latest-update bullets from the first yielding version section of a
//! changelog.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

const CHANGELOG_FILE: &str = "CHANGELOG.md";
/// Lines of the changelog inspected at most
const SCAN_LINES: usize = 100;
/// Lines read after a version heading
const SECTION_WINDOW_LINES: usize = 20;
const MAX_UPDATES: usize = 5;
/// Bullets shorter than this are noise (bare links, "misc fixes" stubs)
const MIN_ITEM_CHARS: usize = 10;

static VERSION_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##+\s*v?\d+").unwrap());

/// Collect up to 5 bullet items from the changelog's version sections.
///
/// Each version heading opens a 20-line window; every `-`/`*` bullet in the
/// window counts, headings included, and the scan stops at the first window
/// that yields anything. A version section with no qualifying bullets falls
/// through to the next one. Missing or unreadable changelog yields an empty
/// list.
pub fn extract_changelog_updates(path: &Path) -> Vec<String> {
    let Ok(text) = fs::read_to_string(path.join(CHANGELOG_FILE)) else {
        return Vec::new();
    };

    let lines: Vec<&str> = text.lines().take(SCAN_LINES).collect();

    for (i, line) in lines.iter().enumerate() {
        if !VERSION_HEADING.is_match(line) {
            continue;
        }

        let mut updates = Vec::new();
        for window_line in lines[i + 1..].iter().take(SECTION_WINDOW_LINES) {
            let trimmed = window_line.trim();
            if trimmed.starts_with('-') || trimmed.starts_with('*') {
                let item = trimmed.trim_start_matches(['-', '*', ' ']).trim();
                if item.chars().count() > MIN_ITEM_CHARS {
                    updates.push(item.to_string());
                    if updates.len() == MAX_UPDATES {
                        break;
                    }
                }
            }
        }

        if !updates.is_empty() {
            return updates;
        }
    }

    Vec::new()
}
