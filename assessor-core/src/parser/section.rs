//! Header-introduced section extraction

use regex::{Regex, RegexBuilder};
use regex_utils::list;
use std::collections::HashSet;
use tracing::warn;

use crate::parser::model::SectionKind;

/// Extracts itemised content that follows headers such as "Learning Objectives"
#[derive(Debug)]
pub struct SectionExtractor {
    headers: Vec<Regex>,
}

impl SectionExtractor {
    /// Create an extractor for the given header phrases
    pub fn new(header_patterns: &[&str]) -> Self {
        Self { headers: Self::compile_header_patterns(header_patterns) }
    }

    /// Create an extractor for a known section kind
    pub fn for_kind(kind: SectionKind) -> Self {
        Self::new(kind.header_patterns())
    }

    /// Extract items from every matching section, deduplicated in first-seen order
    pub fn extract(&self, content: &str) -> Vec<String> {
        let lines: Vec<&str> = content.lines().collect();
        let mut items = Vec::new();
        let mut seen = HashSet::new();

        for header in &self.headers {
            for (idx, line) in lines.iter().enumerate() {
                if !header.is_match(line) {
                    continue;
                }
                for item in split_items(section_block(&lines, idx + 1)) {
                    if seen.insert(item.clone()) {
                        items.push(item);
                    }
                }
            }
        }

        items
    }

    /// Compile header phrases into whole-line matchers
    fn compile_header_patterns(patterns: &[&str]) -> Vec<Regex> {
        patterns
            .iter()
            .filter_map(|pattern| {
                let source = format!(r"^\s*(?:#*\s*)?(?:{})[:\s]*$", pattern);
                match RegexBuilder::new(&source).case_insensitive(true).build() {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!("Skipping invalid section header pattern '{}': {}", pattern, e);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Extract items from all sections introduced by any of `header_patterns`
pub fn extract_section(content: &str, header_patterns: &[&str]) -> Vec<String> {
    SectionExtractor::new(header_patterns).extract(content)
}

/// Lines after a header: leading blank lines are skipped, then the block runs
/// until the next blank line or header line.
pub(crate) fn section_block<'a, 'b>(lines: &'b [&'a str], start: usize) -> &'b [&'a str] {
    let tail = lines.get(start..).unwrap_or(&[]);
    let first = tail.iter().position(|l| !l.trim().is_empty()).unwrap_or(tail.len());
    let body = &tail[first..];
    let len = body
        .iter()
        .position(|l| l.trim().is_empty() || l.trim_start().starts_with('#'))
        .unwrap_or(body.len());
    &body[..len]
}

/// Split a block into items on bullet or number markers; unmarked lines
/// continue the current item.
fn split_items(block: &[&str]) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in block {
        match list::strip_marker(line) {
            Some(rest) => {
                if !current.is_empty() {
                    items.push(std::mem::take(&mut current));
                }
                current.push_str(rest.trim());
            }
            None => {
                let text = line.trim();
                if !current.is_empty() && !text.is_empty() {
                    current.push(' ');
                }
                current.push_str(text);
            }
        }
    }
    if !current.is_empty() {
        items.push(current);
    }

    items
}
