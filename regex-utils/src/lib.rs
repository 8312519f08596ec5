//! Regex utilities for the assessor
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Captured digit runs
pub mod number {
    /// Parse an ASCII digit run, saturating at `u32::MAX` instead of failing
    pub fn saturating_u32(digits: &str) -> Option<u32> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(digits.parse().unwrap_or(u32::MAX))
    }
}

/// Deadline phrases such as "Due: March 15, 2024"
pub mod deadline {
    use super::*;

    pub static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\b(?:due|deadline|submit by)[\s:]*([^\n]+)")
            .expect("Invalid regex pattern")
    });

    /// Extract the raw deadline text following the first deadline keyword
    pub fn extract(text: &str) -> Option<String> {
        let caps = PATTERN.captures(text)?;
        let value = caps.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Word count constraints such as "1500-2000 words" or "at least 500 words"
pub mod word_count {
    use super::*;

    pub static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\b(\d+)[-– \t]*(\d+)?[ \t]*words?\b")
            .expect("Invalid regex pattern")
    });

    /// Extract `(min, max)` from the first word count phrase
    pub fn extract(text: &str) -> Option<(u32, Option<u32>)> {
        let caps = PATTERN.captures(text)?;
        let min = number::saturating_u32(caps.get(1)?.as_str())?;
        let max = caps.get(2).and_then(|m| number::saturating_u32(m.as_str()));
        Some((min, max))
    }
}

/// List item markers: `-`, `•`, `*` bullets and `1.` numbering
pub mod list {
    use super::*;

    pub static MARKER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*(?:[-•*]|\d+\.)\s*").expect("Invalid regex pattern")
    });

    /// Return the text after a leading list marker, or `None` if the line has none
    pub fn strip_marker(line: &str) -> Option<&str> {
        MARKER.find(line).map(|m| &line[m.end()..])
    }
}

/// Embedded rubric detection
pub mod rubric {
    use super::*;

    pub static HEADER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)(?:rubric|grading[ \t]*criteria|assessment[ \t]*criteria)[: \t]*$")
            .expect("Invalid regex pattern")
    });

    /// `Clarity (20 points)`, optionally preceded by a bullet or number
    pub static INLINE_CRITERION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^\s*(?:(?:[-•*]|\d+\.)\s*)?([^(\n]+?)\s*\((\d+)\s*(?:points?|pts?)\)")
            .expect("Invalid regex pattern")
    });

    /// `Clarity | 20` or a markdown table row `| Clarity | 20 |`
    pub static TABLE_ROW: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"([^|\n]+?)\s*\|[ \t]*(\d+)").expect("Invalid regex pattern")
    });

    /// Check whether a line introduces a rubric
    pub fn is_header(line: &str) -> bool {
        HEADER.is_match(line.trim_end())
    }
}

/// Grading scale descriptors
pub mod grading_scale {
    use super::*;

    pub static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
        vec![
            Regex::new(r"(?i)grading\s*scale[:\s]*([^\n]+)").expect("Invalid regex pattern"),
            Regex::new(r"(?i)\bA\+?[:\s=]*\s*(\d+)[-–](\d+)%").expect("Invalid regex pattern"),
            Regex::new(r"(?i)\bexcellent[:\s=]*\s*(\d+)[-–](\d+)").expect("Invalid regex pattern"),
        ]
    });

    /// Return the first grading scale phrase, verbatim
    pub fn extract(text: &str) -> Option<String> {
        PATTERNS
            .iter()
            .find_map(|re| re.find(text))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// Document structure heuristics
pub mod document {
    use super::*;

    /// Parenthesised text containing a four digit year, e.g. `(Smith, 2020)`
    pub static CITATION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\([^)]*\d{4}[^)]*\)").expect("Invalid regex pattern")
    });

    pub static HEADING: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^#{1,6}\s").expect("Invalid regex pattern")
    });

    pub static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\n\s*\n").expect("Invalid regex pattern")
    });

    pub static SENTENCE_END: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[.!?]+").expect("Invalid regex pattern")
    });

    pub fn count_citations(text: &str) -> usize {
        CITATION.find_iter(text).count()
    }

    pub fn count_headings(text: &str) -> usize {
        HEADING.find_iter(text).count()
    }

    /// Non-empty segments between sentence terminators
    pub fn count_sentences(text: &str) -> usize {
        SENTENCE_END.split(text).filter(|s| !s.trim().is_empty()).count()
    }

    /// Non-empty segments between blank-line runs
    pub fn count_paragraphs(text: &str) -> usize {
        PARAGRAPH_BREAK.split(text).filter(|p| !p.trim().is_empty()).count()
    }
}
