//! Single-pass metadata detectors: deadline, word count and title

use regex_utils::{deadline, word_count};

use crate::parser::model::WordCountRange;

/// First deadline phrase in the document, trimmed
pub fn extract_deadline(content: &str) -> Option<String> {
    deadline::extract(content)
}

/// First word count constraint in the document
pub fn extract_word_count(content: &str) -> Option<WordCountRange> {
    word_count::extract(content).map(|(min, max)| WordCountRange { min: Some(min), max })
}

/// First non-empty line, with any leading markdown header marker removed
pub fn extract_title(content: &str) -> Option<String> {
    content
        .lines()
        .map(|line| line.trim().trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
