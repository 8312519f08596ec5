//! Assignment specification parsing engine
//!
//! This module turns a free-form assignment brief into structured data:
//! learning objectives, requirements, deliverables, context, an embedded
//! point rubric, a deadline and a word count constraint.

pub mod metadata;
pub mod model;
pub mod rubric;
pub mod section;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

pub use model::*;
pub use rubric::{RubricStrategy, extract_embedded_rubric};
pub use section::{SectionExtractor, extract_section};

/// Main parser that orchestrates assignment specification extraction
#[derive(Debug)]
pub struct AssignmentSpecParser {
    learning_objectives: SectionExtractor,
    requirements: SectionExtractor,
    deliverables: SectionExtractor,
    context: SectionExtractor,
}

impl AssignmentSpecParser {
    /// Create a new assignment specification parser
    pub fn new() -> Self {
        Self {
            learning_objectives: SectionExtractor::for_kind(SectionKind::LearningObjectives),
            requirements: SectionExtractor::for_kind(SectionKind::Requirements),
            deliverables: SectionExtractor::for_kind(SectionKind::Deliverables),
            context: SectionExtractor::for_kind(SectionKind::Context),
        }
    }

    /// Parse assignment text into a structured record
    pub fn parse(&self, content: &str) -> ParsedAssignmentSpec {
        let spec = ParsedAssignmentSpec {
            title: metadata::extract_title(content),
            learning_objectives: self.learning_objectives.extract(content),
            requirements: self.requirements.extract(content),
            deliverables: self.deliverables.extract(content),
            context_info: self.context.extract(content),
            embedded_rubric: extract_embedded_rubric(content),
            deadline: metadata::extract_deadline(content),
            word_count: metadata::extract_word_count(content),
        };

        debug!(
            "Parsed assignment spec: {} objectives, {} requirements, {} deliverables, rubric: {}",
            spec.learning_objectives.len(),
            spec.requirements.len(),
            spec.deliverables.len(),
            spec.embedded_rubric.is_some()
        );

        spec
    }

    /// Read a text or markdown file and parse it
    pub async fn parse_file(&self, path: &Path) -> Result<ParsedAssignmentSpec> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read assignment file {}", path.display()))?;
        Ok(self.parse(&content))
    }
}

impl Default for AssignmentSpecParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse assignment text with a default parser
pub fn parse_assignment_specification(content: &str) -> ParsedAssignmentSpec {
    AssignmentSpecParser::new().parse(content)
}
