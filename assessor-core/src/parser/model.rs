//! Semantic model for parsed assignment specifications

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured view of one assignment brief
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAssignmentSpec {
    /// First non-empty line of the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub learning_objectives: Vec<String>,

    pub requirements: Vec<String>,

    pub deliverables: Vec<String>,

    /// Background, context, introduction and overview items
    pub context_info: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_rubric: Option<EmbeddedRubric>,

    /// Raw deadline text, not interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<WordCountRange>,
}

impl ParsedAssignmentSpec {
    /// Check if nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.learning_objectives.is_empty()
            && self.requirements.is_empty()
            && self.deliverables.is_empty()
            && self.context_info.is_empty()
            && self.embedded_rubric.is_none()
            && self.deadline.is_none()
            && self.word_count.is_none()
    }

    /// Best-effort interpretation of the raw deadline as a calendar date
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline.as_deref().and_then(parse_deadline_date)
    }
}

const DEADLINE_FORMATS: &[&str] = &["%B %d, %Y", "%B %d %Y", "%d %B %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

fn parse_deadline_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim().trim_end_matches(['.', ',']);
    DEADLINE_FORMATS.iter().find_map(|fmt| {
        // Deadlines often trail off into a time, so also try the leading part.
        NaiveDate::parse_and_remainder(cleaned, fmt)
            .ok()
            .map(|(date, _rest)| date)
    })
}

/// Point-weighted grading scheme written into the assignment document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedRubric {
    /// Criteria in document order
    pub criteria: Vec<EmbeddedCriterion>,

    /// Sum of the criteria's points, wide enough that it cannot overflow
    pub total_points: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grading_scale: Option<String>,
}

impl EmbeddedRubric {
    /// Build a rubric, summing the criteria's points
    pub fn new(criteria: Vec<EmbeddedCriterion>, grading_scale: Option<String>) -> Self {
        let total_points = criteria.iter().map(|c| u64::from(c.points)).sum();
        Self { criteria, total_points, grading_scale }
    }
}

/// A single scored criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedCriterion {
    pub name: String,
    pub description: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<String>,
}

impl EmbeddedCriterion {
    /// Create a criterion whose description is its name
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        let name = name.into();
        Self { description: name.clone(), name, points, levels: Vec::new() }
    }
}

/// Word count constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl fmt::Display for WordCountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{}-{} words", min, max),
            (Some(min), None) => write!(f, "at least {} words", min),
            (None, Some(max)) => write!(f, "at most {} words", max),
            (None, None) => write!(f, "unspecified"),
        }
    }
}

/// Kinds of header-introduced sections an assignment brief may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    LearningObjectives,
    Requirements,
    Deliverables,
    Context,
}

impl SectionKind {
    /// Case-insensitive header phrases, tried in order
    pub fn header_patterns(&self) -> &'static [&'static str] {
        match self {
            Self::LearningObjectives => {
                &["learning objectives?", "course objectives?", "goals?", "aims?"]
            }
            Self::Requirements => &[
                "requirements?",
                "specifications?",
                "criteria",
                "what you need to",
                "you must",
                "students? should",
            ],
            Self::Deliverables => {
                &["deliverables?", "submissions?", "what to submit", "submit the following"]
            }
            Self::Context => &["background", "context", "introduction", "overview"],
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LearningObjectives => write!(f, "Learning Objectives"),
            Self::Requirements => write!(f, "Requirements"),
            Self::Deliverables => write!(f, "Deliverables"),
            Self::Context => write!(f, "Context"),
        }
    }
}
