//! Document analysis request, response and metrics types
//!
//! The JSON shape (camelCase) matches what the remote analysis service
//! accepts and returns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Snapshot of one submission's text statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysisMetrics {
    // Text statistics
    pub word_count: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
    pub average_words_per_sentence: f64,
    pub average_sentences_per_paragraph: f64,

    // Readability
    pub flesch_kincaid_grade_level: f64,
    pub flesch_reading_ease: f64,
    pub gunning_fog_index: f64,

    // Academic
    pub academic_vocabulary_percentage: f64,
    pub complex_words_percentage: f64,
    pub passive_voice_percentage: f64,

    // Citations
    pub citation_count: usize,
    pub in_text_citations: usize,
    pub reference_list_entries: usize,
    /// 0-100
    pub citation_format_compliance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_style_detected: Option<String>,

    // Structure
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub heading_count: usize,
    /// 0-100
    pub structural_coherence: f64,

    // Language quality
    /// 0-100
    pub grammar_score: f64,
    pub spelling_errors: usize,
    pub vocabulary_diversity: f64,
    pub sentence_variety: f64,
}

/// Citation styles the remote analyzer can check against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CitationStyle {
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "MLA")]
    Mla,
    Chicago,
    Harvard,
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apa => write!(f, "APA"),
            Self::Mla => write!(f, "MLA"),
            Self::Chicago => write!(f, "Chicago"),
            Self::Harvard => write!(f, "Harvard"),
        }
    }
}

impl FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apa" => Ok(Self::Apa),
            "mla" => Ok(Self::Mla),
            "chicago" => Ok(Self::Chicago),
            "harvard" => Ok(Self::Harvard),
            other => Err(format!("Unknown citation style: {}", other)),
        }
    }
}

/// Request sent to a document analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_citation_style: Option<CitationStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_word_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_word_count: Option<u32>,
}

impl AnalysisRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            expected_citation_style: None,
            min_word_count: None,
            max_word_count: None,
        }
    }

    pub fn with_citation_style(mut self, style: CitationStyle) -> Self {
        self.expected_citation_style = Some(style);
        self
    }

    pub fn with_word_limits(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_word_count = min;
        self.max_word_count = max;
        self
    }
}

/// Analyzer output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub metrics: DocumentAnalysisMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
