//! Core functionality for assessor
//!
//! This crate contains the assignment specification parser, document
//! metrics estimation, and grading prompt preparation used by the
//! assessor tool.

pub mod analysis;
pub mod config;
pub mod grading;
pub mod parser;
pub mod prompt;

pub use analysis::{
    AnalysisRequest, AnalysisResponse, DocumentAnalysisMetrics, DocumentAnalyzer, analyze_document,
    estimate_metrics,
};
pub use config::AssessorConfig;
pub use grading::{GradingContext, GradingPrompt, GradingTier, prepare_prompt};
pub use parser::{AssignmentSpecParser, ParsedAssignmentSpec, parse_assignment_specification};
pub use prompt::{enhance_prompt_with_assignment_spec, format_analysis_for_prompt};
