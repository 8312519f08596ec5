//! Tier-aware grading prompt preparation
//!
//! Builds the system and user prompts handed to the model invocation layer.
//! Sending them is not this crate's concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::analysis::{DocumentAnalysisMetrics, estimate_metrics};
use crate::parser::ParsedAssignmentSpec;
use crate::prompt::{enhance_prompt_with_assignment_spec, format_analysis_for_prompt};

const BASIC_SYSTEM_PROMPT: &str = "You are an expert academic grader. Provide detailed, constructive feedback and accurate scoring based on the provided rubric.";

const ENHANCED_SYSTEM_PROMPT: &str = "You are an expert academic grader with access to document analysis metrics. Use both the content and the metrics to provide thorough, evidence-based grading. Pay special attention to writing quality, readability, structure, and academic rigor as indicated by the analysis.";

const ASSIGNMENT_AWARE_SYSTEM_PROMPT: &str = "You are an expert academic grader with full context of the assignment requirements. Evaluate how well the submission meets the specific learning objectives and assignment criteria.";

const NO_SUBMISSION_TEXT: &str = "No text extracted";

/// Grading workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingTier {
    /// Rubric and submission only
    #[default]
    Basic,
    /// Adds document analysis metrics
    Enhanced,
    /// Adds the parsed assignment specification
    AssignmentAware,
}

impl fmt::Display for GradingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Enhanced => write!(f, "enhanced"),
            Self::AssignmentAware => write!(f, "assignment_aware"),
        }
    }
}

impl FromStr for GradingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "basic" => Ok(Self::Basic),
            "enhanced" => Ok(Self::Enhanced),
            "assignment_aware" => Ok(Self::AssignmentAware),
            other => Err(format!("Unknown grading tier: {}", other)),
        }
    }
}

/// Prompts for one grading request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingPrompt {
    pub system: String,
    pub user: String,
}

/// Optional material that richer tiers fold into the prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct GradingContext<'a> {
    pub assignment_spec: Option<&'a ParsedAssignmentSpec>,
    pub metrics: Option<&'a DocumentAnalysisMetrics>,
}

/// Prepare the prompts for grading `submission` against `rubric`
pub fn prepare_prompt(
    tier: GradingTier,
    rubric: &str,
    submission: &str,
    context: &GradingContext<'_>,
) -> GradingPrompt {
    let submission = if submission.trim().is_empty() { NO_SUBMISSION_TEXT } else { submission };
    debug!("Preparing {} grading prompt", tier);

    match tier {
        GradingTier::Basic => basic_prompt(rubric, submission),
        GradingTier::Enhanced => enhanced_prompt(rubric, submission, context.metrics),
        GradingTier::AssignmentAware => {
            assignment_aware_prompt(rubric, submission, context.assignment_spec)
        }
    }
}

fn basic_prompt(rubric: &str, submission: &str) -> GradingPrompt {
    let user = format!(
        r#"Please grade the following submission using the provided rubric:

RUBRIC:
{}

SUBMISSION:
{}

Please provide:
1. Overall grade
2. Score for each rubric criterion
3. Detailed feedback explaining your reasoning
4. Strengths of the submission
5. Areas for improvement

Format your response clearly with sections for each component."#,
        rubric, submission
    );

    GradingPrompt { system: BASIC_SYSTEM_PROMPT.to_string(), user }
}

fn enhanced_prompt(
    rubric: &str,
    submission: &str,
    metrics: Option<&DocumentAnalysisMetrics>,
) -> GradingPrompt {
    let analysis = match metrics {
        Some(metrics) => format_analysis_for_prompt(metrics),
        None => format_analysis_for_prompt(&estimate_metrics(submission)),
    };

    let user = format!(
        r#"Please grade the following submission using the provided rubric and document analysis:

RUBRIC:
{}

DOCUMENT ANALYSIS:
{}

SUBMISSION:
{}

Use the document analysis to inform your grading across writing quality, structure, readability and academic rigor. Provide specific feedback that references the metrics where relevant."#,
        rubric,
        analysis.trim(),
        submission
    );

    GradingPrompt { system: ENHANCED_SYSTEM_PROMPT.to_string(), user }
}

fn assignment_aware_prompt(
    rubric: &str,
    submission: &str,
    spec: Option<&ParsedAssignmentSpec>,
) -> GradingPrompt {
    let base = format!(
        r#"Please grade the following submission using the complete assignment context:

RUBRIC:
{}

SUBMISSION:
{}

Evaluate the submission against:
1. Assignment-specific requirements and learning objectives
2. How well it addresses the prompt/question
3. Rubric criteria with assignment context
4. Overall alignment with course goals

Provide detailed feedback that shows how the submission performs against the specific assignment requirements."#,
        rubric, submission
    );

    let user = match spec {
        Some(spec) => enhance_prompt_with_assignment_spec(&base, spec),
        None => format!("{}\n\nASSIGNMENT SPECIFICATION:\nNo assignment specification provided", base),
    };

    GradingPrompt { system: ASSIGNMENT_AWARE_SYSTEM_PROMPT.to_string(), user }
}
