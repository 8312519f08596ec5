//! Grading prompt command

use anyhow::{Context, Result};
use assessor_core::AssessorConfig;
use assessor_core::analysis::{AnalysisRequest, analyze_document};
use assessor_core::grading::{GradingContext, GradingTier, prepare_prompt};
use assessor_core::parser::AssignmentSpecParser;
use std::path::Path;
use tracing::{info, warn};

use crate::cli::app::PromptArgs;

async fn read_file(path: &Path, what: &str) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {} {}", what, path.display()))
}

/// Execute the prompt command
pub async fn execute(args: PromptArgs, config: AssessorConfig) -> Result<()> {
    let tier = args.tier.unwrap_or(config.grading.default_tier);
    let rubric = read_file(&args.rubric, "rubric").await?;
    let submission = read_file(&args.submission, "submission").await?;

    let spec = match &args.spec {
        Some(path) => Some(AssignmentSpecParser::new().parse_file(path).await?),
        None => None,
    };
    if tier == GradingTier::AssignmentAware && spec.is_none() {
        warn!("Assignment-aware tier selected without --spec");
    }

    let metrics = if tier == GradingTier::Enhanced {
        let mut request = AnalysisRequest::new(submission.as_str());
        if let Some(range) = spec.as_ref().and_then(|s| s.word_count) {
            request = request.with_word_limits(range.min, range.max);
        }
        if let Some(style) = config.analysis.expected_citation_style {
            request = request.with_citation_style(style);
        }
        Some(analyze_document(&request, &config.analysis).await.metrics)
    } else {
        None
    };

    let context = GradingContext { assignment_spec: spec.as_ref(), metrics: metrics.as_ref() };
    let prompt = prepare_prompt(tier, &rubric, &submission, &context);
    info!("Prepared {} grading prompt", tier);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prompt)?);
    } else {
        println!("=== SYSTEM ===\n{}\n\n=== USER ===\n{}", prompt.system, prompt.user);
    }

    Ok(())
}
