//! Analyze submission command

use anyhow::{Context, Result};
use assessor_core::AssessorConfig;
use assessor_core::analysis::{AnalysisRequest, AnalysisResponse, analyzer_from_config};
use tracing::info;

use crate::cli::app::AnalyzeArgs;

/// Execute the analyze command
pub async fn execute(args: AnalyzeArgs, config: AssessorConfig) -> Result<()> {
    let content = tokio::fs::read_to_string(&args.path)
        .await
        .with_context(|| format!("Failed to read submission {}", args.path.display()))?;

    let mut analysis_config = config.analysis;
    if args.remote {
        analysis_config.enabled = true;
    }

    let mut request =
        AnalysisRequest::new(content).with_word_limits(args.min_words, args.max_words);
    if let Some(style) = analysis_config.expected_citation_style {
        request = request.with_citation_style(style);
    }

    let analyzer = analyzer_from_config(&analysis_config)?;
    info!("Analyzing {} with the {} analyzer", args.path.display(), analyzer.name());
    let response = analyzer.analyze(&request).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_report(&response);
    }

    Ok(())
}

fn print_report(response: &AnalysisResponse) {
    let metrics = &response.metrics;

    println!("Document analysis");
    println!("  Words: {}", metrics.word_count);
    println!("  Sentences: {}", metrics.sentence_count);
    println!("  Paragraphs: {}", metrics.paragraph_count);
    println!("  Average words per sentence: {:.1}", metrics.average_words_per_sentence);
    println!("  Citations: {}", metrics.citation_count);
    println!("  Headings: {}", metrics.heading_count);
    println!("  Introduction: {}", if metrics.has_introduction { "yes" } else { "no" });
    println!("  Conclusion: {}", if metrics.has_conclusion { "yes" } else { "no" });
    println!("  Grammar score: {:.1}%", metrics.grammar_score);

    if let Some(style) = &metrics.citation_style_detected {
        println!("  Citation style: {}", style);
    }

    if let Some(warnings) = &response.warnings {
        println!("\nWarnings:");
        for warning in warnings {
            println!("  - {}", warning);
        }
    }

    if let Some(suggestions) = &response.suggestions {
        println!("\nSuggestions:");
        for suggestion in suggestions {
            println!("  - {}", suggestion);
        }
    }

    if let Some(error) = &response.error {
        println!("\nService error: {}", error);
    }
}
