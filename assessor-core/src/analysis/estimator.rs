//! Local fallback metrics
//!
//! Counts, citation and heading detection are computed from the text. The
//! readability and quality scores are fixed placeholders: only a real
//! analysis service produces those.

use regex_utils::document;

use super::types::{AnalysisRequest, AnalysisResponse, DocumentAnalysisMetrics};

pub const FALLBACK_FLESCH_KINCAID_GRADE: f64 = 12.0;
pub const FALLBACK_FLESCH_READING_EASE: f64 = 60.0;
pub const FALLBACK_GUNNING_FOG: f64 = 12.0;
pub const FALLBACK_ACADEMIC_VOCABULARY: f64 = 25.0;
pub const FALLBACK_COMPLEX_WORDS: f64 = 15.0;
pub const FALLBACK_PASSIVE_VOICE: f64 = 10.0;
pub const FALLBACK_CITATION_COMPLIANCE: f64 = 75.0;
pub const FALLBACK_STRUCTURAL_COHERENCE: f64 = 70.0;
pub const FALLBACK_GRAMMAR_SCORE: f64 = 85.0;
pub const FALLBACK_VOCABULARY_DIVERSITY: f64 = 0.6;
pub const FALLBACK_SENTENCE_VARIETY: f64 = 0.7;

pub const OFFLINE_SUGGESTIONS: [&str; 2] = [
    "API connection not available - showing basic metrics only",
    "Consider checking document structure and citations manually",
];

/// Estimate document metrics from text alone
pub fn estimate_metrics(content: &str) -> DocumentAnalysisMetrics {
    let word_count = content.split_whitespace().count();
    let sentence_count = document::count_sentences(content);
    let paragraph_count = document::count_paragraphs(content);
    let citations = document::count_citations(content);
    let lower = content.to_lowercase();

    DocumentAnalysisMetrics {
        word_count,
        paragraph_count,
        sentence_count,
        average_words_per_sentence: word_count as f64 / sentence_count.max(1) as f64,
        average_sentences_per_paragraph: sentence_count as f64 / paragraph_count.max(1) as f64,

        flesch_kincaid_grade_level: FALLBACK_FLESCH_KINCAID_GRADE,
        flesch_reading_ease: FALLBACK_FLESCH_READING_EASE,
        gunning_fog_index: FALLBACK_GUNNING_FOG,

        academic_vocabulary_percentage: FALLBACK_ACADEMIC_VOCABULARY,
        complex_words_percentage: FALLBACK_COMPLEX_WORDS,
        passive_voice_percentage: FALLBACK_PASSIVE_VOICE,

        citation_count: citations,
        in_text_citations: citations,
        reference_list_entries: 0,
        citation_format_compliance: FALLBACK_CITATION_COMPLIANCE,
        citation_style_detected: None,

        has_introduction: lower.contains("introduction") || paragraph_count > 0,
        has_conclusion: lower.contains("conclusion") || lower.contains("summary"),
        heading_count: document::count_headings(content),
        structural_coherence: FALLBACK_STRUCTURAL_COHERENCE,

        grammar_score: FALLBACK_GRAMMAR_SCORE,
        spelling_errors: 0,
        vocabulary_diversity: FALLBACK_VOCABULARY_DIVERSITY,
        sentence_variety: FALLBACK_SENTENCE_VARIETY,
    }
}

/// Build the response used when no analysis service answered
pub fn fallback_response(request: &AnalysisRequest) -> AnalysisResponse {
    let metrics = estimate_metrics(&request.content);
    let warnings = word_limit_warnings(metrics.word_count, request);

    AnalysisResponse {
        success: true,
        metrics,
        suggestions: Some(OFFLINE_SUGGESTIONS.iter().map(|s| s.to_string()).collect()),
        warnings: if warnings.is_empty() { None } else { Some(warnings) },
        error: None,
    }
}

fn word_limit_warnings(word_count: usize, request: &AnalysisRequest) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(min) = request.min_word_count {
        if word_count < min as usize {
            warnings.push(format!(
                "Document has {} words, below the minimum of {}",
                word_count, min
            ));
        }
    }
    if let Some(max) = request.max_word_count {
        if word_count > max as usize {
            warnings.push(format!(
                "Document has {} words, above the maximum of {}",
                word_count, max
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let metrics = estimate_metrics("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.sentence_count, 0);
        assert_eq!(metrics.paragraph_count, 0);
        assert_eq!(metrics.average_words_per_sentence, 0.0);
        assert_eq!(metrics.average_sentences_per_paragraph, 0.0);
        assert!(!metrics.has_introduction);
        assert!(!metrics.has_conclusion);
    }

    #[test]
    fn test_counts_and_ratios() {
        let text = "First sentence here. Second one!\n\nThird paragraph sentence? Yes.";
        let metrics = estimate_metrics(text);
        assert_eq!(metrics.word_count, 9);
        assert_eq!(metrics.sentence_count, 4);
        assert_eq!(metrics.paragraph_count, 2);
        assert_eq!(metrics.average_words_per_sentence, 2.25);
        assert_eq!(metrics.average_sentences_per_paragraph, 2.0);
    }

    #[test]
    fn test_citation_count() {
        let metrics = estimate_metrics("As shown (Smith, 2020) and (Jones, 2021)");
        assert_eq!(metrics.citation_count, 2);
        assert_eq!(metrics.in_text_citations, 2);
        assert_eq!(metrics.reference_list_entries, 0);
    }

    #[test]
    fn test_structure_flags() {
        let text = "# Introduction\nText.\n\n## Body\nMore.\n\n####### Not a heading\n\nIn summary, done.";
        let metrics = estimate_metrics(text);
        assert!(metrics.has_introduction);
        assert!(metrics.has_conclusion);
        assert_eq!(metrics.heading_count, 2);
    }

    #[test]
    fn test_fixed_quality_defaults() {
        let metrics = estimate_metrics("Anything at all.");
        assert_eq!(metrics.grammar_score, 85.0);
        assert_eq!(metrics.spelling_errors, 0);
        assert_eq!(metrics.vocabulary_diversity, 0.6);
        assert_eq!(metrics.sentence_variety, 0.7);
        assert_eq!(metrics.academic_vocabulary_percentage, 25.0);
        assert_eq!(metrics.complex_words_percentage, 15.0);
        assert_eq!(metrics.passive_voice_percentage, 10.0);
        assert_eq!(metrics.citation_format_compliance, 75.0);
        assert_eq!(metrics.structural_coherence, 70.0);
        assert_eq!(metrics.flesch_kincaid_grade_level, 12.0);
        assert_eq!(metrics.flesch_reading_ease, 60.0);
        assert_eq!(metrics.gunning_fog_index, 12.0);
    }

    #[test]
    fn test_fallback_response_advisories() {
        let request = AnalysisRequest::new("one two three").with_word_limits(Some(10), Some(2));
        let response = fallback_response(&request);
        assert!(response.success);
        assert_eq!(response.suggestions.as_ref().unwrap().len(), 2);
        assert!(response.suggestions.unwrap()[0].contains("API connection not available"));
        let warnings = response.warnings.unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("below the minimum of 10"));
        assert!(warnings[1].contains("above the maximum of 2"));
    }

    #[test]
    fn test_fallback_response_within_limits() {
        let request = AnalysisRequest::new("one two three").with_word_limits(Some(1), Some(5));
        assert!(fallback_response(&request).warnings.is_none());
    }
}
