//! Grading prompt enrichment
//!
//! Renders a parsed assignment specification and document metrics as prompt
//! text for the grading model.

use std::fmt::Write;

use crate::analysis::DocumentAnalysisMetrics;
use crate::parser::ParsedAssignmentSpec;

pub const GRADING_INSTRUCTION: &str = "**Grading Instruction**: Use the above assignment context to inform your evaluation. Ensure submissions meet the stated requirements and align with learning objectives.";

/// Append the assignment context to `base_prompt`.
///
/// The result always starts with `base_prompt`. Enhancing a prompt that
/// already ends with the same context returns it unchanged, so repeated
/// application does not duplicate sections.
pub fn enhance_prompt_with_assignment_spec(base_prompt: &str, spec: &ParsedAssignmentSpec) -> String {
    let context = render_assignment_context(spec);
    if base_prompt.ends_with(&context) {
        return base_prompt.to_string();
    }

    let mut enhanced = String::with_capacity(base_prompt.len() + context.len());
    enhanced.push_str(base_prompt);
    enhanced.push_str(&context);
    enhanced
}

/// The text appended by [`enhance_prompt_with_assignment_spec`]
pub fn render_assignment_context(spec: &ParsedAssignmentSpec) -> String {
    let mut out = String::new();

    if let Some(title) = &spec.title {
        let _ = write!(out, "\n\n**Assignment Title**: {}", title);
    }

    push_bullets(&mut out, "Learning Objectives", &spec.learning_objectives);
    push_bullets(&mut out, "Assignment Requirements", &spec.requirements);
    push_bullets(&mut out, "Expected Deliverables", &spec.deliverables);

    if let Some(rubric) = &spec.embedded_rubric {
        out.push_str("\n\n**Embedded Rubric Criteria**:");
        for criterion in &rubric.criteria {
            let _ = write!(out, "\n- {}: {} points", criterion.name, criterion.points);
        }
        let _ = write!(out, "\nTotal Points: {}", rubric.total_points);
    }

    if let Some(range) = &spec.word_count {
        match (range.min, range.max) {
            (Some(min), Some(max)) => {
                let _ = write!(out, "\n\n**Word Count Requirement**: {}-{} words", min, max);
            }
            (Some(min), None) => {
                let _ = write!(out, "\n\n**Minimum Word Count**: {} words", min);
            }
            (None, Some(max)) => {
                let _ = write!(out, "\n\n**Maximum Word Count**: {} words", max);
            }
            (None, None) => {}
        }
    }

    out.push_str("\n\n");
    out.push_str(GRADING_INSTRUCTION);
    out
}

fn push_bullets(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(out, "\n\n**{}**:", label);
    for item in items {
        let _ = write!(out, "\n- {}", item);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Render document metrics as a prompt section
pub fn format_analysis_for_prompt(metrics: &DocumentAnalysisMetrics) -> String {
    format!(
        r#"
**Document Analysis Results:**

**Text Statistics:**
- Word count: {}
- Paragraphs: {}
- Sentences: {}
- Average words per sentence: {:.1}

**Readability Scores:**
- Flesch-Kincaid Grade Level: {:.1}
- Flesch Reading Ease: {:.1}
- Gunning Fog Index: {:.1}

**Academic Quality:**
- Academic vocabulary: {:.1}%
- Complex words: {:.1}%
- Passive voice usage: {:.1}%

**Citations & References:**
- Total citations: {}
- In-text citations: {}
- Reference list entries: {}
- Citation format compliance: {:.1}%

**Structure & Organization:**
- Has introduction: {}
- Has conclusion: {}
- Heading count: {}
- Structural coherence: {:.1}%

**Language Quality:**
- Grammar score: {:.1}%
- Spelling errors: {}
- Vocabulary diversity: {:.2}
- Sentence variety: {:.2}

Please use these metrics to inform your grading decision and provide specific feedback on areas that need improvement.
"#,
        metrics.word_count,
        metrics.paragraph_count,
        metrics.sentence_count,
        metrics.average_words_per_sentence,
        metrics.flesch_kincaid_grade_level,
        metrics.flesch_reading_ease,
        metrics.gunning_fog_index,
        metrics.academic_vocabulary_percentage,
        metrics.complex_words_percentage,
        metrics.passive_voice_percentage,
        metrics.citation_count,
        metrics.in_text_citations,
        metrics.reference_list_entries,
        metrics.citation_format_compliance,
        yes_no(metrics.has_introduction),
        yes_no(metrics.has_conclusion),
        metrics.heading_count,
        metrics.structural_coherence,
        metrics.grammar_score,
        metrics.spelling_errors,
        metrics.vocabulary_diversity,
        metrics.sentence_variety,
    )
}
