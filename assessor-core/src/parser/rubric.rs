//! Embedded rubric extraction

use regex_utils::{grading_scale, number, rubric};
use tracing::debug;

use crate::parser::model::{EmbeddedCriterion, EmbeddedRubric};
use crate::parser::section::section_block;

/// Surface patterns a rubric may be written in, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricStrategy {
    /// `Clarity (20 points)` items inside the rubric block
    InlinePoints,
    /// `Clarity | 20` rows anywhere in the document
    PipeTable,
}

impl RubricStrategy {
    pub const PRIORITY: [RubricStrategy; 2] = [Self::InlinePoints, Self::PipeTable];

    /// Run this strategy, returning `None` when it finds no criteria
    pub fn extract(&self, block: &[&str], content: &str) -> Option<Vec<EmbeddedCriterion>> {
        let criteria = match self {
            Self::InlinePoints => inline_points(block),
            Self::PipeTable => pipe_table(content),
        };
        if criteria.is_empty() { None } else { Some(criteria) }
    }
}

/// Extract the rubric embedded in an assignment document, if any
pub fn extract_embedded_rubric(content: &str) -> Option<EmbeddedRubric> {
    let lines: Vec<&str> = content.lines().collect();
    let header = lines.iter().position(|line| rubric::is_header(line))?;
    let block = section_block(&lines, header + 1);

    let (strategy, criteria) = RubricStrategy::PRIORITY
        .iter()
        .find_map(|strategy| strategy.extract(block, content).map(|c| (*strategy, c)))?;

    debug!("Rubric extracted with {:?}: {} criteria", strategy, criteria.len());

    Some(EmbeddedRubric::new(criteria, grading_scale::extract(content)))
}

fn inline_points(block: &[&str]) -> Vec<EmbeddedCriterion> {
    block
        .iter()
        .filter_map(|line| {
            let caps = rubric::INLINE_CRITERION.captures(line)?;
            let name = clean_name(caps.get(1)?.as_str());
            let points = number::saturating_u32(caps.get(2)?.as_str())?;
            (!name.is_empty()).then(|| EmbeddedCriterion::new(name, points))
        })
        .collect()
}

fn pipe_table(content: &str) -> Vec<EmbeddedCriterion> {
    content
        .lines()
        .flat_map(|line| rubric::TABLE_ROW.captures_iter(line))
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().trim();
            let points = number::saturating_u32(caps.get(2)?.as_str())?;
            (!name.is_empty() && points > 0).then(|| EmbeddedCriterion::new(name, points))
        })
        .collect()
}

fn clean_name(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '•' | '*' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_points_without_markers() {
        let content = "Essay\n\nGrading Criteria:\nClarity (20 points)\nEvidence (15 points)\n";
        let rubric = extract_embedded_rubric(content).unwrap();
        let points: Vec<u32> = rubric.criteria.iter().map(|c| c.points).collect();
        assert_eq!(points, vec![20, 15]);
        assert_eq!(rubric.total_points, 35);
        assert_eq!(rubric.criteria[0].name, "Clarity");
        assert_eq!(rubric.criteria[0].description, "Clarity");
    }

    #[test]
    fn test_inline_points_with_markers() {
        let content = "## Rubric\n- Thesis (10 pts)\n2. Structure: (5 Points)\n* Style (1 point)\n\nAfterword (99 points)";
        let rubric = extract_embedded_rubric(content).unwrap();
        let names: Vec<&str> = rubric.criteria.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Thesis", "Structure", "Style"]);
        assert_eq!(rubric.total_points, 16);
    }

    #[test]
    fn test_no_header_means_no_rubric() {
        let content = "Clarity (20 points)\nEvidence (15 points)\n| Style | 5 |";
        assert!(extract_embedded_rubric(content).is_none());
    }

    #[test]
    fn test_pipe_table_fallback_scans_whole_document() {
        let content = "Marking Rubric:\nSee table below.\n\n| Criterion | Points |\n|---|---|\n| Analysis | 40 |\n| Writing | 0 |\n| Referencing | 10 |";
        let rubric = extract_embedded_rubric(content).unwrap();
        let names: Vec<&str> = rubric.criteria.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Analysis", "Referencing"]);
        assert_eq!(rubric.total_points, 50);
    }

    #[test]
    fn test_inline_takes_precedence_over_table() {
        let content = "Rubric:\n- Argument (30 points)\n\nSummary | 70";
        let rubric = extract_embedded_rubric(content).unwrap();
        assert_eq!(rubric.criteria.len(), 1);
        assert_eq!(rubric.total_points, 30);
    }

    #[test]
    fn test_header_without_criteria_is_not_a_rubric() {
        let content = "Assessment Criteria:\nYou will be marked on clarity and depth.";
        assert!(extract_embedded_rubric(content).is_none());
    }

    #[test]
    fn test_grading_scale_is_captured() {
        let content = "Rubric:\n- Depth (50 points)\n- Clarity (50 points)\n\nA: 90-100%\nB: 80-89%";
        let rubric = extract_embedded_rubric(content).unwrap();
        assert_eq!(rubric.grading_scale.as_deref(), Some("A: 90-100%"));
    }

    #[test]
    fn test_large_point_values_do_not_overflow_total() {
        let content = "Grading Criteria:\n- Content (4000000000 points)\n- Style (400000000 points)\n";
        let rubric = extract_embedded_rubric(content).unwrap();
        assert_eq!(rubric.criteria.len(), 2);
        assert_eq!(rubric.total_points, 4_400_000_000);
    }

    #[test]
    fn test_out_of_range_points_saturate() {
        let content = "Rubric:\n- Effort (99999999999 points)\n\nDepth | 99999999999";
        let rubric = extract_embedded_rubric(content).unwrap();
        assert_eq!(rubric.criteria[0].points, u32::MAX);
        assert_eq!(pipe_table("Depth | 99999999999")[0].points, u32::MAX);
    }

    #[test]
    fn test_strategy_reports_no_match() {
        assert!(RubricStrategy::InlinePoints.extract(&["nothing here"], "").is_none());
        assert!(RubricStrategy::PipeTable.extract(&[], "no pipes").is_none());
    }
}
