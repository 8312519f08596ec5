//! Parse assignment specification command

use anyhow::Result;
use assessor_core::parser::{AssignmentSpecParser, ParsedAssignmentSpec, SectionKind};

use crate::cli::app::ParseArgs;

/// Execute the parse command
pub async fn execute(args: ParseArgs) -> Result<()> {
    let parser = AssignmentSpecParser::new();
    let spec = parser.parse_file(&args.path).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    println!("Assignment specification: {}", args.path.display());
    print_summary(&spec);
    Ok(())
}

fn print_summary(spec: &ParsedAssignmentSpec) {
    if spec.is_empty() {
        println!("\n  Nothing recognised in this document");
        return;
    }

    if let Some(title) = &spec.title {
        println!("\n  Title: {}", title);
    }

    print_list(SectionKind::LearningObjectives, &spec.learning_objectives);
    print_list(SectionKind::Requirements, &spec.requirements);
    print_list(SectionKind::Deliverables, &spec.deliverables);
    print_list(SectionKind::Context, &spec.context_info);

    if let Some(rubric) = &spec.embedded_rubric {
        println!("\n  Rubric ({} points):", rubric.total_points);
        for criterion in &rubric.criteria {
            println!("    - {}: {}", criterion.name, criterion.points);
        }
        if let Some(scale) = &rubric.grading_scale {
            println!("    Grading scale: {}", scale);
        }
    }

    if let Some(deadline) = &spec.deadline {
        match spec.deadline_date() {
            Some(date) => println!("\n  Deadline: {} ({})", deadline, date),
            None => println!("\n  Deadline: {}", deadline),
        }
    }

    if let Some(range) = &spec.word_count {
        println!("  Word count: {}", range);
    }
}

fn print_list(kind: SectionKind, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n  {}:", kind);
    for item in items {
        println!("    - {}", item);
    }
}
