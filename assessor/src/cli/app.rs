use assessor_core::GradingTier;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "assessor",
    version,
    about = "Assessor - Assignment-aware grading support",
    long_about = "Assessor parses assignment specifications, estimates document metrics for submissions, and prepares tier-aware grading prompts."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an assignment specification
    #[command(about = "Parse an assignment specification and show the extracted structure")]
    Parse(ParseArgs),

    /// Analyze a submission document
    #[command(about = "Compute document metrics for a submission")]
    Analyze(AnalyzeArgs),

    /// Build a grading prompt
    #[command(about = "Prepare the grading prompt for a submission")]
    Prompt(PromptArgs),

    /// Check the analysis service
    #[command(about = "Check whether the remote analysis service is reachable")]
    Health,
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Path to the assignment specification
    #[arg(help = "Path to the assignment specification text")]
    pub path: PathBuf,

    /// Print the parsed specification as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the submission
    #[arg(help = "Path to the submission text")]
    pub path: PathBuf,

    /// Use the remote analysis service even if disabled in configuration
    #[arg(long)]
    pub remote: bool,

    /// Minimum expected word count
    #[arg(long)]
    pub min_words: Option<u32>,

    /// Maximum expected word count
    #[arg(long)]
    pub max_words: Option<u32>,

    /// Print the analysis response as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Path to the grading rubric
    #[arg(long)]
    pub rubric: PathBuf,

    /// Path to the submission
    #[arg(long)]
    pub submission: PathBuf,

    /// Path to the assignment specification
    #[arg(long, help = "Assignment specification used by the assignment-aware tier")]
    pub spec: Option<PathBuf>,

    /// Grading tier (basic, enhanced, assignment-aware)
    #[arg(long, help = "Grading tier; defaults to the configured tier")]
    pub tier: Option<GradingTier>,

    /// Print the prompts as JSON
    #[arg(long)]
    pub json: bool,
}
