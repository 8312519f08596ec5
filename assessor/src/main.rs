use anyhow::Result;
use assessor_core::AssessorConfig;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = AssessorConfig::load_or_default(cli.config.as_deref())?;
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Parse(args) => {
            info!("Parse command: {:?}", args);
            runtime.block_on(cli::commands::parse::execute(args))?;
        }
        Commands::Analyze(args) => {
            info!("Analyze command: {:?}", args);
            runtime.block_on(cli::commands::analyze::execute(args, config))?;
        }
        Commands::Prompt(args) => {
            info!("Prompt command: {:?}", args);
            runtime.block_on(cli::commands::prompt::execute(args, config))?;
        }
        Commands::Health => {
            info!("Checking analysis service");
            runtime.block_on(cli::commands::health::execute(config))?;
        }
    }

    Ok(())
}
