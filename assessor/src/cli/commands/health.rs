//! Analysis service health check command

use anyhow::Result;
use assessor_core::AssessorConfig;
use assessor_core::analysis::RemoteAnalyzer;

/// Execute the health command
pub async fn execute(config: AssessorConfig) -> Result<()> {
    if !config.analysis.enabled {
        println!("Remote analysis is disabled; local estimates are used");
    }

    let analyzer = RemoteAnalyzer::new(config.analysis)?;
    if analyzer.test_connection().await {
        println!("Analysis service at {} is healthy", analyzer.base_url());
    } else {
        println!("Analysis service at {} is unreachable", analyzer.base_url());
    }

    Ok(())
}
