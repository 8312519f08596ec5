//! Submission document analysis
//!
//! Metrics come either from a remote analysis service or, when that is
//! disabled or unreachable, from the local fallback estimator.

pub mod client;
pub mod errors;
pub mod estimator;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

pub use client::RemoteAnalyzer;
pub use errors::{AnalysisError, AnalysisResult};
pub use estimator::{estimate_metrics, fallback_response};
pub use types::*;

use crate::config::AnalysisConfig;

/// Something that can turn a document into analysis metrics
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Short name for logging
    fn name(&self) -> &str;

    /// Analyse a document. Never fails: failures degrade to fallback metrics.
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResponse;

    /// Check if the analyzer can currently produce full metrics
    async fn is_available(&self) -> bool;
}

/// Analyzer that only uses local estimates
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAnalyzer;

#[async_trait]
impl DocumentAnalyzer for LocalAnalyzer {
    fn name(&self) -> &str {
        "local"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResponse {
        fallback_response(request)
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Pick the analyzer described by the configuration
pub fn analyzer_from_config(config: &AnalysisConfig) -> AnalysisResult<Arc<dyn DocumentAnalyzer>> {
    if config.enabled {
        Ok(Arc::new(RemoteAnalyzer::new(config.clone())?))
    } else {
        Ok(Arc::new(LocalAnalyzer))
    }
}

/// Analyse a document with the analyzer `config` describes.
///
/// Never fails: an analyzer that cannot be built is treated like an
/// unreachable service and the local estimate is returned.
pub async fn analyze_document(request: &AnalysisRequest, config: &AnalysisConfig) -> AnalysisResponse {
    match analyzer_from_config(config) {
        Ok(analyzer) => analyzer.analyze(request).await,
        Err(e) => {
            warn!("Could not create document analyzer, using local estimates: {}", e);
            fallback_response(request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_analyzer() {
        let analyzer = LocalAnalyzer;
        let response = analyzer.analyze(&AnalysisRequest::new("Short text.")).await;
        assert!(response.success);
        assert_eq!(response.metrics.word_count, 2);
        assert!(analyzer.is_available().await);
    }

    #[test]
    fn test_analyzer_selection() {
        let mut config = AnalysisConfig::default();
        assert_eq!(analyzer_from_config(&config).unwrap().name(), "local");

        config.enabled = true;
        assert_eq!(analyzer_from_config(&config).unwrap().name(), "remote");
    }

    #[tokio::test]
    async fn test_analyze_document_disabled_uses_estimates() {
        let request = AnalysisRequest::new("Alpha beta. Gamma.");
        let response = analyze_document(&request, &AnalysisConfig::default()).await;
        assert_eq!(response, fallback_response(&request));
    }

    #[tokio::test]
    async fn test_analyze_document_bad_key_falls_back() {
        let config = AnalysisConfig {
            enabled: true,
            api_key: Some("bad\nkey".to_string()),
            ..Default::default()
        };
        assert!(analyzer_from_config(&config).is_err());

        let request = AnalysisRequest::new("text");
        assert_eq!(analyze_document(&request, &config).await, fallback_response(&request));
    }
}
