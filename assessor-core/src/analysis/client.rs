//! Remote document analysis service client
//!
//! A single request per analysis, no retries. Any failure is logged and
//! answered with the local fallback estimate instead.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};

use super::errors::{AnalysisError, AnalysisResult};
use super::estimator::fallback_response;
use super::types::{AnalysisRequest, AnalysisResponse};
use super::DocumentAnalyzer;
use crate::config::AnalysisConfig;

/// Client for a remote analysis service exposing `/analyze` and `/health`
pub struct RemoteAnalyzer {
    client: Client,
    config: AnalysisConfig,
}

impl RemoteAnalyzer {
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = config.resolve_api_key() {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|e| AnalysisError::config(format!("Invalid API key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| AnalysisError::config(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Ask the service to analyse a document, surfacing failures
    pub async fn try_analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisResponse> {
        let url = format!("{}/analyze", self.base_url());
        debug!("Sending document analysis request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            return Err(AnalysisError::api(status.as_u16(), reason));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The client timeout can fire while sending or while reading the body
    fn transport_error(&self, err: reqwest::Error) -> AnalysisError {
        if err.is_timeout() {
            AnalysisError::timeout(self.config.timeout())
        } else {
            AnalysisError::from(err)
        }
    }

    /// Check whether the service answers its health endpoint
    pub async fn test_connection(&self) -> bool {
        let url = format!("{}/health", self.base_url());
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check against {} failed: {}", url, e);
                false
            }
        }
    }
}

#[async_trait]
impl DocumentAnalyzer for RemoteAnalyzer {
    fn name(&self) -> &str {
        "remote"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResponse {
        match self.try_analyze(request).await {
            Ok(response) => {
                info!("Document analysis completed by {}", self.base_url());
                response
            }
            Err(e) => {
                warn!("Document analysis failed, using local estimates: {}", e);
                fallback_response(request)
            }
        }
    }

    async fn is_available(&self) -> bool {
        self.test_connection().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::estimator::{OFFLINE_SUGGESTIONS, estimate_metrics};
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> AnalysisConfig {
        AnalysisConfig {
            enabled: true,
            base_url: server.uri(),
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    fn remote_response() -> AnalysisResponse {
        let mut metrics = estimate_metrics("Remote text. Two sentences.");
        metrics.grammar_score = 97.5;
        metrics.citation_style_detected = Some("APA".to_string());
        AnalysisResponse {
            success: true,
            metrics,
            suggestions: Some(vec!["Vary sentence openings".to_string()]),
            warnings: None,
            error: None,
        }
    }

    #[tokio::test]
    async fn test_remote_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({ "content": "Essay body" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(remote_response()))
            .expect(1)
            .mount(&server)
            .await;

        let analyzer = RemoteAnalyzer::new(config_for(&server)).unwrap();
        let response = analyzer.analyze(&AnalysisRequest::new("Essay body")).await;

        assert_eq!(response, remote_response());
    }

    #[tokio::test]
    async fn test_server_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let analyzer = RemoteAnalyzer::new(config_for(&server)).unwrap();
        let request = AnalysisRequest::new("One sentence. Two sentences.");

        let err = analyzer.try_analyze(&request).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Api { status: 500, .. }));

        let response = analyzer.analyze(&request).await;
        assert!(response.success);
        assert_eq!(response.metrics.sentence_count, 2);
        assert_eq!(response.suggestions.unwrap()[0], OFFLINE_SUGGESTIONS[0]);
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let analyzer = RemoteAnalyzer::new(config_for(&server)).unwrap();
        let request = AnalysisRequest::new("text");

        assert!(matches!(analyzer.try_analyze(&request).await, Err(AnalysisError::Parse { .. })));
        assert_eq!(analyzer.analyze(&request).await, fallback_response(&request));
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(remote_response())
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = AnalysisConfig { timeout_secs: 1, ..config_for(&server) };
        let analyzer = RemoteAnalyzer::new(config).unwrap();
        let request = AnalysisRequest::new("text");

        let err = analyzer.try_analyze(&request).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_timeout_errors_map_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = AnalysisConfig { timeout_secs: 1, ..config_for(&server) };
        let analyzer = RemoteAnalyzer::new(config).unwrap();
        let err = analyzer
            .client
            .get(format!("{}/slow", server.uri()))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout());

        match analyzer.transport_error(err) {
            AnalysisError::Timeout { duration } => assert_eq!(duration, Duration::from_secs(1)),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        let config = AnalysisConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..Default::default()
        };
        let analyzer = RemoteAnalyzer::new(config).unwrap();
        let request = AnalysisRequest::new("Offline text.");

        assert!(!analyzer.is_available().await);
        assert_eq!(analyzer.analyze(&request).await, fallback_response(&request));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let analyzer = RemoteAnalyzer::new(config_for(&server)).unwrap();
        assert!(analyzer.test_connection().await);
    }
}
