//! Configuration for the assessor
//!
//! Loaded from TOML. Configuration values are passed explicitly to the
//! components that need them; nothing is held in global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::analysis::CitationStyle;
use crate::grading::GradingTier;

pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:8001";

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessorConfig {
    pub analysis: AnalysisConfig,
    pub grading: GradingConfig,
}

impl AssessorConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Platform config location, e.g. `~/.config/assessor/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("assessor").join("config.toml"))
    }

    /// Load from `path` (or the default location); a missing file yields defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if path.exists() {
            debug!("Loading configuration from {}", path.display());
            Self::from_file(&path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// Remote document analysis service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Use the remote service rather than local estimates
    pub enabled: bool,

    pub base_url: String,

    /// Bearer token
    pub api_key: Option<String>,

    /// Environment variable holding the token when `api_key` is unset
    pub api_key_env: Option<String>,

    pub timeout_secs: u64,

    pub expected_citation_style: Option<CitationStyle>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: DEFAULT_ANALYSIS_URL.to_string(),
            api_key: None,
            api_key_env: None,
            timeout_secs: 30,
            expected_citation_style: None,
        }
    }
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured key, or the value of `api_key_env`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key.clone().or_else(|| {
            self.api_key_env
                .as_deref()
                .and_then(|var| std::env::var(var).ok())
                .filter(|key| !key.is_empty())
        })
    }
}

/// Grading workflow settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub default_tier: GradingTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssessorConfig::default();
        assert!(!config.analysis.enabled);
        assert_eq!(config.analysis.base_url, DEFAULT_ANALYSIS_URL);
        assert_eq!(config.analysis.timeout(), Duration::from_secs(30));
        assert_eq!(config.grading.default_tier, GradingTier::Basic);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[analysis]\nenabled = true\nexpected_citation_style = \"APA\"\n\n[grading]\ndefault_tier = \"assignment_aware\"\n",
        )
        .unwrap();

        let config = AssessorConfig::from_file(&path).unwrap();
        assert!(config.analysis.enabled);
        assert_eq!(config.analysis.timeout_secs, 30);
        assert_eq!(config.analysis.expected_citation_style, Some(CitationStyle::Apa));
        assert_eq!(config.grading.default_tier, GradingTier::AssignmentAware);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AssessorConfig::default();
        config.analysis.base_url = "https://analysis.example.edu".to_string();
        config.analysis.api_key = Some("secret".to_string());
        config.save(&path).unwrap();

        assert_eq!(AssessorConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = AssessorConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config, AssessorConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis\nenabled = ").unwrap();
        assert!(AssessorConfig::load_or_default(Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = AnalysisConfig {
            api_key: Some("direct".to_string()),
            api_key_env: Some("ASSESSOR_TEST_UNSET_VARIABLE".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("direct".to_string()));

        let config = AnalysisConfig {
            api_key_env: Some("ASSESSOR_TEST_UNSET_VARIABLE".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
