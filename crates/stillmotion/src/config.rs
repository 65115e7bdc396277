//! Layered configuration for the rewrite provider and the generator program.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillmotion_compose::RewriteSettings;
use stillmotion_error::{ConfigError, StillmotionResult};
use stillmotion_models::ANTHROPIC_API_URL;
use stillmotion_video::GeneratorSettings;
use tracing::debug;

/// Prompt rewrite provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Model identifier
    pub model: String,
    /// Maximum tokens in the rewritten prompt
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Messages API endpoint
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        let settings = RewriteSettings::default();
        Self {
            model: settings.model,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            api_url: ANTHROPIC_API_URL.to_string(),
            timeout_secs: 120,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
        }
    }
}

impl RewriteConfig {
    /// Sampling parameters for [`compose_prompt`](stillmotion_compose::compose_prompt).
    pub fn settings(&self) -> RewriteSettings {
        RewriteSettings {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the API key from the configured environment variable.
    ///
    /// Empty values count as unset.
    pub fn api_key_from_env(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Complete stillmotion configuration.
///
/// # Example
///
/// ```toml
/// [rewrite]
/// model = "claude-3-5-sonnet-20241022"
/// max_tokens = 500
/// temperature = 0.7
///
/// [generator]
/// program = "python3"
/// args = ["generate.py"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StillmotionConfig {
    /// Prompt rewrite provider
    #[serde(default)]
    pub rewrite: RewriteConfig,
    /// External video generator
    #[serde(default)]
    pub generator: GeneratorSettings,
}

impl StillmotionConfig {
    /// Load configuration from a single TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StillmotionResult<Self> {
        debug!(path = %path.as_ref().display(), "Loading configuration from file");

        Ok(Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (stillmotion.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/stillmotion/stillmotion.toml)
    /// 3. User config in current directory (./stillmotion.toml)
    ///
    /// User config files are optional and are skipped if not found.
    pub fn load() -> StillmotionResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../stillmotion.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/stillmotion/stillmotion.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("stillmotion").required(false));

        Ok(builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?)
    }
}
