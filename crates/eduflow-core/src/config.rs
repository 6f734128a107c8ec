//! Service configuration
//!
//! Loaded from TOML at startup, falls back to defaults if no config file
//! exists. A handful of environment variables override the file.

use crate::types::FanOutPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EduflowConfig {
    pub gateway: GatewayConfig,
    pub generation: GenerationConfig,
    pub fan_out: FanOutConfig,
    pub curriculum: CurriculumConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub port: u16,
    pub bind: BindMode,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            bind: BindMode::default(),
        }
    }
}

/// Bind mode for the gateway
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BindMode {
    Loopback,
    #[default]
    Lan,
}

impl BindMode {
    pub fn to_addr(&self) -> &str {
        match self {
            BindMode::Loopback => "127.0.0.1",
            BindMode::Lan => "0.0.0.0",
        }
    }
}

/// Which text-generation backend to talk to.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Anthropic,
    #[default]
    Gemini,
    /// Deterministic local echo, no network.
    Offline,
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic),
            "gemini" => Ok(Self::Gemini),
            "offline" => Ok(Self::Offline),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub provider: ProviderKind,
    /// Model id. Empty means the provider's default.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-call timeout. Expiry fails the stage that issued the call.
    pub timeout_secs: u64,
    /// Override the provider endpoint (proxies, test servers).
    pub base_url: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: String::new(),
            temperature: 0.7,
            max_tokens: 4000,
            timeout_secs: 120,
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FanOutConfig {
    pub policy: FanOutPolicy,
    /// Upper bound on generation calls in flight for one fan-out stage.
    pub max_concurrency: usize,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            policy: FanOutPolicy::default(),
            max_concurrency: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumConfig {
    /// Base URL of the textbook catalogue API. Unset means an empty catalogue.
    pub base_url: Option<String>,
    /// Per-lookup timeout. Expiry degrades the lookup step.
    pub timeout_secs: u64,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 10,
        }
    }
}

impl EduflowConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Apply `EDUFLOW_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok());
        self
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup("EDUFLOW_PORT").and_then(|p| p.parse().ok()) {
            self.gateway.port = port;
        }
        if let Some(provider) = lookup("EDUFLOW_PROVIDER") {
            match provider.parse() {
                Ok(kind) => self.generation.provider = kind,
                Err(e) => tracing::warn!("Ignoring EDUFLOW_PROVIDER: {}", e),
            }
        }
        if let Some(model) = lookup("EDUFLOW_MODEL") {
            self.generation.model = model;
        }
        if let Some(url) = lookup("EDUFLOW_CURRICULUM_URL") {
            self.curriculum.base_url = Some(url);
        }
    }

    /// Write the current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
