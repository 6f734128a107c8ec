//! Turn configuration into live collaborators: the generation service,
//! the curriculum source and the compiled engine registry.

use eduflow_core::{
    CurriculumConfig, EduflowConfig, Error, GenerationConfig, ProviderKind, Result,
};
use eduflow_engine::{CurriculumSource, EngineRegistry, HttpCurriculum, RunEnv, StaticCurriculum};
use eduflow_llm::{
    AnthropicProvider, GeminiProvider, GenerationService, LlmProvider, MockGenerator,
    ProviderGenerator,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Build the generation service named by `config`, reading credentials from the environment.
///
/// Only `provider = "offline"` yields the echo generator. A real provider
/// without its API key is a configuration error.
pub fn build_generator(config: &GenerationConfig) -> Result<Arc<dyn GenerationService>> {
    generator_from(config, |key| std::env::var(key).ok())
}

fn generator_from(
    config: &GenerationConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Arc<dyn GenerationService>> {
    let provider: Arc<dyn LlmProvider> = match config.provider {
        ProviderKind::Offline => {
            warn!("Generation provider: offline echo, responses are placeholders");
            return Ok(Arc::new(MockGenerator::echo()));
        }
        ProviderKind::Anthropic => {
            let mut provider = AnthropicProvider::new(api_key(&lookup, "ANTHROPIC_API_KEY")?);
            if let Some(url) = &config.base_url {
                info!("Using custom API URL: {}", url);
                provider = provider.with_base_url(url.clone());
            }
            Arc::new(provider)
        }
        ProviderKind::Gemini => {
            let mut provider = GeminiProvider::new(api_key(&lookup, "GEMINI_API_KEY")?);
            if let Some(url) = &config.base_url {
                info!("Using custom API URL: {}", url);
                provider = provider.with_base_url(url.clone());
            }
            Arc::new(provider)
        }
    };

    let generator = ProviderGenerator::new(provider)
        .with_model(config.model.clone())
        .with_temperature(config.temperature)
        .with_max_tokens(config.max_tokens)
        .with_timeout(Duration::from_secs(config.timeout_secs));
    info!(
        "Generation provider: {} ({})",
        generator.provider_name(),
        generator.model()
    );
    Ok(Arc::new(generator))
}

fn api_key(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<String> {
    lookup(var)
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            Error::Config(format!(
                "{} not set; export it or use provider = \"offline\"",
                var
            ))
        })
}

pub fn build_curriculum(config: &CurriculumConfig) -> Arc<dyn CurriculumSource> {
    match &config.base_url {
        Some(url) => {
            info!("Curriculum catalogue: {}", url);
            Arc::new(
                HttpCurriculum::new(url.clone())
                    .with_timeout(Duration::from_secs(config.timeout_secs)),
            )
        }
        None => Arc::new(StaticCurriculum::empty()),
    }
}

/// Compile every engine against the configured collaborators.
pub fn build_registry(config: &EduflowConfig) -> Result<EngineRegistry> {
    let env = RunEnv::new(build_generator(&config.generation)?).with_fan_out(config.fan_out.clone());
    EngineRegistry::new(env, build_curriculum(&config.curriculum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_config_error() {
        let config = GenerationConfig::default();
        let err = generator_from(&config, |_| None).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_key_is_a_config_error() {
        let config = GenerationConfig {
            provider: ProviderKind::Anthropic,
            ..Default::default()
        };
        let err = generator_from(&config, |_| Some("  ".into())).err().unwrap();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn present_key_builds_a_provider() {
        let config = GenerationConfig::default();
        assert!(generator_from(&config, |_| Some("test-key".into())).is_ok());
    }

    #[tokio::test]
    async fn offline_never_reads_credentials() {
        let config = GenerationConfig {
            provider: ProviderKind::Offline,
            ..Default::default()
        };
        let generator = generator_from(&config, |key| panic!("looked up {}", key)).unwrap();
        let text = generator.generate("system", "Explain gravity").await.unwrap();
        assert!(text.starts_with("[mock] Explain gravity"));
    }
}
