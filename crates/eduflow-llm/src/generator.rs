//! Adapts a streaming `LlmProvider` into a one-shot `GenerationService`

use crate::provider::{GenerationService, LlmError, LlmProvider, LlmResult};
use crate::types::{LlmRequest, StreamDelta};
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

pub struct ProviderGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
    cancel: CancellationToken,
}

impl ProviderGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let model = provider.default_model().to_string();
        Self {
            provider,
            model,
            max_tokens: 4000,
            temperature: 0.7,
            timeout: Duration::from_secs(120),
            cancel: CancellationToken::new(),
        }
    }

    /// Empty keeps the provider's default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if !model.is_empty() {
            self.model = model;
        }
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Token shared with the owner; cancelling it aborts every in-flight call.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    async fn collect(&self, request: LlmRequest) -> LlmResult<String> {
        let mut stream = self
            .provider
            .complete_stream(request, Some(self.cancel.clone()))
            .await?;

        let mut text = String::new();
        while let Some(delta) = stream.next().await {
            match delta? {
                StreamDelta::Text(t) => text.push_str(&t),
                StreamDelta::Done { usage, .. } => {
                    if let Some(u) = usage {
                        debug!(
                            "Generation complete: {} in / {} out tokens",
                            u.input_tokens, u.output_tokens
                        );
                    }
                    break;
                }
                StreamDelta::Error(message) => return Err(LlmError::StreamError(message)),
            }
        }

        if text.is_empty() {
            return Err(LlmError::InvalidResponse("empty completion".into()));
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl GenerationService for ProviderGenerator {
    async fn generate(&self, system: &str, user: &str) -> LlmResult<String> {
        let request = LlmRequest {
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            ..LlmRequest::single_turn(self.model.clone(), system, user)
        };

        match tokio::time::timeout(self.timeout, self.collect(request)).await {
            Ok(result) => result.map_err(|e| {
                error!("{} generation failed: {}", self.provider.name(), e);
                e
            }),
            Err(_) => {
                error!(
                    "{} generation timed out after {}s",
                    self.provider.name(),
                    self.timeout.as_secs()
                );
                Err(LlmError::Timeout(self.timeout.as_secs()))
            }
        }
    }
}
