//! Anthropic Claude API provider with SSE streaming

use crate::provider::{LlmError, LlmProvider, LlmResult, LlmStream};
use crate::types::{LlmRequest, StreamDelta, Usage};
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: ANTHROPIC_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait::async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn models(&self) -> &[&str] {
        &["claude-sonnet-4-20250514", "claude-haiku-4-5-20251001"]
    }

    async fn complete_stream(
        &self,
        request: LlmRequest,
        cancel: Option<CancellationToken>,
    ) -> LlmResult<LlmStream> {
        let body = AnthropicRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|m| AnthropicMessage {
                    role: m.role.clone(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens.unwrap_or(4000),
            temperature: request.temperature,
            stream: true,
            system: request.system.clone(),
        };

        debug!("Anthropic request: model={}", body.model);

        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Anthropic error {}: {}", status, error_text);

            return Err(match status.as_u16() {
                401 => LlmError::AuthFailed(error_text),
                429 => LlmError::RateLimited {
                    retry_after_ms: 60000,
                },
                _ => LlmError::RequestFailed(format!("{}: {}", status, error_text)),
            });
        }

        let stream = parse_sse_stream(response.bytes_stream(), cancel.unwrap_or_default());
        Ok(Box::pin(stream))
    }
}

fn parse_sse_stream(
    bytes_stream: impl futures::Stream<Item = Result<bytes::Bytes, reqwest::Error>> + Send + 'static,
    cancel: CancellationToken,
) -> impl futures::Stream<Item = LlmResult<StreamDelta>> + Send {
    async_stream::stream! {
        let mut buffer = String::new();
        let mut usage: Option<Usage> = None;

        tokio::pin!(bytes_stream);

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                next = bytes_stream.next() => Some(next),
            };

            let chunk_result = match next {
                None => {
                    yield Err(LlmError::Cancelled);
                    break;
                }
                Some(None) => break,
                Some(Some(r)) => r,
            };

            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(LlmError::StreamError(e.to_string()));
                    break;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(event_end) = buffer.find("\n\n") {
                let event_str = buffer[..event_end].to_string();
                buffer = buffer[event_end + 2..].to_string();

                match parse_event(&event_str) {
                    Some(SseEvent::Text(text)) => yield Ok(StreamDelta::Text(text)),
                    Some(SseEvent::Usage(u)) => usage = Some(u),
                    Some(SseEvent::Stop) => {
                        yield Ok(StreamDelta::Done {
                            stop_reason: Some("end_turn".to_string()),
                            usage: usage.take(),
                        });
                    }
                    Some(SseEvent::Error(message)) => yield Err(LlmError::StreamError(message)),
                    None => {}
                }
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum SseEvent {
    Text(String),
    Usage(Usage),
    Stop,
    Error(String),
}

/// Decode one `event:`/`data:` block. Events we do not consume map to `None`.
fn parse_event(event_str: &str) -> Option<SseEvent> {
    let mut event_type = "";
    let mut event_data = "";

    for line in event_str.lines() {
        if let Some(rest) = line.strip_prefix("event: ") {
            event_type = rest;
        } else if let Some(rest) = line.strip_prefix("data: ") {
            event_data = rest;
        }
    }

    if event_data.is_empty() {
        return None;
    }

    match event_type {
        "content_block_delta" => {
            let data = serde_json::from_str::<ContentBlockDelta>(event_data).ok()?;
            match data.delta {
                DeltaType::TextDelta { text } => Some(SseEvent::Text(text)),
                DeltaType::Other => None,
            }
        }
        "message_delta" => {
            let data = serde_json::from_str::<MessageDelta>(event_data).ok()?;
            if let Some(stop_reason) = &data.delta.stop_reason {
                debug!("Message complete: stop_reason={}", stop_reason);
            }
            data.usage.map(SseEvent::Usage)
        }
        "message_stop" => Some(SseEvent::Stop),
        "error" => {
            let data = serde_json::from_str::<ErrorEvent>(event_data).ok()?;
            Some(SseEvent::Error(data.error.message))
        }
        _ => None,
    }
}

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ContentBlockDelta {
    delta: DeltaType,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum DeltaType {
    #[serde(rename = "text_delta")]
    TextDelta { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct MessageDelta {
    delta: MessageDeltaContent,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct MessageDeltaContent {
    stop_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEvent {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}
