//! Google Gemini provider (single-shot `generateContent`)

use crate::provider::{LlmError, LlmProvider, LlmResult, LlmStream};
use crate::types::{LlmRequest, StreamDelta, Usage};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait::async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn models(&self) -> &[&str] {
        &["gemini-2.5-flash", "gemini-2.5-pro"]
    }

    async fn complete_stream(
        &self,
        request: LlmRequest,
        cancel: Option<CancellationToken>,
    ) -> LlmResult<LlmStream> {
        let body = GeminiRequest {
            system_instruction: request.system.as_ref().map(|s| GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: s.clone() }],
            }),
            contents: request
                .messages
                .iter()
                .map(|m| GeminiContent {
                    role: Some(if m.role == "assistant" { "model" } else { "user" }.to_string()),
                    parts: vec![GeminiPart {
                        text: m.content.clone(),
                    }],
                })
                .collect(),
            generation_config: GenerationParams {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        };

        debug!("Gemini request: model={}", request.model);

        let send = self
            .client
            .post(self.endpoint(&request.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send();

        let response = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(LlmError::Cancelled),
                r = send => r?,
            },
            None => send.await?,
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini error {}: {}", status, error_text);
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthFailed(error_text),
                429 => LlmError::RateLimited {
                    retry_after_ms: 60000,
                },
                _ => LlmError::RequestFailed(format!("{}: {}", status, error_text)),
            });
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;
        let deltas = response_deltas(parsed)?;
        Ok(Box::pin(futures::stream::iter(deltas.into_iter().map(Ok))))
    }
}

/// Flatten a complete response into the streaming delta shape.
fn response_deltas(response: GeminiResponse) -> LlmResult<Vec<StreamDelta>> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("Empty response from Gemini model".into()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(LlmError::InvalidResponse(
            "Empty response from Gemini model".into(),
        ));
    }

    let usage = response.usage_metadata.map(|u| Usage {
        input_tokens: u.prompt_token_count,
        output_tokens: u.candidates_token_count,
    });

    Ok(vec![
        StreamDelta::Text(text),
        StreamDelta::Done {
            stop_reason: candidate.finish_reason,
            usage,
        },
    ])
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    generation_config: GenerationParams,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_candidate_parts() {
        let raw = r#"{
            "candidates": [{"content": {"role": "model", "parts": [{"text": "Hello "}, {"text": "class"}]}, "finishReason": "STOP"}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 3}
        }"#;
        let deltas = response_deltas(serde_json::from_str(raw).unwrap()).unwrap();
        match &deltas[0] {
            StreamDelta::Text(t) => assert_eq!(t, "Hello class"),
            other => panic!("Expected Text, got {:?}", other),
        }
        match &deltas[1] {
            StreamDelta::Done { stop_reason, usage } => {
                assert_eq!(stop_reason.as_deref(), Some("STOP"));
                assert_eq!(usage.as_ref().unwrap().output_tokens, 3);
            }
            other => panic!("Expected Done, got {:?}", other),
        }
    }

    #[test]
    fn empty_candidates_is_invalid() {
        let err = response_deltas(serde_json::from_str(r#"{"candidates": []}"#).unwrap()).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[test]
    fn request_uses_camel_case() {
        let body = GeminiRequest {
            system_instruction: None,
            contents: vec![],
            generation_config: GenerationParams {
                temperature: Some(0.7),
                max_output_tokens: Some(4000),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 4000);
        assert!(json.get("systemInstruction").is_none());
    }
}
