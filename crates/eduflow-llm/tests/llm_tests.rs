//! Tests for eduflow-llm: request types, provider adapter, mock generator

use eduflow_llm::*;
use std::sync::Arc;
use std::time::Duration;

/// Provider that replays a fixed list of deltas, optionally after a delay.
struct ScriptedProvider {
    deltas: Vec<LlmResult<StreamDelta>>,
    delay: Option<Duration>,
    seen: std::sync::Mutex<Vec<LlmRequest>>,
}

impl ScriptedProvider {
    fn new(deltas: Vec<LlmResult<StreamDelta>>) -> Self {
        Self {
            deltas,
            delay: None,
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait::async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn models(&self) -> &[&str] {
        &["scripted-1", "scripted-2"]
    }

    async fn complete_stream(
        &self,
        request: LlmRequest,
        cancel: Option<CancellationToken>,
    ) -> LlmResult<LlmStream> {
        self.seen.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            let cancel = cancel.unwrap_or_default();
            tokio::select! {
                _ = cancel.cancelled() => return Err(LlmError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }
        let deltas: Vec<LlmResult<StreamDelta>> = self
            .deltas
            .iter()
            .map(|d| match d {
                Ok(delta) => Ok(delta.clone()),
                Err(e) => Err(LlmError::StreamError(e.to_string())),
            })
            .collect();
        Ok(Box::pin(futures::stream::iter(deltas)))
    }
}

fn text(s: &str) -> LlmResult<StreamDelta> {
    Ok(StreamDelta::Text(s.to_string()))
}

fn done() -> LlmResult<StreamDelta> {
    Ok(StreamDelta::Done {
        stop_reason: Some("end_turn".into()),
        usage: Some(Usage {
            input_tokens: 5,
            output_tokens: 2,
        }),
    })
}

// ===========================================================================
// LlmRequest
// ===========================================================================

#[test]
fn llm_request_default() {
    let req = LlmRequest::default();
    assert!(req.model.is_empty());
    assert!(req.messages.is_empty());
    assert_eq!(req.max_tokens, Some(4000));
    assert_eq!(req.temperature, Some(0.7));
    assert!(req.system.is_none());
}

#[test]
fn single_turn_drops_empty_system() {
    let req = LlmRequest::single_turn("m", "", "Explain gravity");
    assert!(req.system.is_none());
    assert_eq!(req.messages, vec![LlmMessage::user("Explain gravity")]);

    let req = LlmRequest::single_turn("m", "You are a teacher", "Explain gravity");
    assert_eq!(req.system.as_deref(), Some("You are a teacher"));
}

#[test]
fn llm_request_serializes_without_empty_fields() {
    let req = LlmRequest {
        temperature: None,
        ..LlmRequest::single_turn("m", "", "hi")
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("system").is_none());
    assert!(json.get("temperature").is_none());
    assert_eq!(json["messages"][0]["role"], "user");
}

// ===========================================================================
// Usage / LlmError
// ===========================================================================

#[test]
fn usage_defaults_missing_fields() {
    let u: Usage = serde_json::from_str(r#"{"output_tokens": 9}"#).unwrap();
    assert_eq!(u.input_tokens, 0);
    assert_eq!(u.output_tokens, 9);
}

#[test]
fn transient_errors() {
    assert!(LlmError::Timeout(5).is_transient());
    assert!(LlmError::RateLimited { retry_after_ms: 10 }.is_transient());
    assert!(!LlmError::AuthFailed("bad key".into()).is_transient());
    assert!(!LlmError::Cancelled.is_transient());
    assert_eq!(LlmError::Timeout(120).to_string(), "timed out after 120s");
}

// ===========================================================================
// Provider trait defaults
// ===========================================================================

#[test]
fn default_model_is_first_listed() {
    let p = ScriptedProvider::new(vec![]);
    assert_eq!(p.default_model(), "scripted-1");
    assert!(p.supports_model("scripted-2"));
    assert!(!p.supports_model("other"));
}

#[test]
fn builtin_providers_advertise_models() {
    let anthropic = AnthropicProvider::new("key");
    assert_eq!(anthropic.name(), "anthropic");
    assert!(anthropic.default_model().starts_with("claude"));

    let gemini = GeminiProvider::new("key");
    assert_eq!(gemini.name(), "gemini");
    assert_eq!(gemini.default_model(), "gemini-2.5-flash");
}

// ===========================================================================
// ProviderGenerator
// ===========================================================================

#[tokio::test]
async fn generator_collects_text_until_done() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        text("Photo"),
        text("synthesis"),
        done(),
        text("ignored after done"),
    ]));
    let generator = ProviderGenerator::new(provider.clone());
    let out = generator.generate("sys", "user").await.unwrap();
    assert_eq!(out, "Photosynthesis");

    let seen = provider.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].model, "scripted-1");
    assert_eq!(seen[0].system.as_deref(), Some("sys"));
}

#[tokio::test]
async fn generator_passes_model_and_sampling() {
    let provider = Arc::new(ScriptedProvider::new(vec![text("ok"), done()]));
    let generator = ProviderGenerator::new(provider.clone())
        .with_model("scripted-2")
        .with_max_tokens(512)
        .with_temperature(0.2);
    assert_eq!(generator.model(), "scripted-2");
    generator.generate("", "u").await.unwrap();

    let seen = provider.seen.lock().unwrap();
    assert_eq!(seen[0].model, "scripted-2");
    assert_eq!(seen[0].max_tokens, Some(512));
    assert_eq!(seen[0].temperature, Some(0.2));
}

#[tokio::test]
async fn generator_empty_model_keeps_default() {
    let provider = Arc::new(ScriptedProvider::new(vec![text("ok"), done()]));
    let generator = ProviderGenerator::new(provider).with_model("");
    assert_eq!(generator.model(), "scripted-1");
}

#[tokio::test]
async fn generator_error_delta_fails_call() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        text("partial"),
        Ok(StreamDelta::Error("overloaded".into())),
    ]));
    let err = ProviderGenerator::new(provider)
        .generate("", "u")
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::StreamError(ref m) if m == "overloaded"));
}

#[tokio::test]
async fn generator_empty_completion_is_invalid() {
    let provider = Arc::new(ScriptedProvider::new(vec![done()]));
    let err = ProviderGenerator::new(provider)
        .generate("", "u")
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

#[tokio::test]
async fn generator_timeout_surfaces_as_error() {
    let provider = Arc::new(
        ScriptedProvider::new(vec![text("late"), done()]).slow(Duration::from_secs(5)),
    );
    let err = ProviderGenerator::new(provider)
        .with_timeout(Duration::from_millis(20))
        .generate("", "u")
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::Timeout(_)));
}

#[tokio::test]
async fn generator_cancel_aborts_call() {
    let provider = Arc::new(
        ScriptedProvider::new(vec![text("late"), done()]).slow(Duration::from_secs(5)),
    );
    let cancel = CancellationToken::new();
    let generator = ProviderGenerator::new(provider).with_cancel(cancel.clone());
    cancel.cancel();
    let err = generator.generate("", "u").await.unwrap_err();
    assert!(matches!(err, LlmError::Cancelled));
}

// ===========================================================================
// MockGenerator
// ===========================================================================

#[tokio::test]
async fn mock_records_calls() {
    let mock = MockGenerator::constant(MockBehavior::Text("fixed".into()));
    mock.generate("system A", "user A").await.unwrap();
    mock.generate("system B", "user B").await.unwrap();
    let calls = mock.calls().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], ("system B".to_string(), "user B".to_string()));
    assert_eq!(mock.call_count().await, 2);
}

#[tokio::test]
async fn mock_fails_only_on_matching_instruction() {
    let mock = MockGenerator::failing_when("Hindi");
    assert!(mock.generate("", "Translate into Tamil").await.is_ok());
    let err = mock.generate("", "Translate into Hindi").await.unwrap_err();
    assert!(err.to_string().contains("Hindi"));
}

#[tokio::test]
async fn mock_usable_as_trait_object() {
    let generator: Arc<dyn GenerationService> = Arc::new(MockGenerator::echo());
    let out = generator.generate("", "Fractions for grade 4").await.unwrap();
    assert!(out.contains("Fractions for grade 4"));
}
