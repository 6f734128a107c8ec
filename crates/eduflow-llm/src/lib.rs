//! Eduflow LLM - Generation service boundary and provider adapters

pub mod anthropic;
pub mod gemini;
pub mod generator;
pub mod mock;
pub mod provider;
pub mod types;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use generator::ProviderGenerator;
pub use mock::{MockBehavior, MockGenerator};
pub use provider::{GenerationService, LlmError, LlmProvider, LlmResult, LlmStream};
pub use tokio_util::sync::CancellationToken;
pub use types::*;
