//! MockGenerator: deterministic generation for tests and offline runs
//!
//! Each call pops the next scripted behavior; once the script is exhausted
//! the default behavior answers.

use crate::provider::{GenerationService, LlmError, LlmResult};
use tokio::sync::Mutex;

/// Mock behavior configuration
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Return a text derived from the instructions (stable across runs).
    Echo,
    /// Return fixed text
    Text(String),
    /// Fail with a request error
    Error(String),
    /// Fail when the user instruction contains the needle, echo otherwise.
    FailWhenContains(String),
}

pub struct MockGenerator {
    behaviors: Mutex<Vec<MockBehavior>>,
    default_behavior: MockBehavior,
    call_count: Mutex<usize>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockGenerator {
    /// Create a mock that always returns the same behavior
    pub fn constant(behavior: MockBehavior) -> Self {
        Self {
            behaviors: Mutex::new(Vec::new()),
            default_behavior: behavior,
            call_count: Mutex::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock with a sequence of behaviors (consumed in order)
    pub fn sequence(behaviors: Vec<MockBehavior>) -> Self {
        Self {
            behaviors: Mutex::new(behaviors),
            default_behavior: MockBehavior::Text("(mock: sequence exhausted)".into()),
            call_count: Mutex::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::constant(MockBehavior::Echo)
    }

    pub fn failing_when(needle: impl Into<String>) -> Self {
        Self::constant(MockBehavior::FailWhenContains(needle.into()))
    }

    /// Get the number of calls made
    pub async fn call_count(&self) -> usize {
        *self.call_count.lock().await
    }

    /// Every `(system, user)` pair received, in call order.
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().await.clone()
    }

    async fn next_behavior(&self) -> MockBehavior {
        let mut count = self.call_count.lock().await;
        *count += 1;

        let mut behaviors = self.behaviors.lock().await;
        if behaviors.is_empty() {
            self.default_behavior.clone()
        } else {
            behaviors.remove(0)
        }
    }
}

fn echo(system: &str, user: &str) -> String {
    let first_line = user.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    format!(
        "[mock] {} ({} chars of instruction, {} chars of system)",
        first_line.trim(),
        user.chars().count(),
        system.chars().count()
    )
}

#[async_trait::async_trait]
impl GenerationService for MockGenerator {
    async fn generate(&self, system: &str, user: &str) -> LlmResult<String> {
        let behavior = self.next_behavior().await;
        self.calls
            .lock()
            .await
            .push((system.to_string(), user.to_string()));

        match behavior {
            MockBehavior::Echo => Ok(echo(system, user)),
            MockBehavior::Text(text) => Ok(text),
            MockBehavior::Error(message) => Err(LlmError::RequestFailed(message)),
            MockBehavior::FailWhenContains(needle) => {
                if user.contains(&needle) {
                    Err(LlmError::RequestFailed(format!("mock failure on '{}'", needle)))
                } else {
                    Ok(echo(system, user))
                }
            }
        }
    }
}
