//! Advisory routing: recommends engines, never invokes them

use crate::context::WorkflowContext;
use crate::stage::{Prompt, RunEnv, Stage};
use eduflow_core::{Result, StepRecord};
use serde_json::Value;
use tracing::debug;

/// Known engine ids mentioned in `text`, in `known` order.
pub fn recommend(text: &str, known: &[String]) -> Vec<String> {
    known
        .iter()
        .filter(|id| text.contains(id.as_str()))
        .cloned()
        .collect()
}

/// Generates a routing decision into `key` and records the engine ids it
/// names under `recommended_agents`.
pub struct RouterStage {
    name: String,
    key: String,
    prompt: Prompt,
    known: Vec<String>,
    message: String,
}

impl RouterStage {
    pub const RECOMMENDED: &'static str = "recommended_agents";

    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        prompt: Prompt,
        known: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            prompt,
            known,
            message: message.into(),
        }
    }
}

#[async_trait::async_trait]
impl Stage for RouterStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> Vec<String> {
        self.prompt.reads()
    }

    fn writes(&self) -> Vec<String> {
        vec![self.key.clone(), Self::RECOMMENDED.to_string()]
    }

    fn uses_generator(&self) -> bool {
        true
    }

    async fn run(&self, mut ctx: WorkflowContext, env: &RunEnv) -> Result<WorkflowContext> {
        let (system, user) = self.prompt.render(&ctx, &[]);
        let decision = env.generate(&self.name, &system, &user).await?;
        let recommended = recommend(&decision, &self.known);
        debug!("{}: recommended {:?}", self.name, recommended);

        ctx.insert(self.key.clone(), decision);
        ctx.insert(Self::RECOMMENDED, Value::from(recommended));
        ctx.record(StepRecord::completed(self.name.clone(), self.message.clone()));
        Ok(ctx)
    }
}
