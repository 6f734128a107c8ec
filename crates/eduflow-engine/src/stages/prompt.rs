use crate::context::WorkflowContext;
use crate::stage::{Prompt, RunEnv, Stage};
use eduflow_core::{Result, StepRecord};
use tracing::debug;

/// One generation call whose output lands under a single metadata key.
pub struct PromptStage {
    name: String,
    key: String,
    prompt: Prompt,
    message: String,
}

impl PromptStage {
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        prompt: Prompt,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            prompt,
            message: message.into(),
        }
    }
}

#[async_trait::async_trait]
impl Stage for PromptStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> Vec<String> {
        self.prompt.reads()
    }

    fn writes(&self) -> Vec<String> {
        vec![self.key.clone()]
    }

    fn uses_generator(&self) -> bool {
        true
    }

    async fn run(&self, mut ctx: WorkflowContext, env: &RunEnv) -> Result<WorkflowContext> {
        let (system, user) = self.prompt.render(&ctx, &[]);
        let text = env.generate(&self.name, &system, &user).await?;
        debug!("{}: {} chars into '{}'", self.name, text.len(), self.key);
        ctx.insert(self.key.clone(), text);
        ctx.record(StepRecord::completed(self.name.clone(), self.message.clone()));
        Ok(ctx)
    }
}
