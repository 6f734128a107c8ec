use crate::context::WorkflowContext;
use crate::stage::{RunEnv, Stage};
use crate::stages::compile::NO_CONTENT;
use crate::template;
use eduflow_core::{Artifact, Metadata, Result, StepRecord};

pub const FINALIZE_STAGE: &str = "finalize";

/// Opens the step log.
pub struct InitializeStage;

#[async_trait::async_trait]
impl Stage for InitializeStage {
    fn name(&self) -> &str {
        "initialize"
    }

    async fn run(&self, mut ctx: WorkflowContext, _env: &RunEnv) -> Result<WorkflowContext> {
        let message = format!("Initialized {} agent", ctx.agent_name());
        ctx.record(StepRecord::completed("initialize", message));
        Ok(ctx)
    }
}

const CONTEXT_ANALYSIS: &str = "\
Educational Context Analysis for {agent_name}:
- Target Grades: {grades}
- Languages: {languages}
- Content Source: {content_source_upper}
- Multi-grade classroom: {multi_grade}";

/// Derives descriptive classroom facts into `context_analysis`.
pub struct ContextAnalysisStage;

#[async_trait::async_trait]
impl Stage for ContextAnalysisStage {
    fn name(&self) -> &str {
        "context_analysis"
    }

    fn writes(&self) -> Vec<String> {
        vec!["context_analysis".to_string()]
    }

    async fn run(&self, mut ctx: WorkflowContext, _env: &RunEnv) -> Result<WorkflowContext> {
        let analysis = template::render(CONTEXT_ANALYSIS, &ctx, &[]);
        ctx.insert("context_analysis", analysis);
        ctx.record(StepRecord::completed(
            "context_analysis",
            "Educational context analyzed",
        ));
        Ok(ctx)
    }
}

/// Terminal stage. Guarantees a result exists.
pub struct FinalizeStage;

#[async_trait::async_trait]
impl Stage for FinalizeStage {
    fn name(&self) -> &str {
        FINALIZE_STAGE
    }

    async fn run(&self, mut ctx: WorkflowContext, _env: &RunEnv) -> Result<WorkflowContext> {
        if ctx.result().is_none() {
            ctx.set_result(Artifact {
                content: NO_CONTENT.to_string(),
                metadata: Metadata::new(),
            })?;
        }
        ctx.record(StepRecord::completed(FINALIZE_STAGE, "Result finalized"));
        Ok(ctx)
    }
}
