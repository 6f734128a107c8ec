//! Engine: one configured workflow plus the collaborators it runs against

use crate::context::WorkflowContext;
use crate::graph::CompiledWorkflow;
use crate::stage::RunEnv;
use eduflow_core::{Capabilities, Error, ProcessRequest, ProcessResponse, Result};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

pub struct Engine {
    id: String,
    name: String,
    capabilities: Capabilities,
    workflow: CompiledWorkflow,
    env: RunEnv,
}

impl Engine {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capabilities: Capabilities,
        workflow: CompiledWorkflow,
        env: RunEnv,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capabilities,
            workflow,
            env,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn workflow(&self) -> &CompiledWorkflow {
        &self.workflow
    }

    /// Run the workflow once.
    ///
    /// Response metadata is the accumulated context metadata, then the
    /// result flags, then `agent_name`, `grades`, `languages` and
    /// `content_source`. Later entries overwrite earlier ones.
    pub async fn process(&self, request: ProcessRequest) -> Result<ProcessResponse> {
        let run_id = Uuid::new_v4().to_string();
        let run = &run_id[..8];
        let ctx = WorkflowContext::new(self.name.clone(), request);
        info!(
            "[{}] {} started: grades [{}], languages [{}], source {}",
            run,
            self.id,
            ctx.grades_display(),
            ctx.languages_display(),
            ctx.content_source
        );

        let grades = Value::from(ctx.grades.clone());
        let languages = Value::from(ctx.languages.clone());
        let source = ctx.content_source;

        let ctx = match self.workflow.execute(ctx, &self.env).await {
            Ok(ctx) => ctx,
            Err(e) => {
                if e.is_generation() {
                    error!("[{}] {} failed: {}", run, self.id, e);
                } else {
                    info!("[{}] {} rejected: {}", run, self.id, e);
                }
                return Err(e);
            }
        };

        let (mut metadata, workflow_steps, result) = ctx.into_parts();
        let artifact = result
            .ok_or_else(|| Error::Internal(format!("{} finished without a result", self.id)))?;

        metadata.extend(artifact.metadata);
        metadata.insert("agent_name".into(), Value::from(self.name.clone()));
        metadata.insert("grades".into(), grades);
        metadata.insert("languages".into(), languages);
        metadata.insert("content_source".into(), Value::from(source.as_str()));

        info!(
            "[{}] {} finished: {} steps, {} chars",
            run,
            self.id,
            workflow_steps.len(),
            artifact.content.len()
        );
        Ok(ProcessResponse {
            content: artifact.content,
            metadata,
            workflow_steps,
        })
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("workflow", &self.workflow)
            .finish()
    }
}
