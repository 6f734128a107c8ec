//! Stage trait and the run environment stages execute against
//!
//! Each stage is a self-contained unit implementing the Stage trait. A
//! workflow is a compiled list of stages; see `graph.rs`.

use crate::context::WorkflowContext;
use crate::template;
use eduflow_core::{Error, FanOutConfig, Result};
use eduflow_llm::GenerationService;
use std::sync::Arc;

/// Collaborators shared by every stage of every run.
#[derive(Clone)]
pub struct RunEnv {
    pub generator: Arc<dyn GenerationService>,
    pub fan_out: FanOutConfig,
}

impl RunEnv {
    pub fn new(generator: Arc<dyn GenerationService>) -> Self {
        Self {
            generator,
            fan_out: FanOutConfig::default(),
        }
    }

    pub fn with_fan_out(mut self, fan_out: FanOutConfig) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// One generation call. Any failure becomes a `Generation` error naming `stage`.
    pub async fn generate(&self, stage: &str, system: &str, user: &str) -> Result<String> {
        self.generator
            .generate(system, user)
            .await
            .map_err(|e| Error::generation(stage, e.to_string()))
    }
}

/// The Stage trait. Implement this to add a workflow step.
///
/// Contract: `run` appends exactly one step record to the context on
/// success. The executor enforces it.
#[async_trait::async_trait]
pub trait Stage: Send + Sync {
    /// Unique name within a workflow; also the `step` of its log entry.
    fn name(&self) -> &str;

    /// Metadata keys this stage expects an earlier stage (or the caller) to provide.
    fn reads(&self) -> Vec<String> {
        Vec::new()
    }

    /// Metadata keys this stage adds.
    fn writes(&self) -> Vec<String> {
        Vec::new()
    }

    /// Whether this stage calls the generation service.
    fn uses_generator(&self) -> bool {
        false
    }

    async fn run(&self, ctx: WorkflowContext, env: &RunEnv) -> Result<WorkflowContext>;
}

/// A system and user instruction pair, both templates.
#[derive(Clone, Debug)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    pub fn render(&self, ctx: &WorkflowContext, locals: &[(&str, &str)]) -> (String, String) {
        (
            template::render(&self.system, ctx, locals),
            template::render(&self.user, ctx, locals),
        )
    }

    pub fn reads(&self) -> Vec<String> {
        let mut keys = template::referenced_keys(&self.system);
        for key in template::referenced_keys(&self.user) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}
