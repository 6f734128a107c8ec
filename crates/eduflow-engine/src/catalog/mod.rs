//! The agent catalog: every public engine as a workflow definition
//!
//! ```text
//! initialize → validation → context_analysis → <agent stages> → <compiler> → finalize
//! ```
//!
//! The master chatbot is built last so its classification prompt can list
//! every other engine.

mod assessment;
mod chat;
mod content;
mod design;
mod planning;

use crate::curriculum::CurriculumSource;
use crate::engine::Engine;
use crate::graph::WorkflowBuilder;
use crate::stage::RunEnv;
use crate::stages::{ContextAnalysisStage, InitializeStage};
use crate::validator::ValidateStage;
use eduflow_core::{Capabilities, ContentSource, Error, Metadata, ProcessRequest, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Declarative description of one engine, compiled by [`AgentDefinition::build`].
pub struct AgentDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub capabilities: Capabilities,
    pub workflow: WorkflowBuilder,
}

impl AgentDefinition {
    pub fn build(self, env: RunEnv) -> Result<Engine> {
        let workflow = self.workflow.compile()?;
        Ok(Engine::new(self.id, self.name, self.capabilities, workflow, env))
    }
}

/// Stages every workflow opens with.
pub(crate) fn preamble(id: &str) -> WorkflowBuilder {
    WorkflowBuilder::new(id)
        .stage(InitializeStage)
        .stage(ValidateStage)
        .stage(ContextAnalysisStage)
}

/// The router is listed right after this agent.
pub const CHATBOT_FOLLOWS: &str = "audio-assessment";

/// All definitions, in public order. The router's directory covers every
/// other definition.
pub fn definitions(curriculum: Arc<dyn CurriculumSource>) -> Vec<AgentDefinition> {
    let mut defs = vec![
        content::content_generation(),
        content::differentiated_materials(),
        planning::lesson_planner(curriculum.clone()),
        planning::knowledge_base(curriculum),
        design::visual_aids(),
        design::gamified_teaching(),
        assessment::classroom_analytics(),
        assessment::audio_assessment(),
        assessment::performance_analysis(),
        design::ar_integration(),
    ];

    let directory: Vec<(String, String)> = defs
        .iter()
        .map(|d| (d.id.to_string(), d.capabilities.primary_function.clone()))
        .collect();
    let at = defs
        .iter()
        .position(|d| d.id == CHATBOT_FOLLOWS)
        .map_or(defs.len(), |i| i + 1);
    defs.insert(at, chat::master_chatbot(&directory));
    defs
}

/// Compiled engines keyed by id.
pub struct EngineRegistry {
    engines: Vec<Arc<Engine>>,
}

impl EngineRegistry {
    /// Compile every definition. Any compilation error is returned as is.
    pub fn new(env: RunEnv, curriculum: Arc<dyn CurriculumSource>) -> Result<Self> {
        let engines = definitions(curriculum)
            .into_iter()
            .map(|def| def.build(env.clone()).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;
        info!("Engine registry ready: {} agents", engines.len());
        Ok(Self { engines })
    }

    pub fn get(&self, id: &str) -> Option<Arc<Engine>> {
        self.engines.iter().find(|e| e.id() == id).cloned()
    }

    /// Like [`get`](Self::get) but unknown ids become `AgentNotFound`.
    pub fn resolve(&self, id: &str) -> Result<Arc<Engine>> {
        self.get(id)
            .ok_or_else(|| Error::AgentNotFound(id.to_string()))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Engine>> {
        self.engines.iter()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

/// Request for the lesson planner: topic plus an intended duration.
pub fn lesson_plan_request(
    topic: &str,
    grades: Vec<u32>,
    duration: &str,
    languages: Vec<String>,
    content_source: ContentSource,
) -> ProcessRequest {
    ProcessRequest::new(
        format!(
            "Create a comprehensive lesson plan for: {} (Duration: {})",
            topic, duration
        ),
        grades,
    )
    .with_languages(languages)
    .with_source(content_source)
    .with_metadata("duration", duration)
}

/// Request for performance analysis over raw student data.
pub fn performance_request(student_data: Value, grades: Vec<u32>, subject: &str) -> ProcessRequest {
    ProcessRequest::new(
        format!("Analyze performance data for {}: {}", subject, student_data),
        grades,
    )
    .with_source(ContentSource::Prebook)
    .with_metadata("subject", subject)
    .with_metadata("student_data", student_data)
}

/// Request for the master chatbot. `context` becomes the run's metadata and
/// may carry a `content_source`.
pub fn chat_request(
    message: &str,
    grades: Vec<u32>,
    languages: Vec<String>,
    context: Metadata,
) -> ProcessRequest {
    let source = context
        .get("content_source")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    let mut request = ProcessRequest::new(message, grades)
        .with_languages(languages)
        .with_source(source);
    request.metadata = context;
    request
}
