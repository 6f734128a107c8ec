//! Eduflow Engine - Sequential workflow orchestration for educational content
//!
//! Every agent is one configuration of the same machinery: a compiled chain
//! of stages threading a `WorkflowContext` from validation to finalize.

pub mod catalog;
pub mod context;
pub mod curriculum;
pub mod engine;
pub mod graph;
pub mod prompts;
pub mod stage;
pub mod stages;
pub mod template;
pub mod validator;

pub use catalog::{
    chat_request, lesson_plan_request, performance_request, AgentDefinition, EngineRegistry,
};
pub use context::WorkflowContext;
pub use curriculum::{CurriculumSource, CurriculumStage, HttpCurriculum, StaticCurriculum, Textbook};
pub use engine::Engine;
pub use graph::{CompiledWorkflow, WorkflowBuilder};
pub use stage::{Prompt, RunEnv, Stage};
pub use stages::{
    ContextAnalysisStage, FanOutAxis, FanOutStage, FinalizeStage, Flag, InitializeStage,
    PromptStage, ResultCompiler, RouterStage,
};
pub use validator::{ValidateStage, Validator};
