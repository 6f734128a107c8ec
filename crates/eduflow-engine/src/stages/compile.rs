//! Result compiler: the content-producing stage before finalize

use crate::context::WorkflowContext;
use crate::stage::{Prompt, RunEnv, Stage};
use crate::template;
use eduflow_core::{Artifact, Metadata, Result, StepRecord};
use serde_json::Value;

/// Placeholder content when nothing else was produced.
pub const NO_CONTENT: &str = "No content generated";

/// One entry of the artifact's metadata.
#[derive(Clone, Debug)]
pub enum Flag {
    Value(Value),
    Grades,
    Languages,
    ContentSource,
    GradeCount,
    /// More than one language requested.
    Multilingual,
    /// Copy of a metadata entry; empty string when absent.
    Metadata(String),
}

impl Flag {
    pub fn text(s: &str) -> Self {
        Self::Value(Value::String(s.to_string()))
    }

    pub fn yes() -> Self {
        Self::Value(Value::Bool(true))
    }

    fn resolve(&self, ctx: &WorkflowContext) -> Value {
        match self {
            Self::Value(v) => v.clone(),
            Self::Grades => Value::from(ctx.grades.clone()),
            Self::Languages => Value::from(ctx.languages.clone()),
            Self::ContentSource => Value::from(ctx.content_source.as_str()),
            Self::GradeCount => Value::from(ctx.grades.len()),
            Self::Multilingual => Value::Bool(ctx.languages.len() > 1),
            Self::Metadata(key) => ctx
                .get(key)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
        }
    }
}

/// Assembles the final artifact from accumulated metadata.
///
/// An optional closing generation call is available to the template as
/// `{response}`. Missing metadata renders empty; the content is never empty.
pub struct ResultCompiler {
    name: String,
    closing: Option<Prompt>,
    template: String,
    flags: Vec<(String, Flag)>,
    message: String,
}

impl ResultCompiler {
    pub fn new(name: impl Into<String>, template: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            closing: None,
            template: template.into(),
            flags: Vec::new(),
            message: message.into(),
        }
    }

    pub fn closing(mut self, prompt: Prompt) -> Self {
        self.closing = Some(prompt);
        self
    }

    pub fn flag(mut self, key: impl Into<String>, flag: Flag) -> Self {
        self.flags.push((key.into(), flag));
        self
    }

    /// Render the artifact without touching the context.
    pub fn compile(&self, ctx: &WorkflowContext, response: &str) -> Artifact {
        let rendered = template::render(&self.template, ctx, &[("response", response)]);
        let content = if rendered.trim().is_empty() {
            NO_CONTENT.to_string()
        } else {
            rendered
        };

        let mut metadata = Metadata::new();
        for (key, flag) in &self.flags {
            metadata.insert(key.clone(), flag.resolve(ctx));
        }
        Artifact { content, metadata }
    }
}

#[async_trait::async_trait]
impl Stage for ResultCompiler {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> Vec<String> {
        let mut keys = self.closing.as_ref().map(Prompt::reads).unwrap_or_default();
        let flag_keys = self.flags.iter().filter_map(|(_, f)| match f {
            Flag::Metadata(k) => Some(k.clone()),
            _ => None,
        });
        for key in template::referenced_keys(&self.template).into_iter().chain(flag_keys) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    fn uses_generator(&self) -> bool {
        self.closing.is_some()
    }

    async fn run(&self, mut ctx: WorkflowContext, env: &RunEnv) -> Result<WorkflowContext> {
        let response = match &self.closing {
            Some(prompt) => {
                let (system, user) = prompt.render(&ctx, &[]);
                env.generate(&self.name, &system, &user).await?
            }
            None => String::new(),
        };
        let artifact = self.compile(&ctx, &response);
        ctx.set_result(artifact)?;
        ctx.record(StepRecord::completed(self.name.clone(), self.message.clone()));
        Ok(ctx)
    }
}
