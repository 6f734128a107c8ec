//! Fan-out merger: one generation call per language or grade, merged by key

use crate::context::WorkflowContext;
use crate::stage::{Prompt, RunEnv, Stage};
use crate::template;
use eduflow_core::{FanOutPolicy, Metadata, Result, StepRecord};
use futures::StreamExt;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

/// Collection a fan-out stage iterates over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FanOutAxis {
    /// Keyed by language name, local `{language}`.
    Languages,
    /// Keyed `grade_{n}`, local `{grade}`.
    Grades,
}

impl FanOutAxis {
    /// `(merge key, (local name, local value))` for every element, in context order.
    fn elements(&self, ctx: &WorkflowContext) -> Vec<(String, (&'static str, String))> {
        match self {
            Self::Languages => ctx
                .languages
                .iter()
                .map(|l| (l.clone(), ("language", l.clone())))
                .collect(),
            Self::Grades => ctx
                .grades
                .iter()
                .map(|g| (format!("grade_{}", g), ("grade", g.to_string())))
                .collect(),
        }
    }
}

/// Merged output of one fan-out.
#[derive(Debug, Default)]
pub struct Merged {
    pub entries: Metadata,
    /// Keys whose call failed (only populated under `FanOutPolicy::Partial`).
    pub failed: Vec<String>,
}

/// Run `call` once per element with at most `max_concurrency` in flight.
///
/// Entries come back in element order whatever order the calls finish in.
/// Under `FailFast` the first failure (in element order) is returned and
/// the in-flight calls are dropped.
pub async fn fan_out<T, F, Fut>(
    elements: Vec<(String, T)>,
    max_concurrency: usize,
    policy: FanOutPolicy,
    call: F,
) -> Result<Merged>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let calls = elements.into_iter().map(|(key, item)| {
        let pending = call(item);
        async move { (key, pending.await) }
    });
    let results = futures::stream::iter(calls).buffered(max_concurrency.max(1));
    tokio::pin!(results);

    let mut merged = Merged::default();
    while let Some((key, outcome)) = results.next().await {
        match outcome {
            Ok(text) => {
                merged.entries.insert(key, Value::String(text));
            }
            Err(e) => match policy {
                FanOutPolicy::FailFast => return Err(e),
                FanOutPolicy::Partial => {
                    warn!("fan-out element '{}' failed: {}", key, e);
                    let apology = format!(
                        "I apologize, but content for {} could not be generated: {}",
                        key, e
                    );
                    merged.entries.insert(key.clone(), Value::String(apology));
                    merged.failed.push(key);
                }
            },
        }
    }
    Ok(merged)
}

/// Stage form of [`fan_out`]. Writes the merged map under `key`.
pub struct FanOutStage {
    name: String,
    key: String,
    axis: FanOutAxis,
    prompt: Prompt,
    /// Template; `{count}` is the number of elements.
    message: String,
}

impl FanOutStage {
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        axis: FanOutAxis,
        prompt: Prompt,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            axis,
            prompt,
            message: message.into(),
        }
    }
}

#[async_trait::async_trait]
impl Stage for FanOutStage {
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
        let elements = self.axis.elements(&ctx);
        let count = elements.len();
        debug!("{}: fanning out over {} elements", self.name, count);

        let merged = {
            let snapshot = &ctx;
            fan_out(
                elements,
                env.fan_out.max_concurrency,
                env.fan_out.policy,
                |(local, value): (&'static str, String)| {
                    let (system, user) = self.prompt.render(snapshot, &[(local, value.as_str())]);
                    async move { env.generate(&self.name, &system, &user).await }
                },
            )
            .await?
        };

        let failed = merged.failed.len();
        ctx.insert(self.key.clone(), Value::Object(merged.entries));

        let count_text = count.to_string();
        let message = template::render(&self.message, &ctx, &[("count", count_text.as_str())]);
        if failed == 0 {
            ctx.record(StepRecord::completed(self.name.clone(), message));
        } else {
            ctx.record(StepRecord::degraded(
                self.name.clone(),
                format!("{} ({} of {} failed)", message, failed, count),
            ));
        }
        Ok(ctx)
    }
}
