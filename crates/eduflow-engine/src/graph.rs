//! Workflow graph: build, compile, execute
//!
//! ```text
//! WorkflowBuilder { stages, edges, inputs }
//!   ↓ compile()
//! duplicate / unknown-edge checks → topological order (declaration order
//! breaks ties) → single entry + single terminal "finalize" → validation
//! before generation → closed metadata key schema
//!   ↓
//! CompiledWorkflow::execute(ctx, env) → stages in order, first error aborts
//! ```

use crate::context::WorkflowContext;
use crate::stage::{RunEnv, Stage};
use crate::stages::FINALIZE_STAGE;
use crate::validator::VALIDATION_STAGE;
use eduflow_core::{Error, Result};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

pub struct WorkflowBuilder {
    name: String,
    stages: Vec<Arc<dyn Stage>>,
    edges: Vec<(String, String)>,
    inputs: Vec<String>,
}

impl WorkflowBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
            edges: Vec::new(),
            inputs: Vec::new(),
        }
    }

    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Explicit edge. Without any edges the stages chain in declaration order.
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Metadata key the caller may supply. Absent inputs render empty.
    pub fn input(mut self, key: impl Into<String>) -> Self {
        self.inputs.push(key.into());
        self
    }

    pub fn compile(self) -> Result<CompiledWorkflow> {
        let fail = |msg: String| Error::compilation(format!("{}: {}", self.name, msg));

        if self.stages.is_empty() {
            return Err(fail("workflow has no stages".into()));
        }
        let count = self.stages.len();

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(count);
        for (i, stage) in self.stages.iter().enumerate() {
            if index.insert(stage.name(), i).is_some() {
                return Err(fail(format!("duplicate stage '{}'", stage.name())));
            }
        }

        let edges: Vec<(usize, usize)> = if self.edges.is_empty() {
            (1..count).map(|i| (i - 1, i)).collect()
        } else {
            let lookup = |name: &str| {
                index
                    .get(name)
                    .copied()
                    .ok_or_else(|| fail(format!("edge references unknown stage '{}'", name)))
            };
            self.edges
                .iter()
                .map(|(from, to)| Ok((lookup(from)?, lookup(to)?)))
                .collect::<Result<_>>()?
        };

        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); count];
        let mut in_degree = vec![0usize; count];
        for &(from, to) in &edges {
            successors[from].push(to);
            in_degree[to] += 1;
        }

        // Kahn's algorithm; the lowest declaration index goes first.
        let mut remaining = in_degree.clone();
        let mut ready: BTreeSet<usize> = (0..count).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(count);
        while let Some(i) = ready.pop_first() {
            order.push(i);
            for &next in &successors[i] {
                remaining[next] -= 1;
                if remaining[next] == 0 {
                    ready.insert(next);
                }
            }
        }
        if order.len() != count {
            let stuck: Vec<&str> = (0..count)
                .filter(|i| !order.contains(i))
                .map(|i| self.stages[i].name())
                .collect();
            return Err(fail(format!("cycle through {:?}", stuck)));
        }

        let entries = in_degree.iter().filter(|&&d| d == 0).count();
        if entries != 1 {
            return Err(fail(format!("expected one entry stage, found {}", entries)));
        }
        let terminals = successors.iter().filter(|s| s.is_empty()).count();
        if terminals != 1 {
            return Err(fail(format!("expected one terminal stage, found {}", terminals)));
        }

        let ordered: Vec<Arc<dyn Stage>> = order.iter().map(|&i| self.stages[i].clone()).collect();

        let terminal = ordered[count - 1].name();
        if terminal != FINALIZE_STAGE {
            return Err(fail(format!(
                "terminal stage is '{}', expected '{}'",
                terminal, FINALIZE_STAGE
            )));
        }

        let validation_at = ordered.iter().position(|s| s.name() == VALIDATION_STAGE);
        for (pos, stage) in ordered.iter().enumerate() {
            if stage.uses_generator() && validation_at.map_or(true, |v| pos < v) {
                return Err(fail(format!(
                    "stage '{}' calls the generation service before validation",
                    stage.name()
                )));
            }
        }

        let mut available: HashSet<String> = self.inputs.iter().cloned().collect();
        for stage in &ordered {
            if let Some(key) = stage.reads().into_iter().find(|k| !available.contains(k)) {
                return Err(fail(format!(
                    "stage '{}' reads '{}' which no earlier stage writes",
                    stage.name(),
                    key
                )));
            }
            available.extend(stage.writes());
        }

        debug!("Compiled workflow '{}' with {} stages", self.name, count);
        Ok(CompiledWorkflow {
            name: self.name,
            stages: ordered,
            inputs: self.inputs,
        })
    }
}

/// An ordered, checked list of stages.
pub struct CompiledWorkflow {
    name: String,
    stages: Vec<Arc<dyn Stage>>,
    inputs: Vec<String>,
}

impl std::fmt::Debug for CompiledWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledWorkflow")
            .field("name", &self.name)
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl CompiledWorkflow {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Run every stage in order. The first failure aborts the rest.
    pub async fn execute(&self, mut ctx: WorkflowContext, env: &RunEnv) -> Result<WorkflowContext> {
        for stage in &self.stages {
            let before = ctx.step_log().len();
            debug!("{} → {}", self.name, stage.name());
            ctx = stage.run(ctx, env).await?;

            let appended = ctx.step_log().len().saturating_sub(before);
            if appended != 1 {
                return Err(Error::Internal(format!(
                    "stage '{}' appended {} step records",
                    stage.name(),
                    appended
                )));
            }
        }
        Ok(ctx)
    }
}
