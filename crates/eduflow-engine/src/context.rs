//! Per-run workflow context

use eduflow_core::{
    dedup_ordered, Artifact, ContentSource, Error, Metadata, ProcessRequest, Result, StepRecord,
};
use serde_json::Value;

/// The record threaded through one execution of a workflow.
///
/// Created fresh for every `Engine::process` call and dropped once the
/// response is built. Stages receive it by value and hand it back, so a
/// stage can be run in isolation against a hand-built context.
#[derive(Clone, Debug)]
pub struct WorkflowContext {
    agent_name: String,
    pub prompt: String,
    pub grades: Vec<u32>,
    pub languages: Vec<String>,
    pub content_source: ContentSource,
    metadata: Metadata,
    step_log: Vec<StepRecord>,
    result: Option<Artifact>,
}

impl WorkflowContext {
    /// Grades and languages are collapsed to ordered sets here.
    pub fn new(agent_name: impl Into<String>, request: ProcessRequest) -> Self {
        Self {
            agent_name: agent_name.into(),
            prompt: request.prompt,
            grades: dedup_ordered(&request.grades),
            languages: dedup_ordered(&request.languages),
            content_source: request.content_source,
            metadata: request.metadata,
            step_log: Vec::new(),
            result: None,
        }
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// String view of a metadata entry; absent keys read as empty.
    pub fn text(&self, key: &str) -> String {
        match self.metadata.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Add a metadata entry. Entries are never removed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn record(&mut self, record: StepRecord) {
        self.step_log.push(record);
    }

    pub fn step_log(&self) -> &[StepRecord] {
        &self.step_log
    }

    pub fn result(&self) -> Option<&Artifact> {
        self.result.as_ref()
    }

    /// Set the final artifact. A second call in the same run is a bug in the
    /// workflow definition and fails the run.
    pub fn set_result(&mut self, artifact: Artifact) -> Result<()> {
        if self.result.is_some() {
            return Err(Error::Internal(format!(
                "result already set for {} run",
                self.agent_name
            )));
        }
        self.result = Some(artifact);
        Ok(())
    }

    pub fn is_multi_grade(&self) -> bool {
        self.grades.len() > 1
    }

    pub fn grades_display(&self) -> String {
        self.grades
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn languages_display(&self) -> String {
        self.languages.join(", ")
    }

    pub(crate) fn into_parts(self) -> (Metadata, Vec<StepRecord>, Option<Artifact>) {
        (self.metadata, self.step_log, self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collapses_duplicates() {
        let req = ProcessRequest::new("Fractions", vec![4, 3, 4])
            .with_languages(["Hindi", "English", "Hindi"]);
        let ctx = WorkflowContext::new("Tester", req);
        assert_eq!(ctx.grades, vec![4, 3]);
        assert_eq!(ctx.languages, vec!["Hindi", "English"]);
        assert!(ctx.is_multi_grade());
        assert_eq!(ctx.grades_display(), "4, 3");
    }

    #[test]
    fn result_is_set_once() {
        let mut ctx = WorkflowContext::new("Tester", ProcessRequest::new("x", vec![1]));
        ctx.set_result(Artifact::default()).unwrap();
        assert!(ctx.set_result(Artifact::default()).is_err());
    }

    #[test]
    fn text_of_missing_key_is_empty() {
        let mut ctx = WorkflowContext::new("Tester", ProcessRequest::new("x", vec![1]));
        assert_eq!(ctx.text("absent"), "");
        ctx.insert("count", 3);
        assert_eq!(ctx.text("count"), "3");
    }
}
