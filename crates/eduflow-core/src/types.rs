//! Core types for Eduflow

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Languages every workflow can generate content in.
pub const SUPPORTED_LANGUAGES: [&str; 10] = [
    "English", "Hindi", "Tamil", "Telugu", "Marathi", "Bengali", "Gujarati", "Kannada", "Odia",
    "Punjabi",
];

/// Grades 1-12.
pub const SUPPORTED_GRADES: RangeInclusive<u32> = 1..=12;

pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

pub fn is_supported_grade(grade: u32) -> bool {
    SUPPORTED_GRADES.contains(&grade)
}

/// Metadata mapping. Keeps insertion order so recomposed text is deterministic.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Localization posture of the generated content.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Aligned with the prescribed (NCERT) textbooks.
    #[default]
    Prebook,
    /// International practice adapted to the local classroom.
    External,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prebook => "prebook",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prebook" => Ok(Self::Prebook),
            "external" => Ok(Self::External),
            other => Err(format!("unknown content source: {}", other)),
        }
    }
}

/// Outcome of one executed stage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    /// The stage finished but fell back to a default for part of its output.
    Degraded,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Degraded => "degraded",
        }
    }
}

/// One entry of the audit trail.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRecord {
    pub step: String,
    pub status: StepStatus,
    pub message: String,
}

impl StepRecord {
    pub fn completed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Completed,
            message: message.into(),
        }
    }

    pub fn degraded(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Degraded,
            message: message.into(),
        }
    }
}

/// Final output of a workflow.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Static description of what an engine does.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capabilities {
    pub primary_function: String,
    pub features: Vec<String>,
    pub output_formats: Vec<String>,
    pub specializations: Vec<String>,
}

impl Capabilities {
    pub fn new(
        primary_function: &str,
        features: &[&str],
        output_formats: &[&str],
        specializations: &[&str],
    ) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            primary_function: primary_function.to_string(),
            features: owned(features),
            output_formats: owned(output_formats),
            specializations: owned(specializations),
        }
    }
}

/// Inputs of `Engine::process`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub prompt: String,
    pub grades: Vec<u32>,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub content_source: ContentSource,
    #[serde(default)]
    pub metadata: Metadata,
}

fn default_languages() -> Vec<String> {
    vec!["English".to_string()]
}

impl ProcessRequest {
    pub fn new(prompt: impl Into<String>, grades: Vec<u32>) -> Self {
        Self {
            prompt: prompt.into(),
            grades,
            languages: default_languages(),
            content_source: ContentSource::default(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_languages<S: Into<String>>(mut self, languages: impl IntoIterator<Item = S>) -> Self {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source(mut self, source: ContentSource) -> Self {
        self.content_source = source;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Output of `Engine::process`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub content: String,
    pub metadata: Metadata,
    pub workflow_steps: Vec<StepRecord>,
}

/// How a fan-out stage reacts when one element's generation fails.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FanOutPolicy {
    /// First failure aborts the whole run.
    #[default]
    FailFast,
    /// Failed elements keep their key with a placeholder; the step is marked degraded.
    Partial,
}

/// Collapse duplicates while keeping first-occurrence order.
pub fn dedup_ordered<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
