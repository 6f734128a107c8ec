//! Error types for Eduflow

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation failed: {}", describe_invalid(.invalid_grades, .invalid_languages))]
    Validation {
        invalid_grades: Vec<u32>,
        invalid_languages: Vec<String>,
    },

    #[error("generation failed at stage '{stage}': {message}")]
    Generation { stage: String, message: String },

    #[error("workflow compilation failed: {0}")]
    Compilation(String),

    #[error("curriculum lookup failed: {0}")]
    Curriculum(String),

    #[error("agent not found: {0}")]
    AgentNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(invalid_grades: Vec<u32>, invalid_languages: Vec<String>) -> Self {
        Self::Validation {
            invalid_grades,
            invalid_languages,
        }
    }

    pub fn generation(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generation {
            stage: stage.into(),
            message: message.into(),
        }
    }

    pub fn compilation(message: impl Into<String>) -> Self {
        Self::Compilation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation { .. })
    }
}

fn describe_invalid(grades: &[u32], languages: &[String]) -> String {
    let mut parts = Vec::new();
    if !grades.is_empty() {
        parts.push(format!("unsupported grades: {:?}", grades));
    }
    if !languages.is_empty() {
        parts.push(format!("unsupported languages: {:?}", languages));
    }
    parts.join("; ")
}
