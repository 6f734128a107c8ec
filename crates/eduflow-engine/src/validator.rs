//! Input validation gate

use crate::context::WorkflowContext;
use crate::stage::{RunEnv, Stage};
use eduflow_core::{is_supported_grade, is_supported_language, Error, Result, StepRecord};
use tracing::warn;

pub struct Validator;

impl Validator {
    /// Fails with both invalid subsets when either is non-empty.
    pub fn check(grades: &[u32], languages: &[String]) -> Result<()> {
        let invalid_grades: Vec<u32> = grades
            .iter()
            .copied()
            .filter(|g| !is_supported_grade(*g))
            .collect();
        let invalid_languages: Vec<String> = languages
            .iter()
            .filter(|l| !is_supported_language(l))
            .cloned()
            .collect();

        if invalid_grades.is_empty() && invalid_languages.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(invalid_grades, invalid_languages))
        }
    }
}

/// Stage wrapper around [`Validator`]. Must precede every generating stage.
pub struct ValidateStage;

pub const VALIDATION_STAGE: &str = "validation";

#[async_trait::async_trait]
impl Stage for ValidateStage {
    fn name(&self) -> &str {
        VALIDATION_STAGE
    }

    async fn run(&self, mut ctx: WorkflowContext, _env: &RunEnv) -> Result<WorkflowContext> {
        if let Err(e) = Validator::check(&ctx.grades, &ctx.languages) {
            warn!("{}: {}", ctx.agent_name(), e);
            return Err(e);
        }
        ctx.record(StepRecord::completed(
            VALIDATION_STAGE,
            "Input validation successful",
        ));
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_domains() {
        assert!(Validator::check(&[1, 6, 12], &["English".into(), "Odia".into()]).is_ok());
    }

    #[test]
    fn reports_both_sides() {
        let err = Validator::check(&[0, 4, 13], &["Klingon".into(), "Tamil".into()]).unwrap_err();
        match err {
            Error::Validation {
                invalid_grades,
                invalid_languages,
            } => {
                assert_eq!(invalid_grades, vec![0, 13]);
                assert_eq!(invalid_languages, vec!["Klingon"]);
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }
}
