//! Curriculum (NCERT textbook) lookup, injected into the stage that needs it

use crate::context::WorkflowContext;
use crate::stage::{RunEnv, Stage};
use eduflow_core::{Error, Result, StepRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Textbook {
    pub id: String,
    #[serde(rename = "class")]
    pub class_num: u32,
    pub subject: String,
    pub book_title: String,
    pub language: String,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub content_extracted: bool,
}

#[async_trait::async_trait]
pub trait CurriculumSource: Send + Sync {
    async fn textbooks_for_class(&self, grade: u32) -> Result<Vec<Textbook>>;
}

/// In-memory catalogue.
#[derive(Default)]
pub struct StaticCurriculum {
    books: Vec<Textbook>,
}

impl StaticCurriculum {
    pub fn new(books: Vec<Textbook>) -> Self {
        Self { books }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CurriculumSource for StaticCurriculum {
    async fn textbooks_for_class(&self, grade: u32) -> Result<Vec<Textbook>> {
        Ok(self
            .books
            .iter()
            .filter(|b| b.class_num == grade)
            .cloned()
            .collect())
    }
}

#[derive(Deserialize)]
struct TextbookList {
    #[serde(default)]
    data: Vec<Textbook>,
}

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Textbook catalogue served over HTTP (`GET {base}/api/ncert/textbooks/class/{n}`).
///
/// Every lookup is bounded by a timeout covering connect, headers and body.
pub struct HttpCurriculum {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpCurriculum {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait::async_trait]
impl CurriculumSource for HttpCurriculum {
    async fn textbooks_for_class(&self, grade: u32) -> Result<Vec<Textbook>> {
        let url = format!(
            "{}/api/ncert/textbooks/class/{}",
            self.base_url.trim_end_matches('/'),
            grade
        );
        debug!("Curriculum lookup: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Curriculum(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Error::Curriculum(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }
        let list: TextbookList = response
            .json()
            .await
            .map_err(|e| Error::Curriculum(e.to_string()))?;
        Ok(list.data)
    }
}

pub const CURRICULUM_CONTEXT: &str = "curriculum_context";

/// Writes a textbook summary for the requested grades into `curriculum_context`.
///
/// Textbooks are filtered to the first requested language. A failed lookup
/// degrades the step instead of failing the run.
pub struct CurriculumStage {
    source: Arc<dyn CurriculumSource>,
}

impl CurriculumStage {
    pub fn new(source: Arc<dyn CurriculumSource>) -> Self {
        Self { source }
    }

    async fn lookup(&self, ctx: &WorkflowContext, language: &str) -> Result<Vec<(u32, Vec<Textbook>)>> {
        let mut per_grade = Vec::with_capacity(ctx.grades.len());
        for &grade in &ctx.grades {
            let books: Vec<Textbook> = self
                .source
                .textbooks_for_class(grade)
                .await?
                .into_iter()
                .filter(|b| b.language == language)
                .collect();
            per_grade.push((grade, books));
        }
        Ok(per_grade)
    }
}

/// Plain-text summary handed to later prompts.
pub fn summarize(
    agent_name: &str,
    grades: &str,
    language: &str,
    per_grade: &[(u32, Vec<Textbook>)],
) -> String {
    let mut lines = vec![
        "NCERT TEXTBOOK DATABASE INTEGRATION".to_string(),
        format!("Agent Type: {}", agent_name),
        format!("Target Grades: {}", grades),
        format!("Language: {}", language),
        String::new(),
        "AVAILABLE NCERT TEXTBOOKS:".to_string(),
    ];

    let mut total = 0;
    for (grade, books) in per_grade.iter().filter(|(_, b)| !b.is_empty()) {
        lines.push(format!("\nClass {}:", grade));
        for book in books {
            lines.push(format!("  • {}: {}", book.subject, book.book_title));
            total += 1;
        }
    }

    if total == 0 {
        lines.push("  No NCERT textbooks found for the specified criteria.".to_string());
    } else {
        lines.push(String::new());
        lines.push(format!("Total Available Textbooks: {}", total));
        lines.push(
            "Use these textbooks as the primary reference for curriculum alignment.".to_string(),
        );
    }
    lines.join("\n")
}

#[async_trait::async_trait]
impl Stage for CurriculumStage {
    fn name(&self) -> &str {
        "curriculum_lookup"
    }

    fn writes(&self) -> Vec<String> {
        vec![CURRICULUM_CONTEXT.to_string()]
    }

    async fn run(&self, mut ctx: WorkflowContext, _env: &RunEnv) -> Result<WorkflowContext> {
        let language = ctx
            .languages
            .first()
            .cloned()
            .unwrap_or_else(|| "English".to_string());

        let (per_grade, record) = match self.lookup(&ctx, &language).await {
            Ok(per_grade) => {
                let found: usize = per_grade.iter().map(|(_, b)| b.len()).sum();
                let record = StepRecord::completed(
                    "curriculum_lookup",
                    format!("Found {} NCERT textbooks", found),
                );
                (per_grade, record)
            }
            Err(e) => {
                warn!("{}: {}", ctx.agent_name(), e);
                let record = StepRecord::degraded(
                    "curriculum_lookup",
                    format!("Curriculum unavailable: {}", e),
                );
                (Vec::new(), record)
            }
        };

        let summary = summarize(
            ctx.agent_name(),
            &ctx.grades_display(),
            &language,
            &per_grade,
        );
        ctx.insert(CURRICULUM_CONTEXT, summary);
        ctx.record(record);
        Ok(ctx)
    }
}
