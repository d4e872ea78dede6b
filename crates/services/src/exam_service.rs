use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use exam_core::model::{AnswerKey, Exam, ExamFlow, ExamName, ExamSession};
use exam_core::scoring::{self, ExamResult};
use storage::repository::{ExamCatalog, StorageError};

use crate::Clock;
use crate::error::ExamServiceError;

/// A scored attempt, ready for the result screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedExam {
    pub exam: Option<ExamName>,
    pub result: ExamResult,
    pub key_available: bool,
    pub submitted_at: DateTime<Utc>,
    pub elapsed: Option<Duration>,
}

/// Orchestrates catalog access, exam start and grading.
#[derive(Clone)]
pub struct ExamService {
    clock: Clock,
    catalog: Arc<dyn ExamCatalog>,
}

impl ExamService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn ExamCatalog>) -> Self {
        Self { clock, catalog }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Exam names in ascending order. An unreadable catalog is reported as
    /// empty rather than failing the home screen.
    pub async fn list_exams(&self) -> Vec<ExamName> {
        match self.catalog.list_exams().await {
            Ok(names) => names,
            Err(err) => {
                tracing::warn!(error = %err, "exam catalog unreadable, showing empty list");
                Vec::new()
            }
        }
    }

    /// Load an exam that can actually be taken.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::NotFound` for an unknown exam,
    /// `ExamServiceError::NoPages` when it has no page images, or
    /// `ExamServiceError::Storage` for other catalog failures.
    pub async fn open_exam(&self, name: &ExamName) -> Result<Exam, ExamServiceError> {
        let exam = match self.catalog.load_exam(name).await {
            Ok(exam) => exam,
            Err(StorageError::NotFound) => return Err(ExamServiceError::NotFound(name.clone())),
            Err(err) => return Err(err.into()),
        };
        if !exam.has_pages() {
            tracing::warn!(exam = %name, "exam has no page images");
            return Err(ExamServiceError::NoPages(name.clone()));
        }
        Ok(exam)
    }

    /// Move the flow from Home into `exam`, stamping the start time.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Flow` if the flow is not on the home screen,
    /// or `ExamServiceError::NoPages` if the exam is empty.
    pub fn start(&self, flow: &mut ExamFlow, exam: &Exam) -> Result<(), ExamServiceError> {
        flow.start(exam, self.clock.now())?;
        tracing::info!(exam = %exam.name(), pages = exam.page_count(), "exam started");
        Ok(())
    }

    /// Answer key for `name`. Missing or malformed keys fall back to an
    /// unscorable key so review always works.
    pub async fn load_answer_key(&self, name: &ExamName) -> AnswerKey {
        match self.catalog.answer_key(name).await {
            Ok(Some(key)) => key,
            Ok(None) => {
                tracing::warn!(exam = %name, "no answer key, every question is unscorable");
                AnswerKey::unscorable()
            }
            Err(err) => {
                tracing::warn!(exam = %name, error = %err, "answer key unreadable, every question is unscorable");
                AnswerKey::unscorable()
            }
        }
    }

    /// Score the session against its exam's answer key.
    pub async fn grade(&self, session: &ExamSession) -> GradedExam {
        let key = match session.selected_exam() {
            Some(name) => self.load_answer_key(name).await,
            None => AnswerKey::unscorable(),
        };
        let result = scoring::score(session.answers(), &key);
        let submitted_at = self.clock.now();
        let elapsed = session.started_at().map(|started| submitted_at - started);

        tracing::info!(
            exam = ?session.selected_exam(),
            correct = result.correct_count(),
            score = result.score(),
            "exam graded"
        );

        GradedExam {
            exam: session.selected_exam().cloned(),
            result,
            key_available: !key.is_unscorable(),
            submitted_at,
            elapsed,
        }
    }
}
