use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerSheet, Choice, Exam, ExamName, PageImage, QuestionNumber};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("exam {name} has no pages")]
    NoPages { name: ExamName },
}

/// In-progress attempt at one exam.
///
/// Navigation is clamped: out-of-range requests are ignored rather than
/// wrapped or reported, so the page index always stays below the page count
/// and the question number always stays in `1..=50`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExamSession {
    selected_exam: Option<ExamName>,
    pages: Vec<PageImage>,
    current_page: usize,
    current_question: QuestionNumber,
    answers: AnswerSheet,
    started_at: Option<DateTime<Utc>>,
}

impl ExamSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `exam` and begin a fresh attempt at `started_at`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPages` when the exam has no pages; the
    /// session is left untouched.
    pub fn start_exam(&mut self, exam: &Exam, started_at: DateTime<Utc>) -> Result<(), SessionError> {
        if !exam.has_pages() {
            return Err(SessionError::NoPages {
                name: exam.name().clone(),
            });
        }

        self.answers.clear();
        self.pages = exam.pages().to_vec();
        self.selected_exam = Some(exam.name().clone());
        self.current_page = 0;
        self.current_question = QuestionNumber::FIRST;
        self.started_at = Some(started_at);
        Ok(())
    }

    /// Returns `true` if the page changed.
    pub fn goto_page(&mut self, index: usize) -> bool {
        if index >= self.pages.len() || index == self.current_page {
            return false;
        }
        self.current_page = index;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.goto_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(index) => self.goto_page(index),
            None => false,
        }
    }

    /// Ignores anything outside `1..=50`.
    pub fn set_current_question(&mut self, n: u32) -> bool {
        match QuestionNumber::new(n) {
            Some(question) => {
                self.current_question = question;
                true
            }
            None => false,
        }
    }

    /// Edit-dialog entry point; non-numeric or out-of-range text is ignored.
    pub fn set_current_question_from_input(&mut self, raw: &str) -> bool {
        match QuestionNumber::parse_input(raw) {
            Some(question) => {
                self.current_question = question;
                true
            }
            None => false,
        }
    }

    pub fn next_question(&mut self) -> bool {
        match self.current_question.next() {
            Some(question) => {
                self.current_question = question;
                true
            }
            None => false,
        }
    }

    pub fn prev_question(&mut self) -> bool {
        match self.current_question.prev() {
            Some(question) => {
                self.current_question = question;
                true
            }
            None => false,
        }
    }

    /// Mark `choice` for the current question, replacing any earlier mark.
    pub fn select_answer(&mut self, choice: Choice) {
        self.answers.set(self.current_question, choice);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn selected_exam(&self) -> Option<&ExamName> {
        self.selected_exam.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.selected_exam.is_some() && !self.pages.is_empty()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn current_page_image(&self) -> Option<&PageImage> {
        self.pages.get(self.current_page)
    }

    #[must_use]
    pub fn current_question(&self) -> QuestionNumber {
        self.current_question
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<Choice> {
        self.answers.get(self.current_question)
    }

    #[must_use]
    pub fn answer_for(&self, question: QuestionNumber) -> Option<Choice> {
        self.answers.get(question)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}
