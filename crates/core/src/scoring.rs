//! Grading of an answer sheet against an answer key.
//!
//! A question counts as correct only when the key defines a choice for it and
//! the user marked that same choice. Questions without a key entry are never
//! correct, even when left blank.

use crate::model::{AnswerKey, AnswerSheet, Choice, QUESTION_COUNT, QuestionNumber, sheet_value};

/// Points awarded per correct answer (50 questions, 100-point scale).
pub const POINTS_PER_CORRECT: u32 = 2;

/// One row of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionResult {
    pub question: QuestionNumber,
    pub user_answer: Option<Choice>,
    pub correct_answer: Option<Choice>,
    pub is_correct: bool,
}

impl QuestionResult {
    /// User answer in 0-4 sheet form.
    #[must_use]
    pub fn user_value(&self) -> u8 {
        sheet_value(self.user_answer)
    }

    /// Correct answer in 0-4 sheet form.
    #[must_use]
    pub fn correct_value(&self) -> u8 {
        sheet_value(self.correct_answer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamResult {
    rows: Vec<QuestionResult>,
    correct_count: u32,
}

impl ExamResult {
    /// Rows in question order 1..=50.
    #[must_use]
    pub fn rows(&self) -> &[QuestionResult] {
        &self.rows
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        u32::from(QUESTION_COUNT) - self.correct_count
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        let answered = self.rows.iter().filter(|row| row.user_answer.is_some()).count();
        u32::try_from(answered).unwrap_or(u32::MAX)
    }

    /// Score on the 100-point scale.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct_count * POINTS_PER_CORRECT
    }
}

#[must_use]
pub fn score(answers: &AnswerSheet, key: &AnswerKey) -> ExamResult {
    let rows: Vec<QuestionResult> = QuestionNumber::all()
        .map(|question| {
            let user_answer = answers.get(question);
            let correct_answer = key.correct_for(question);
            QuestionResult {
                question,
                user_answer,
                correct_answer,
                is_correct: correct_answer.is_some() && user_answer == correct_answer,
            }
        })
        .collect();

    let correct = rows.iter().filter(|row| row.is_correct).count();
    ExamResult {
        rows,
        correct_count: u32::try_from(correct).unwrap_or(u32::MAX),
    }
}
