use services::GradedExam;

use crate::vm::time_fmt::{format_datetime, format_elapsed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub question: u8,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub summary_line: String,
    pub correct: u32,
    pub incorrect: u32,
    pub score: u32,
    pub key_missing: bool,
    pub submitted_at_str: String,
    pub elapsed_str: Option<String>,
    pub rows: Vec<ResultRowVm>,
}

impl From<&GradedExam> for ResultVm {
    fn from(graded: &GradedExam) -> Self {
        let result = &graded.result;
        let correct = result.correct_count();
        let incorrect = result.incorrect_count();
        let score = result.score();

        Self {
            summary_line: format!("Correct: {correct} / Incorrect: {incorrect} / Score: {score}"),
            correct,
            incorrect,
            score,
            key_missing: !graded.key_available,
            submitted_at_str: format_datetime(graded.submitted_at),
            elapsed_str: graded.elapsed.map(format_elapsed),
            rows: result
                .rows()
                .iter()
                .map(|row| ResultRowVm {
                    question: row.question.value(),
                    user_answer: row.user_value().to_string(),
                    correct_answer: row.correct_value().to_string(),
                    is_correct: row.is_correct,
                })
                .collect(),
        }
    }
}
