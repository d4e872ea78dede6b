use exam_core::model::{Choice, ExamSession, QUESTION_COUNT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub choice: Choice,
    pub label: String,
    pub selected: bool,
}

impl AnswerButtonVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.selected {
            "btn answer answer-selected"
        } else {
            "btn answer"
        }
    }
}

/// Everything the exam screen renders, derived from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamPageVm {
    pub image_src: Option<String>,
    pub page_label: String,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub question_label: String,
    pub question_value: String,
    pub has_prev_question: bool,
    pub has_next_question: bool,
    pub progress_label: String,
    pub answers: Vec<AnswerButtonVm>,
}

impl ExamPageVm {
    #[must_use]
    pub fn from_session(session: &ExamSession) -> Self {
        let page = session.current_page();
        let page_count = session.page_count();
        let question = session.current_question();
        let selected = session.current_answer();

        Self {
            image_src: session
                .current_page_image()
                .map(|image| image.path().display().to_string()),
            page_label: format!("Page {} / {}", page + 1, page_count.max(1)),
            has_prev_page: page > 0,
            has_next_page: page + 1 < page_count,
            question_label: format!("Question {question}"),
            question_value: question.to_string(),
            has_prev_question: question.prev().is_some(),
            has_next_question: question.next().is_some(),
            progress_label: format!("Answered {} / {QUESTION_COUNT}", session.answered_count()),
            answers: Choice::ALL
                .iter()
                .map(|choice| AnswerButtonVm {
                    choice: *choice,
                    label: choice.value().to_string(),
                    selected: selected == Some(*choice),
                })
                .collect(),
        }
    }
}
