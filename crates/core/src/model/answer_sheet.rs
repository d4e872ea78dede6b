use crate::model::choice::Choice;
use crate::model::ids::{QUESTION_COUNT, QuestionNumber};

const SLOTS: usize = QUESTION_COUNT as usize;

/// The user's marks, one slot per question. Every question is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: [Option<Choice>; SLOTS],
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [None; SLOTS],
        }
    }

    #[must_use]
    pub fn get(&self, question: QuestionNumber) -> Option<Choice> {
        self.slots[question.index()]
    }

    pub fn set(&mut self, question: QuestionNumber, choice: Choice) {
        self.slots[question.index()] = Some(choice);
    }

    pub fn clear(&mut self) {
        self.slots = [None; SLOTS];
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// `(question, answer)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionNumber, Option<Choice>)> + '_ {
        QuestionNumber::all().map(|q| (q, self.get(q)))
    }
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self::new()
    }
}
