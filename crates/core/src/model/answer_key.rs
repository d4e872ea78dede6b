use crate::model::choice::Choice;
use crate::model::ids::{QUESTION_COUNT, QuestionNumber};

const SLOTS: usize = QUESTION_COUNT as usize;

/// Correct choice per question for one exam.
///
/// A question without an entry is unscorable and can never be answered
/// correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    slots: [Option<Choice>; SLOTS],
}

impl AnswerKey {
    /// A key with no entries. Used when an exam ships without one.
    #[must_use]
    pub fn unscorable() -> Self {
        Self {
            slots: [None; SLOTS],
        }
    }

    /// Builds a key from known entries; later duplicates win.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (QuestionNumber, Choice)>) -> Self {
        let mut key = Self::unscorable();
        for (question, choice) in entries {
            key.slots[question.index()] = Some(choice);
        }
        key
    }

    #[must_use]
    pub fn correct_for(&self, question: QuestionNumber) -> Option<Choice> {
        self.slots[question.index()]
    }

    /// Number of questions that have a correct choice defined.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_unscorable(&self) -> bool {
        self.defined_count() == 0
    }
}

impl Default for AnswerKey {
    fn default() -> Self {
        Self::unscorable()
    }
}
