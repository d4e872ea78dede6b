use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of questions on every exam sheet.
pub const QUESTION_COUNT: u8 = 50;

/// Name of an exam, taken from its catalog directory.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExamName(String);

impl ExamName {
    /// Creates a new `ExamName`.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the name is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ParseIdError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ParseIdError {
                kind: "ExamName".to_string(),
            });
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One-based question number, always within `1..=QUESTION_COUNT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionNumber(u8);

impl QuestionNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(QUESTION_COUNT);

    /// Returns `None` when `n` is outside `1..=QUESTION_COUNT`.
    #[must_use]
    pub fn new(n: u32) -> Option<Self> {
        u8::try_from(n)
            .ok()
            .filter(|n| (1..=QUESTION_COUNT).contains(n))
            .map(Self)
    }

    /// Parses free-form user input such as the edit-question dialog text.
    #[must_use]
    pub fn parse_input(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(Self::new)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based slot for fixed-size per-question tables.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(u32::from(self.0) + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::new(u32::from(self.0).saturating_sub(1))
    }

    /// All question numbers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=QUESTION_COUNT).map(Self)
    }
}

impl Default for QuestionNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Debug for ExamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExamName({:?})", self.0)
    }
}

impl fmt::Debug for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

impl fmt::Display for ExamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an identifier from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ExamName {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ExamName {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExamName> for String {
    fn from(name: ExamName) -> Self {
        name.0
    }
}

impl TryFrom<u8> for QuestionNumber {
    type Error = ParseIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value)).ok_or_else(|| ParseIdError {
            kind: "QuestionNumber".to_string(),
        })
    }
}

impl From<QuestionNumber> for u8 {
    fn from(question: QuestionNumber) -> Self {
        question.0
    }
}

impl FromStr for QuestionNumber {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_input(s).ok_or_else(|| ParseIdError {
            kind: "QuestionNumber".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exam_name_rejects_blank() {
        assert!(ExamName::new("   ").is_err());
        assert_eq!(ExamName::new("2024-1").unwrap().as_str(), "2024-1");
    }

    #[test]
    fn question_number_bounds() {
        assert!(QuestionNumber::new(0).is_none());
        assert!(QuestionNumber::new(51).is_none());
        assert_eq!(QuestionNumber::new(50), Some(QuestionNumber::LAST));
        assert_eq!(QuestionNumber::LAST.next(), None);
        assert_eq!(QuestionNumber::FIRST.prev(), None);
    }

    #[test]
    fn parse_input_trims_and_validates() {
        assert_eq!(QuestionNumber::parse_input(" 7 ").map(QuestionNumber::value), Some(7));
        assert_eq!(QuestionNumber::parse_input("-3"), None);
        assert_eq!(QuestionNumber::parse_input("abc"), None);
        assert_eq!(QuestionNumber::parse_input(""), None);
        assert!("99".parse::<QuestionNumber>().is_err());
    }

    #[test]
    fn all_covers_every_question_in_order() {
        let all: Vec<u8> = QuestionNumber::all().map(QuestionNumber::value).collect();
        assert_eq!(all.len(), usize::from(QUESTION_COUNT));
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&50));
    }

    #[test]
    fn deserialize_enforces_bounds() {
        assert!(serde_json::from_str::<QuestionNumber>("0").is_err());
        assert!(serde_json::from_str::<QuestionNumber>("51").is_err());
        assert!(serde_json::from_str::<ExamName>("\"   \"").is_err());

        let q: QuestionNumber = serde_json::from_str("50").unwrap();
        assert_eq!(q, QuestionNumber::LAST);
        assert_eq!(serde_json::to_string(&q).unwrap(), "50");

        let name: ExamName = serde_json::from_str("\"2024-1\"").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"2024-1\"");
    }
}
