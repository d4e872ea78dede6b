use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("invalid choice value: {0}")]
    InvalidChoice(u8),
}

//
// ─── CHOICE ───────────────────────────────────────────────────────────────────
//

/// One of the four options printed under every question.
///
/// "No selection" is modelled as `Option<Choice>::None`; its numeric form is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Choice {
    One,
    Two,
    Three,
    Four,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::One, Choice::Two, Choice::Three, Choice::Four];

    /// Converts a numeric choice (1-4) to a `Choice`.
    ///
    /// # Errors
    ///
    /// Returns `ChoiceError::InvalidChoice` for anything outside 1-4.
    pub fn from_u8(value: u8) -> Result<Self, ChoiceError> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(ChoiceError::InvalidChoice(value)),
        }
    }

    /// Decodes the 0-4 sheet encoding, where 0 means "none".
    ///
    /// # Errors
    ///
    /// Returns `ChoiceError::InvalidChoice` for values above 4.
    pub fn from_sheet_value(value: u8) -> Result<Option<Self>, ChoiceError> {
        if value == 0 {
            return Ok(None);
        }
        Self::from_u8(value).map(Some)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Choice::One => 1,
            Choice::Two => 2,
            Choice::Three => 3,
            Choice::Four => 4,
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = ChoiceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        choice.value()
    }
}

/// Numeric sheet value of an optional choice (0 when unset).
#[must_use]
pub fn sheet_value(choice: Option<Choice>) -> u8 {
    choice.map_or(0, Choice::value)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_choice_conversion_works() {
        assert_eq!(Choice::from_u8(1).unwrap(), Choice::One);
        assert_eq!(Choice::from_u8(4).unwrap(), Choice::Four);
        assert!(matches!(Choice::from_u8(0), Err(ChoiceError::InvalidChoice(0))));
        assert!(matches!(Choice::from_u8(5), Err(ChoiceError::InvalidChoice(5))));
    }

    #[test]
    fn sheet_value_zero_is_none() {
        assert_eq!(Choice::from_sheet_value(0).unwrap(), None);
        assert_eq!(Choice::from_sheet_value(3).unwrap(), Some(Choice::Three));
        assert!(Choice::from_sheet_value(9).is_err());
        assert_eq!(sheet_value(None), 0);
        assert_eq!(sheet_value(Some(Choice::Two)), 2);
    }

    #[test]
    fn serializes_as_sheet_number() {
        assert_eq!(serde_json::to_string(&Choice::Three).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Choice>("4").unwrap(), Choice::Four);
        assert!(serde_json::from_str::<Choice>("0").is_err());
        assert!(serde_json::from_str::<Choice>("5").is_err());
    }
}
