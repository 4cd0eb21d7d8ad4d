use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// One pole of one personality dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl TraitLetter {
    pub const ALL: [TraitLetter; 8] = [
        TraitLetter::E,
        TraitLetter::I,
        TraitLetter::S,
        TraitLetter::N,
        TraitLetter::T,
        TraitLetter::F,
        TraitLetter::J,
        TraitLetter::P,
    ];

    /// Uppercase only: lowercase letters never matched a tally in the source sheets.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'E' => Some(TraitLetter::E),
            'I' => Some(TraitLetter::I),
            'S' => Some(TraitLetter::S),
            'N' => Some(TraitLetter::N),
            'T' => Some(TraitLetter::T),
            'F' => Some(TraitLetter::F),
            'J' => Some(TraitLetter::J),
            'P' => Some(TraitLetter::P),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TraitLetter::E => 'E',
            TraitLetter::I => 'I',
            TraitLetter::S => 'S',
            TraitLetter::N => 'N',
            TraitLetter::T => 'T',
            TraitLetter::F => 'F',
            TraitLetter::J => 'J',
            TraitLetter::P => 'P',
        }
    }

    /// Human-readable pole name shown on the results screen
    pub fn pole_name(self) -> &'static str {
        match self {
            TraitLetter::E => "Extraversion",
            TraitLetter::I => "Introversion",
            TraitLetter::S => "Sensing",
            TraitLetter::N => "Intuition",
            TraitLetter::T => "Thinking",
            TraitLetter::F => "Feeling",
            TraitLetter::J => "Judging",
            TraitLetter::P => "Perceiving",
        }
    }
}

impl fmt::Display for TraitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated trait code such as `E2` or `J5`.
///
/// The only way to build one is [`TraitCode::parse`] (or [`TraitCode::new`]
/// with an already-typed letter), so scoring never sees a malformed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraitCode {
    letter: TraitLetter,
    weight: u32,
}

impl TraitCode {
    pub fn new(letter: TraitLetter, weight: u32) -> Self {
        Self { letter, weight }
    }

    /// Parse `<letter><digits>`: exactly one of `EISNTFJP` followed by one or
    /// more ASCII digits. No sign, no whitespace, no trailing characters.
    pub fn parse(s: &str) -> Result<Self, QuizError> {
        let invalid = || QuizError::InvalidTraitCode(s.to_string());

        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(TraitLetter::from_char)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let weight: u32 = digits.parse().map_err(|_| invalid())?;

        Ok(Self { letter, weight })
    }

    pub fn letter(&self) -> TraitLetter {
        self.letter
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl FromStr for TraitCode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraitCode::parse(s)
    }
}

impl fmt::Display for TraitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.weight)
    }
}

impl Serialize for TraitCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_digit() {
        let code = TraitCode::parse("E2").unwrap();
        assert_eq!(code.letter(), TraitLetter::E);
        assert_eq!(code.weight(), 2);
    }

    #[test]
    fn test_parse_multi_digit_weight() {
        let code = TraitCode::parse("P10").unwrap();
        assert_eq!(code.letter(), TraitLetter::P);
        assert_eq!(code.weight(), 10);
    }

    #[test]
    fn test_parse_zero_weight() {
        let code = TraitCode::parse("J0").unwrap();
        assert_eq!(code.weight(), 0);
    }

    #[test]
    fn test_parse_rejects_unknown_letter() {
        assert!(matches!(
            TraitCode::parse("X3"),
            Err(QuizError::InvalidTraitCode(ref s)) if s == "X3"
        ));
    }

    #[test]
    fn test_parse_rejects_lowercase_letter() {
        assert!(TraitCode::parse("e2").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_weight() {
        assert!(TraitCode::parse("E").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digit_weight() {
        assert!(TraitCode::parse("Ex").is_err());
        assert!(TraitCode::parse("E2x").is_err());
        assert!(TraitCode::parse("E-2").is_err());
        assert!(TraitCode::parse("E+2").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_and_whitespace() {
        assert!(TraitCode::parse("").is_err());
        assert!(TraitCode::parse(" E2").is_err());
        assert!(TraitCode::parse("E 2").is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_weight() {
        assert!(TraitCode::parse("E99999999999").is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(TraitCode::parse("N07").unwrap().to_string(), "N7");
        assert_eq!(TraitCode::new(TraitLetter::T, 3).to_string(), "T3");
    }

    #[test]
    fn test_serializes_as_string() {
        let code = TraitCode::parse("S4").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"S4\"");
    }

    #[test]
    fn test_letter_round_trips_through_char() {
        for letter in TraitLetter::ALL {
            assert_eq!(TraitLetter::from_char(letter.as_char()), Some(letter));
        }
    }
}
