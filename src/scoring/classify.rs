use serde::Serialize;
use std::fmt;

use super::tally::ScoreTally;
use super::types::describe;
use crate::quiz::TraitLetter;

/// One of the four opposed letter pairs, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Energy,
    Information,
    Decisions,
    Lifestyle,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Energy,
        Dimension::Information,
        Dimension::Decisions,
        Dimension::Lifestyle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Energy => "Energy",
            Dimension::Information => "Information",
            Dimension::Decisions => "Decisions",
            Dimension::Lifestyle => "Lifestyle",
        }
    }

    /// The two poles as (first, second). Ties go to the second.
    pub fn poles(self) -> (TraitLetter, TraitLetter) {
        match self {
            Dimension::Energy => (TraitLetter::E, TraitLetter::I),
            Dimension::Information => (TraitLetter::S, TraitLetter::N),
            Dimension::Decisions => (TraitLetter::T, TraitLetter::F),
            Dimension::Lifestyle => (TraitLetter::J, TraitLetter::P),
        }
    }

    /// Winning pole. The first letter must be strictly ahead; a tie picks the
    /// second letter.
    pub fn winner(self, tally: &ScoreTally) -> TraitLetter {
        match self {
            Dimension::Energy => energy(tally),
            Dimension::Information => information(tally),
            Dimension::Decisions => decisions(tally),
            Dimension::Lifestyle => lifestyle(tally),
        }
    }
}

/// E only when E > I
pub fn energy(tally: &ScoreTally) -> TraitLetter {
    if tally.e > tally.i {
        TraitLetter::E
    } else {
        TraitLetter::I
    }
}

/// S only when S > N
pub fn information(tally: &ScoreTally) -> TraitLetter {
    if tally.s > tally.n {
        TraitLetter::S
    } else {
        TraitLetter::N
    }
}

/// T only when T > F
pub fn decisions(tally: &ScoreTally) -> TraitLetter {
    if tally.t > tally.f {
        TraitLetter::T
    } else {
        TraitLetter::F
    }
}

/// J only when J > P
pub fn lifestyle(tally: &ScoreTally) -> TraitLetter {
    if tally.j > tally.p {
        TraitLetter::J
    } else {
        TraitLetter::P
    }
}

/// A four-letter classification such as `INFJ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityType {
    letters: [TraitLetter; 4],
}

impl PersonalityType {
    pub fn from_tally(tally: &ScoreTally) -> Self {
        Self {
            letters: [
                energy(tally),
                information(tally),
                decisions(tally),
                lifestyle(tally),
            ],
        }
    }

    pub fn letters(&self) -> [TraitLetter; 4] {
        self.letters
    }

    pub fn code(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }

    pub fn description(&self) -> &'static str {
        describe(&self.code())
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl Serialize for PersonalityType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raw scores for one dimension plus the pole that won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub first: (TraitLetter, u64),
    pub second: (TraitLetter, u64),
    pub winner: TraitLetter,
}

impl DimensionScore {
    pub fn from_tally(dimension: Dimension, tally: &ScoreTally) -> Self {
        let (a, b) = dimension.poles();
        Self {
            dimension,
            first: (a, tally.get(a)),
            second: (b, tally.get(b)),
            winner: dimension.winner(tally),
        }
    }

    pub fn winner_score(&self) -> u64 {
        if self.winner == self.first.0 {
            self.first.1
        } else {
            self.second.1
        }
    }

    /// e.g. "Extraversion (7)"
    pub fn winner_label(&self) -> String {
        format!("{} ({})", self.winner.pole_name(), self.winner_score())
    }
}
