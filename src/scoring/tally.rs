use crate::quiz::TraitLetter;

/// Accumulated weight per trait letter for one quiz attempt.
///
/// Only ever grows; the only way back to zero is a fresh tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub e: u64,
    pub i: u64,
    pub s: u64,
    pub n: u64,
    pub t: u64,
    pub f: u64,
    pub j: u64,
    pub p: u64,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: TraitLetter) -> u64 {
        match letter {
            TraitLetter::E => self.e,
            TraitLetter::I => self.i,
            TraitLetter::S => self.s,
            TraitLetter::N => self.n,
            TraitLetter::T => self.t,
            TraitLetter::F => self.f,
            TraitLetter::J => self.j,
            TraitLetter::P => self.p,
        }
    }

    pub(crate) fn add(&mut self, letter: TraitLetter, weight: u32) {
        let slot = match letter {
            TraitLetter::E => &mut self.e,
            TraitLetter::I => &mut self.i,
            TraitLetter::S => &mut self.s,
            TraitLetter::N => &mut self.n,
            TraitLetter::T => &mut self.t,
            TraitLetter::F => &mut self.f,
            TraitLetter::J => &mut self.j,
            TraitLetter::P => &mut self.p,
        };
        *slot = slot.saturating_add(u64::from(weight));
    }

    /// Sum of all accumulated weight
    pub fn total(&self) -> u64 {
        TraitLetter::ALL.iter().map(|&l| self.get(l)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_zero() {
        let tally = ScoreTally::new();
        for letter in TraitLetter::ALL {
            assert_eq!(tally.get(letter), 0);
        }
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_add_only_touches_its_letter() {
        let mut tally = ScoreTally::new();
        tally.add(TraitLetter::N, 4);
        assert_eq!(tally.n, 4);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_add_saturates() {
        let mut tally = ScoreTally {
            j: u64::MAX - 1,
            ..ScoreTally::default()
        };
        tally.add(TraitLetter::J, 5);
        assert_eq!(tally.j, u64::MAX);
    }
}
