pub mod classify;
pub mod engine;
pub mod tally;
pub mod types;

pub use classify::{Dimension, DimensionScore, PersonalityType};
pub use engine::{Progress, QuizSession, SessionState};
pub use tally::ScoreTally;
pub use types::{describe, FALLBACK_DESCRIPTION, TYPE_DESCRIPTIONS};
