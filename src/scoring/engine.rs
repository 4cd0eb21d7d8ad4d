use tracing::{debug, info};

use super::classify::{Dimension, DimensionScore, PersonalityType};
use super::tally::ScoreTally;
use crate::error::QuizError;
use crate::quiz::{QuestionRecord, TraitCode};

/// Where a session stands after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `position` is the index of the question now on screen.
    Answering { position: usize, total: usize },
    Complete,
}

/// Progress through the question list, for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// 1-based number of the question on screen, capped at `total`.
    pub fn current(&self) -> usize {
        (self.position + 1).min(self.total)
    }

    /// Share of the bar to fill, counting the question on screen as done.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current() as f64 / self.total as f64) * 100.0
    }
}

/// One pass through a question list.
///
/// `position` stays in `0..=questions.len()`; reaching `len` means complete.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    position: usize,
    tally: ScoreTally,
}

impl QuizSession {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions,
            position: 0,
            tally: ScoreTally::new(),
        }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else {
            SessionState::Answering {
                position: self.position,
                total: self.questions.len(),
            }
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.position,
            total: self.questions.len(),
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.position)
    }

    /// Record an answer: add its weight to its letter and move to the next question.
    pub fn apply_answer(&mut self, code: &TraitCode) -> Result<SessionState, QuizError> {
        if self.is_complete() {
            return Err(QuizError::SessionComplete);
        }

        self.tally.add(code.letter(), code.weight());
        self.position += 1;
        debug!(answer = %code, position = self.position, "answer recorded");

        let state = self.state();
        if state == SessionState::Complete {
            info!(result = %self.classify(), "quiz complete");
        }
        Ok(state)
    }

    /// String entry point for answers. A malformed code is an error and
    /// changes nothing.
    pub fn apply_answer_code(&mut self, raw: &str) -> Result<SessionState, QuizError> {
        let code = TraitCode::parse(raw)?;
        self.apply_answer(&code)
    }

    /// Answer the current question with its option at `option_index` (0-based).
    pub fn choose(&mut self, option_index: usize) -> Result<SessionState, QuizError> {
        let question = self.current_question().ok_or(QuizError::SessionComplete)?;
        let code = question
            .option(option_index)
            .map(|o| o.trait_code)
            .ok_or(QuizError::NoSuchOption {
                index: option_index,
                available: question.options.len(),
            })?;
        self.apply_answer(&code)
    }

    pub fn classify(&self) -> PersonalityType {
        PersonalityType::from_tally(&self.tally)
    }

    /// Raw scores and winner for each dimension, in classification order.
    pub fn breakdown(&self) -> [DimensionScore; 4] {
        Dimension::ALL.map(|d| DimensionScore::from_tally(d, &self.tally))
    }

    /// Start over with the same questions.
    pub fn reset(&mut self) -> SessionState {
        self.position = 0;
        self.tally = ScoreTally::new();
        debug!(total = self.questions.len(), "session reset");
        self.state()
    }
}
