use serde::Serialize;

use super::trait_code::TraitCode;

/// One answer choice. Only survives parsing when both label and trait are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRecord {
    pub text: String,
    #[serde(rename = "trait")]
    pub trait_code: TraitCode,
}

/// One question with its choices in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<OptionRecord>,
}

impl QuestionRecord {
    pub fn option(&self, index: usize) -> Option<&OptionRecord> {
        self.options.get(index)
    }

    /// True for questions whose every option was dropped at parse time.
    pub fn has_no_choices(&self) -> bool {
        self.options.is_empty()
    }
}
