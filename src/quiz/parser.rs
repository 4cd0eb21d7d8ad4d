//! Question-set ingestion.
//!
//! The source sheet uses a deliberately small CSV dialect: a `"` toggles
//! quoted mode and is dropped, commas inside quotes are data, every field is
//! trimmed. Doubled quotes and newlines inside quotes are not supported.

use tracing::debug;

use super::question::{OptionRecord, QuestionRecord};
use super::trait_code::TraitCode;

/// Column pairs (text, trait) for the four options, in display order.
const OPTION_COLUMNS: [(usize, usize); 4] = [(1, 2), (3, 4), (5, 6), (7, 8)];

/// Split one line into trimmed fields.
///
/// Always returns at least one field; an empty line yields `[""]`.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Map one data line to a question. `None` when the prompt column is empty.
pub fn parse_row(line: &str) -> Option<QuestionRecord> {
    let fields = split_fields(line);

    let prompt = fields.first().filter(|p| !p.is_empty())?.clone();

    let options = OPTION_COLUMNS
        .iter()
        .filter_map(|&(text_col, trait_col)| {
            let text = fields.get(text_col).filter(|t| !t.is_empty())?;
            let raw_trait = fields.get(trait_col).filter(|t| !t.is_empty())?;
            match TraitCode::parse(raw_trait) {
                Ok(trait_code) => Some(OptionRecord {
                    text: text.clone(),
                    trait_code,
                }),
                Err(e) => {
                    debug!(option = %text, "dropping option: {}", e);
                    None
                }
            }
        })
        .collect();

    Some(QuestionRecord { prompt, options })
}

/// Parse a whole CSV body into questions, in source order.
///
/// Line 0 is the header and is skipped without looking at it. Blank lines and
/// rows without a prompt are dropped. Never fails: garbage in, empty list out.
pub fn parse_question_set(text: &str) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();

    for (idx, raw_line) in text.split('\n').enumerate().skip(1) {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_row(line) {
            Some(question) => questions.push(question),
            None => debug!(line = idx + 1, "dropping row without a prompt"),
        }
    }

    debug!(count = questions.len(), "parsed question set");
    questions
}
