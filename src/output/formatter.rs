use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::quiz::QuestionRecord;
use crate::scoring::{DimensionScore, PersonalityType, QuizSession, TYPE_DESCRIPTIONS};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the question set as a numbered list with indented options.
///
/// ```text
///  1. Do you recharge alone?
///     a) Yes  [I2]
///     b) No   [E2]
/// ```
pub fn format_question_list(questions: &[QuestionRecord], use_colors: bool) -> String {
    if questions.is_empty() {
        return "No questions found.".to_string();
    }

    // Index column fits "999."
    let prompt_width = get_terminal_width().map(|w| w.saturating_sub(5).max(20));

    let mut out = Vec::new();
    for (idx, question) in questions.iter().enumerate() {
        let index = format!("{:>3}.", idx + 1);
        let prompt = match prompt_width {
            Some(width) => truncate_text(&question.prompt, width),
            None => question.prompt.clone(),
        };

        if use_colors {
            out.push(format!("{} {}", index.dimmed(), prompt.bold()));
        } else {
            out.push(format!("{} {}", index, prompt));
        }

        if question.options.is_empty() {
            out.push("     (no choices)".to_string());
            continue;
        }

        let label_width = question
            .options
            .iter()
            .map(|o| o.text.chars().count())
            .max()
            .unwrap_or(0);

        for (opt_idx, option) in question.options.iter().enumerate() {
            let marker = (b'a' + opt_idx as u8) as char;
            let code = format!("[{}]", option.trait_code);
            if use_colors {
                out.push(format!(
                    "     {}) {:<width$}  {}",
                    marker,
                    option.text,
                    code.cyan(),
                    width = label_width
                ));
            } else {
                out.push(format!(
                    "     {}) {:<width$}  {}",
                    marker,
                    option.text,
                    code,
                    width = label_width
                ));
            }
        }
    }

    out.join("\n")
}

/// JSON form of the question set (pretty-printed)
pub fn format_questions_json(questions: &[QuestionRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(questions)
}

/// "Energy: Extraversion (7) vs Introversion (3)"
pub fn format_dimension(score: &DimensionScore, use_colors: bool) -> String {
    let (first, second) = (score.first, score.second);
    let first_label = format!("{} ({})", first.0.pole_name(), first.1);
    let second_label = format!("{} ({})", second.0.pole_name(), second.1);

    if use_colors {
        let (first_label, second_label) = if score.winner == first.0 {
            (first_label.bold().to_string(), second_label.dimmed().to_string())
        } else {
            (first_label.dimmed().to_string(), second_label.bold().to_string())
        };
        format!(
            "{:<12} {} vs {}",
            format!("{}:", score.dimension.name()),
            first_label,
            second_label
        )
    } else {
        format!(
            "{:<12} {} vs {}",
            format!("{}:", score.dimension.name()),
            first_label,
            second_label
        )
    }
}

/// Final result block: code, description, one line per dimension.
pub fn format_result(session: &QuizSession, use_colors: bool) -> String {
    let result = session.classify();
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!("Your Personality Type: {}", result.code().magenta().bold()));
    } else {
        lines.push(format!("Your Personality Type: {}", result.code()));
    }
    lines.push(result.description().to_string());
    lines.push(String::new());

    for score in session.breakdown() {
        lines.push(format_dimension(&score, use_colors));
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct ResultJson<'a> {
    code: PersonalityType,
    description: &'a str,
    dimensions: Vec<DimensionJson>,
}

#[derive(Serialize)]
struct DimensionJson {
    dimension: &'static str,
    winner: String,
    scores: Vec<(String, u64)>,
}

/// JSON form of the final result
pub fn format_result_json(session: &QuizSession) -> serde_json::Result<String> {
    let code = session.classify();
    let dimensions = session
        .breakdown()
        .iter()
        .map(|d| DimensionJson {
            dimension: d.dimension.name(),
            winner: d.winner.to_string(),
            scores: vec![
                (d.first.0.to_string(), d.first.1),
                (d.second.0.to_string(), d.second.1),
            ],
        })
        .collect();

    serde_json::to_string_pretty(&ResultJson {
        code,
        description: code.description(),
        dimensions,
    })
}

/// All sixteen types, one per line
pub fn format_type_table(use_colors: bool) -> String {
    TYPE_DESCRIPTIONS
        .iter()
        .map(|(code, desc)| {
            if use_colors {
                format!("{}  {}", code.magenta().bold(), desc)
            } else {
                format!("{}  {}", code, desc)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parse_question_set;

    fn sample_questions() -> Vec<QuestionRecord> {
        parse_question_set(
            "h\nDo you recharge alone?,Yes,I2,No,E2,,,,\nPlan ahead?,Always,J3,Rarely,P1,,,,\nEmpty?",
        )
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate_text("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_question_list_plain() {
        let out = format_question_list(&sample_questions(), false);
        assert!(out.contains("  1. Do you recharge alone?"));
        assert!(out.contains("a) Yes  [I2]"));
        assert!(out.contains("b) No   [E2]"));
        assert!(out.contains("  3. Empty?"));
        assert!(out.contains("(no choices)"));
    }

    #[test]
    fn test_question_list_empty() {
        assert_eq!(format_question_list(&[], false), "No questions found.");
    }

    #[test]
    fn test_questions_json_uses_trait_key() {
        let json = format_questions_json(&sample_questions()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["prompt"], "Do you recharge alone?");
        assert_eq!(value[0]["options"][0]["trait"], "I2");
        assert_eq!(value[2]["options"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_result_plain() {
        let mut session = QuizSession::new(sample_questions());
        session.choose(0).unwrap();
        session.choose(0).unwrap();

        let out = format_result(&session, false);
        assert!(out.starts_with("Your Personality Type: INFJ"));
        assert!(out.contains("The Advocate"));
        assert!(out.contains("Energy:      Extraversion (0) vs Introversion (2)"));
        assert!(out.contains("Lifestyle:   Judging (3) vs Perceiving (0)"));
    }

    #[test]
    fn test_result_json() {
        let mut session = QuizSession::new(sample_questions());
        session.choose(1).unwrap();
        session.choose(1).unwrap();

        let json = format_result_json(&session).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["code"], "ENFP");
        assert_eq!(value["dimensions"][0]["dimension"], "Energy");
        // E2 vs I0: E wins
        assert_eq!(value["dimensions"][0]["winner"], "E");
    }

    #[test]
    fn test_type_table_lists_all_sixteen() {
        let table = format_type_table(false);
        assert_eq!(table.lines().count(), 16);
        assert!(table.starts_with("INTJ  The Architect"));
    }
}
