pub mod parser;
pub mod question;
pub mod trait_code;

pub use parser::{parse_question_set, parse_row, split_fields};
pub use question::{OptionRecord, QuestionRecord};
pub use trait_code::{TraitCode, TraitLetter};
