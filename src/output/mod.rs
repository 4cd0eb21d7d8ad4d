pub mod formatter;

pub use formatter::{
    format_dimension, format_question_list, format_questions_json, format_result,
    format_result_json, format_type_table, should_use_colors, truncate_text,
};
