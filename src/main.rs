use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use typequiz::fetch::QuestionSource;
use typequiz::scoring::QuizSession;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_ANSWER: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the quiz interactively (default if no subcommand)
    Take,
    /// Print the loaded questions with their answer codes
    Questions {
        /// Print as JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Score a full set of answers without the interactive UI
    Score {
        /// Chosen option per question, 1-based, in question order
        choices: Vec<usize>,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List all sixteen personality types
    Types,
}

#[derive(Parser, Debug)]
#[command(name = "typequiz")]
#[command(about = "Forced-choice personality quiz in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/typequiz/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Question sheet URL or local CSV path (overrides config)
    #[arg(short, long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "typequiz=debug" } else { "typequiz=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(typequiz::stderr_buffer::writer)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Take);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let mut config = match typequiz::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Some(source) = cli.source {
        config.source = source;
    }

    if let Err(errors) = typequiz::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = typequiz::output::should_use_colors();
    let source = QuestionSource::parse(&config.source);
    let timeout = typequiz::config::fetch_timeout(&config);
    debug!(%source, ?timeout, "resolved question source");

    let client = match typequiz::fetch::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    match command {
        Commands::Take => {
            let app = typequiz::tui::App::new_loading(config, source);
            if let Err(e) = typequiz::tui::run_tui(app, client).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_NETWORK);
            }
        }
        Commands::Questions { json } => {
            let questions = load_or_exit(&client, &source, timeout).await;
            if json {
                match typequiz::output::format_questions_json(&questions) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize questions: {}", e);
                        std::process::exit(EXIT_NETWORK);
                    }
                }
            } else {
                println!(
                    "{}",
                    typequiz::output::format_question_list(&questions, use_colors)
                );
            }
        }
        Commands::Score { choices, json } => {
            let questions = load_or_exit(&client, &source, timeout).await;
            let session = match score_choices(questions, &choices) {
                Ok(s) => s,
                Err(msg) => {
                    eprintln!("{}", msg);
                    std::process::exit(EXIT_ANSWER);
                }
            };

            if json {
                match typequiz::output::format_result_json(&session) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_ANSWER);
                    }
                }
            } else {
                println!("{}", typequiz::output::format_result(&session, use_colors));
            }
        }
        Commands::Types => {
            println!("{}", typequiz::output::format_type_table(use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

async fn load_or_exit(
    client: &reqwest::Client,
    source: &QuestionSource,
    timeout: std::time::Duration,
) -> Vec<typequiz::quiz::QuestionRecord> {
    match typequiz::fetch::load_questions(client, source, timeout).await {
        Ok(questions) => questions,
        Err(e) => {
            eprintln!("Error loading quiz: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    }
}

/// Drive a session with 1-based option numbers, one per question.
fn score_choices(
    questions: Vec<typequiz::quiz::QuestionRecord>,
    choices: &[usize],
) -> Result<QuizSession, String> {
    if choices.len() != questions.len() {
        return Err(format!(
            "Expected {} answers (one per question), got {}.",
            questions.len(),
            choices.len()
        ));
    }

    let mut session = QuizSession::new(questions);
    for (question_idx, &choice) in choices.iter().enumerate() {
        if choice < 1 {
            return Err(format!(
                "Invalid choice {} for question {}. Choices start at 1.",
                choice,
                question_idx + 1
            ));
        }
        session
            .choose(choice - 1)
            .map_err(|e| format!("Question {}: {}", question_idx + 1, e))?;
    }
    Ok(session)
}
