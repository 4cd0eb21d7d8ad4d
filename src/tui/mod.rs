pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use tracing::debug;

use crate::error::FetchError;
use crate::quiz::QuestionRecord;

type LoadHandle = tokio::task::JoinHandle<Result<Vec<QuestionRecord>, FetchError>>;

pub async fn run_tui(mut app: App, client: reqwest::Client) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let result = event_loop(&mut terminal, &mut app, client).await;

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    client: reqwest::Client,
) -> anyhow::Result<()> {
    let mut events = EventHandler::new(app.config.tick_rate_ms);
    let timeout = crate::config::fetch_timeout(&app.config);
    let mut pending_load: Option<LoadHandle> = None;

    loop {
        // Spawn a load if one was requested and none is in flight
        if app.needs_load && pending_load.is_none() {
            app.needs_load = false;
            let client = client.clone();
            let source = app.source.clone();
            debug!(%source, "spawning question load");
            pending_load = Some(tokio::spawn(async move {
                crate::fetch::load_questions(&client, &source, timeout).await
            }));
        }

        // Check if background load has completed
        if pending_load.as_ref().is_some_and(|h| h.is_finished()) {
            if let Some(handle) = pending_load.take() {
                match handle.await {
                    Ok(result) => app.finish_load(result),
                    Err(e) => app.fail_load(format!("load task failed: {}", e)),
                }
            }
        }

        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle events
        match events.next().await {
            Event::Key(key) => handle_key_event(app, key),
            Event::Tick => {
                app.update_flash();
                app.advance_spinner();
            }
            Event::Resize => {}
        }

        if app.should_quit {
            if let Some(handle) = pending_load.take() {
                handle.abort();
            }
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_option(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_option(),

            // Answer
            KeyCode::Enter | KeyCode::Char(' ') => app.answer_selected(),
            KeyCode::Char(c @ '1'..='4') => {
                if app.screen() == app::Screen::Question {
                    app.answer_option(c as usize - '1' as usize);
                }
            }

            // Try again / take again
            KeyCode::Char('r') => match app.screen() {
                app::Screen::Error => app.retry(),
                app::Screen::Results => app.restart(),
                _ => {}
            },

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fetch::QuestionSource;
    use crate::quiz::parse_question_set;
    use app::{InputMode, Screen};

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn loaded_app() -> App {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        app.finish_load(Ok(parse_question_set(
            "h\nRecharge alone?,Yes,I2,No,E2\nPlan ahead?,Always,J3,Rarely,P1",
        )));
        app
    }

    #[test]
    fn test_q_quits() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = loaded_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_answer_directly() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('2')); // No -> E2
        press(&mut app, KeyCode::Char('1')); // Always -> J3
        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.session().unwrap().classify().code(), "ENFJ");
    }

    #[test]
    fn test_arrows_then_enter() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter); // No -> E2
        assert_eq!(app.session().unwrap().tally().e, 2);
    }

    #[test]
    fn test_r_restarts_from_results() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::Question);
        assert_eq!(app.session().unwrap().position(), 0);
    }

    #[test]
    fn test_r_retries_from_error() {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        app.needs_load = false;
        app.fail_load("boom".to_string());
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::Loading);
        assert!(app.needs_load);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode, InputMode::Help);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.should_quit);
    }
}
