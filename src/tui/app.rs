use crate::config::Config;
use crate::error::FetchError;
use crate::fetch::QuestionSource;
use crate::quiz::QuestionRecord;
use crate::scoring::{QuizSession, SessionState};
use ratatui::widgets::ListState;
use std::time::Instant;
use tracing::{info, warn};

/// Seconds a flash message stays in the status bar
const FLASH_SECS: u64 = 3;

/// Top-level load lifecycle. `Ready` carries the session, which has its own
/// answering/complete sub-states.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(QuizSession),
    LoadFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Which screen the current state maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Error,
    Question,
    Results,
}

pub struct App {
    pub config: Config,
    pub source: QuestionSource,
    pub load_state: LoadState,
    pub option_state: ListState,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub needs_load: bool,
    pub should_quit: bool,
    pub spinner_frame: usize,
}

impl App {
    /// Create an App in loading state; the event loop starts the first fetch.
    pub fn new_loading(config: Config, source: QuestionSource) -> Self {
        Self {
            config,
            source,
            load_state: LoadState::Loading,
            option_state: ListState::default(),
            input_mode: InputMode::Normal,
            flash_message: None,
            needs_load: true,
            should_quit: false,
            spinner_frame: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        match &self.load_state {
            LoadState::Loading => Screen::Loading,
            LoadState::LoadFailed(_) => Screen::Error,
            LoadState::Ready(session) if session.is_complete() => Screen::Results,
            LoadState::Ready(_) => Screen::Question,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.load_state {
            LoadState::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// Apply the outcome of a background fetch. Ignored unless loading.
    pub fn finish_load(&mut self, result: Result<Vec<QuestionRecord>, FetchError>) {
        if !self.is_loading() {
            return;
        }

        match result {
            Ok(questions) => {
                info!(count = questions.len(), "quiz ready");
                self.load_state = LoadState::Ready(QuizSession::new(questions));
                self.select_first_option();
            }
            Err(e) => {
                warn!("question load failed: {}", e);
                self.load_state = LoadState::LoadFailed(e.to_string());
                self.option_state.select(None);
            }
        }
    }

    /// Load task died without producing a result
    pub fn fail_load(&mut self, message: String) {
        if self.is_loading() {
            warn!("question load aborted: {}", message);
            self.load_state = LoadState::LoadFailed(message);
        }
    }

    /// LoadFailed -> Loading. No-op in any other state.
    pub fn retry(&mut self) {
        if matches!(self.load_state, LoadState::LoadFailed(_)) {
            self.load_state = LoadState::Loading;
            self.needs_load = true;
        }
    }

    /// Complete -> Answering(0). No-op unless the quiz is finished.
    pub fn restart(&mut self) {
        if let LoadState::Ready(session) = &mut self.load_state {
            if session.is_complete() {
                session.reset();
                self.select_first_option();
                self.show_flash("Starting over".to_string());
            }
        }
    }

    fn current_option_count(&self) -> usize {
        self.session()
            .and_then(|s| s.current_question())
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    fn select_first_option(&mut self) {
        if self.current_option_count() > 0 {
            self.option_state.select(Some(0));
        } else {
            self.option_state.select(None);
        }
    }

    pub fn next_option(&mut self) {
        let count = self.current_option_count();
        if count == 0 {
            return;
        }
        let i = match self.option_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.option_state.select(Some(i));
    }

    pub fn previous_option(&mut self) {
        let count = self.current_option_count();
        if count == 0 {
            return;
        }
        let i = match self.option_state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.option_state.select(Some(i));
    }

    /// Answer with the highlighted option
    pub fn answer_selected(&mut self) {
        if let Some(index) = self.option_state.selected() {
            self.answer_option(index);
        }
    }

    /// Answer with option `index` (0-based) of the current question
    pub fn answer_option(&mut self, index: usize) {
        let LoadState::Ready(session) = &mut self.load_state else {
            return;
        };

        match session.choose(index) {
            Ok(SessionState::Answering { .. }) => self.select_first_option(),
            Ok(SessionState::Complete) => {
                self.option_state.select(None);
                let code = session.classify();
                self.show_flash(format!("Done! You are {}", code));
            }
            Err(e) => self.show_flash(format!("Error: {}", e)),
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Advance the loading spinner animation frame
    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parse_question_set;

    fn questions() -> Vec<QuestionRecord> {
        parse_question_set(
            "header\n\
             Do you recharge alone?,Yes,I2,No,E2,,,,\n\
             Plan ahead?,Always,J3,Rarely,P1,Sometimes,P2,,",
        )
    }

    fn loaded_app() -> App {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        app.finish_load(Ok(questions()));
        app
    }

    #[test]
    fn test_new_app_is_loading_and_wants_load() {
        let app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        assert_eq!(app.screen(), Screen::Loading);
        assert!(app.needs_load);
    }

    #[test]
    fn test_successful_load_shows_first_question() {
        let app = loaded_app();
        assert_eq!(app.screen(), Screen::Question);
        assert_eq!(app.option_state.selected(), Some(0));
        assert_eq!(app.session().unwrap().position(), 0);
    }

    #[test]
    fn test_failed_load_then_retry() {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        app.needs_load = false;
        app.finish_load(Err(FetchError::Timeout(std::time::Duration::from_secs(20))));
        assert_eq!(app.screen(), Screen::Error);
        assert!(matches!(&app.load_state, LoadState::LoadFailed(msg) if msg.contains("timed out")));

        app.retry();
        assert_eq!(app.screen(), Screen::Loading);
        assert!(app.needs_load);
    }

    #[test]
    fn test_retry_only_from_failed() {
        let mut app = loaded_app();
        app.needs_load = false;
        app.retry();
        assert_eq!(app.screen(), Screen::Question);
        assert!(!app.needs_load);
    }

    #[test]
    fn test_late_load_result_is_ignored_once_ready() {
        let mut app = loaded_app();
        app.finish_load(Err(FetchError::Timeout(std::time::Duration::from_secs(1))));
        assert_eq!(app.screen(), Screen::Question);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = loaded_app();
        app.previous_option();
        assert_eq!(app.option_state.selected(), Some(1));
        app.next_option();
        assert_eq!(app.option_state.selected(), Some(0));
        app.next_option();
        app.next_option();
        assert_eq!(app.option_state.selected(), Some(0));
    }

    #[test]
    fn test_answering_through_to_results() {
        let mut app = loaded_app();
        app.answer_selected(); // Yes -> I2
        assert_eq!(app.session().unwrap().position(), 1);
        assert_eq!(app.option_state.selected(), Some(0));

        app.answer_option(0); // Always -> J3
        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.session().unwrap().classify().code(), "INFJ");
        assert!(app.flash_message.as_ref().unwrap().0.contains("INFJ"));
    }

    #[test]
    fn test_answer_out_of_range_flashes_error() {
        let mut app = loaded_app();
        app.answer_option(3);
        assert_eq!(app.session().unwrap().position(), 0);
        assert!(app.flash_message.as_ref().unwrap().0.starts_with("Error"));
    }

    #[test]
    fn test_restart_only_after_completion() {
        let mut app = loaded_app();
        app.answer_option(1);
        app.restart();
        assert_eq!(app.session().unwrap().position(), 1);

        app.answer_option(2);
        assert_eq!(app.screen(), Screen::Results);
        app.restart();
        let session = app.session().unwrap();
        assert_eq!(session.position(), 0);
        assert_eq!(session.tally().total(), 0);
        assert_eq!(session.questions().len(), 2);
        assert_eq!(app.screen(), Screen::Question);
    }

    #[test]
    fn test_empty_question_set_goes_straight_to_results() {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        app.finish_load(Ok(Vec::new()));
        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.option_state.selected(), None);
    }
}
