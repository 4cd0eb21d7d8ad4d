use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap};

use crate::scoring::{DimensionScore, QuizSession};
use crate::tui::app::{App, InputMode, LoadState, Screen};
use crate::tui::theme;

const TITLE: &str = "Personality Quiz";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // Screen body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0]);

    let body = chunks[1].inner(Margin::new(2, 1));
    match &app.load_state {
        LoadState::Loading => render_loading(frame, body, app.spinner_frame),
        LoadState::LoadFailed(message) => render_error(frame, body, message),
        LoadState::Ready(session) if session.is_complete() => render_results(frame, body, session),
        LoadState::Ready(session) => render_question(frame, body, session, &mut app.option_state),
    }

    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(Span::styled(
        TITLE,
        Style::default().fg(theme::TITLE_COLOR).bold(),
    ));
    frame.render_widget(Paragraph::new(title), area);
}

fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let popup_area = centered_rect_fixed(44, 3, area);

    // Braille spinner animation
    let spinner_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let spinner = spinner_chars[spinner_frame % spinner_chars.len()];

    let text = format!("{} Loading your personality quiz...", spinner);
    let loading = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme::TITLE_COLOR))
        .block(Block::bordered());

    frame.render_widget(loading, popup_area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_rect_fixed(60, 7, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("Error loading quiz: {}", message),
            Style::default().fg(theme::ERROR_COLOR),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", Style::default().fg(theme::STATUS_KEY_COLOR).bold()),
            Span::raw(" to try again"),
        ]),
    ];

    let error = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Error "));

    frame.render_widget(error, popup_area);
}

fn render_question(frame: &mut Frame, area: Rect, session: &QuizSession, option_state: &mut ListState) {
    let Some(question) = session.current_question() else {
        return;
    };
    let progress = session.progress();

    let chunks = Layout::vertical([
        Constraint::Length(1), // "Question N of M"
        Constraint::Length(1), // Progress bar
        Constraint::Length(1), // Spacer
        Constraint::Length(4), // Prompt
        Constraint::Fill(1),   // Options
    ])
    .split(area);

    let counter = format!("Question {} of {}", progress.current(), progress.total);
    frame.render_widget(
        Paragraph::new(counter).style(Style::default().fg(theme::MUTED)),
        chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme::PROGRESS_FILLED)
                .bg(theme::PROGRESS_EMPTY),
        )
        .ratio((progress.percent() / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[1]);

    let prompt = Paragraph::new(question.prompt.as_str())
        .style(Style::default().fg(theme::TEXT).bold())
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, chunks[3]);

    if question.has_no_choices() {
        let empty = Paragraph::new("(no choices)").style(Style::default().fg(theme::MUTED));
        frame.render_widget(empty, chunks[4]);
        return;
    }

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}. ", idx + 1),
                    Style::default().fg(theme::OPTION_INDEX),
                ),
                Span::raw(option.text.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(theme::OPTION_SELECTED)
        .highlight_symbol("› ");

    frame.render_stateful_widget(list, chunks[4], option_state);
}

fn render_results(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let result = session.classify();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Heading
        Constraint::Length(1), // Spacer
        Constraint::Length(3), // Code badge
        Constraint::Length(2), // Description
        Constraint::Length(4), // Energy / Information
        Constraint::Length(4), // Decisions / Lifestyle
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new("Your Personality Type")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::TEXT).bold()),
        chunks[0],
    );

    let badge_area = centered_rect_fixed(12, 3, chunks[2]);
    frame.render_widget(
        Paragraph::new(result.code())
            .alignment(Alignment::Center)
            .style(theme::CODE_STYLE)
            .block(Block::bordered().border_style(Style::default().fg(theme::TITLE_COLOR))),
        badge_area,
    );

    frame.render_widget(
        Paragraph::new(result.description())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    let breakdown = session.breakdown();
    for (row, pair) in breakdown.chunks(2).enumerate() {
        let cells = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(1)
            .split(chunks[4 + row]);
        for (score, cell) in pair.iter().zip(cells.iter()) {
            render_dimension_card(frame, *cell, score);
        }
    }
}

fn render_dimension_card(frame: &mut Frame, area: Rect, score: &DimensionScore) {
    let color = theme::dimension_color(score.dimension);
    let loser = if score.winner == score.first.0 {
        score.second
    } else {
        score.first
    };

    let lines = vec![
        Line::from(Span::styled(score.winner_label(), Style::default().fg(color).bold())),
        Line::from(Span::styled(
            format!("vs {} ({})", loser.0.pole_name(), loser.1),
            Style::default().fg(theme::MUTED),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::bordered()
            .title(format!(" {} ", score.dimension.name()))
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(card, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Error") || msg.starts_with("Failed") {
            theme::FLASH_ERROR
        } else {
            theme::FLASH_SUCCESS
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.screen() {
            Screen::Loading => &[("q", ":quit")],
            Screen::Error => &[("r", ":retry "), ("q", ":quit")],
            Screen::Question => &[
                ("j/k", ":move "),
                ("Enter", ":answer "),
                ("1-4", ":pick "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Screen::Results => &[("r", ":take again "), ("?", ":help "), ("q", ":quit")],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme::STATUS_KEY_COLOR)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(46, 11, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Keyboard Shortcuts ");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(theme::STATUS_KEY_COLOR).bold();
    let help_lines = vec![
        Line::from(vec![Span::styled("j / Down      ", key_style), Span::raw("Next choice")]),
        Line::from(vec![Span::styled("k / Up        ", key_style), Span::raw("Previous choice")]),
        Line::from(vec![Span::styled("Enter / Space ", key_style), Span::raw("Answer with choice")]),
        Line::from(vec![Span::styled("1 - 4         ", key_style), Span::raw("Answer directly")]),
        Line::from(vec![Span::styled("r             ", key_style), Span::raw("Retry load / take again")]),
        Line::from(vec![Span::styled("?             ", key_style), Span::raw("Show/hide this help")]),
        Line::from(vec![Span::styled("q / Esc       ", key_style), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(theme::MUTED))),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::FetchError;
    use crate::fetch::QuestionSource;
    use crate::quiz::parse_question_set;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with(csv: &str) -> App {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        app.finish_load(Ok(parse_question_set(csv)));
        app
    }

    #[test]
    fn test_question_screen_shows_counter_prompt_and_options() {
        let mut app = app_with("h\nPlan ahead?,Always,J3,Rarely,P1\nSecond?,A,E1");
        let screen = render(&mut app);
        assert!(screen.contains("Question 1 of 2"));
        assert!(screen.contains("Plan ahead?"));
        assert!(screen.contains("1. Always"));
        assert!(screen.contains("2. Rarely"));
    }

    #[test]
    fn test_question_without_options_says_so() {
        let mut app = app_with("h\nNothing here");
        let screen = render(&mut app);
        assert!(screen.contains("(no choices)"));
    }

    #[test]
    fn test_results_screen_shows_code_and_dimensions() {
        let mut app = app_with("h\nRecharge alone?,Yes,I2,No,E2\nPlan ahead?,Always,J3,Rarely,P1");
        app.answer_option(0);
        app.answer_option(0);
        app.flash_message = None;

        let screen = render(&mut app);
        assert!(screen.contains("INFJ"));
        assert!(screen.contains("The Advocate"));
        assert!(screen.contains("Introversion (2)"));
        assert!(screen.contains("Judging (3)"));
        assert!(screen.contains("take again"));
    }

    #[test]
    fn test_error_screen_offers_retry() {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        app.finish_load(Err(FetchError::Status {
            status: 500,
            url: "https://x.test/q".to_string(),
        }));
        let screen = render(&mut app);
        assert!(screen.contains("Error loading quiz"));
        assert!(screen.contains("to try again"));
    }

    #[test]
    fn test_tiny_terminal_guard() {
        let mut app = App::new_loading(Config::default(), QuestionSource::parse("./q.csv"));
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Terminal too small"));
    }
}
