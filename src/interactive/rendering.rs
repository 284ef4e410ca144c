//! TUI rendering with ratatui
//!
//! Board, keyboard and messages for the Verbo game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterVerdict, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjklç", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut title = String::from("🇧🇷 VERBO");
    if app.setup.practice {
        title.push_str(" - Practice");
    } else if let Some(number) = app.setup.game_number {
        title.push_str(&format!(" #{number} - {}", app.setup.date));
    }
    if app.setup.options.hard_mode {
        title.push_str(" - Hard mode");
    }

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    let bg = match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::WrongPosition => Color::Yellow,
        LetterVerdict::Incorrect => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    let history = app.session.history();

    for row in 0..app.setup.options.max_attempts {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(feedback) = history.get(row) {
            for letter in feedback.letters() {
                spans.push(Span::styled(
                    format!(" {} ", letter.letter.to_uppercase()),
                    verdict_style(letter.verdict),
                ));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LENGTH {
                let text = typed
                    .get(i)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_uppercase()));
                spans.push(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let style = app.keyboard.get(&c).map_or_else(
                        || Style::default().fg(Color::White),
                        |&verdict| verdict_style(verdict),
                    );
                    [
                        Span::styled(c.to_uppercase().to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts();
    let max = app.setup.options.max_attempts.max(1);
    let percent = u16::try_from(used * 100 / max).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    if let Some(share) = app.share() {
        items.insert(0, ListItem::new(share).style(Style::default().fg(Color::Cyan)));
    }

    let messages_list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Game over | 'n' practice game | 'q' quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a 5-letter word | Enter to submit | Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = if app.setup.practice { "Mode: Practice" } else { "Mode: Daily" };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = app.stats.as_ref().map_or_else(
        || "Stats recorded after a daily game".to_string(),
        |stats| {
            format!(
                "Played: {} | Win: {}% | Streak: {}",
                stats.games_played,
                stats.win_rate(),
                stats.current_streak
            )
        },
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc: Quit | Enter: Submit | Backspace: Erase")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
