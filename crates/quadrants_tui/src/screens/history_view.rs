//! History view screen - summary counters and per-game records.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::instrument;

use crate::history::{HistoryStore, RecordedOutcome};
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// State for the history view screen.
#[derive(Debug)]
pub struct HistoryViewScreen;

impl HistoryViewScreen {
    /// Creates the history view screen.
    #[instrument]
    pub fn new() -> Self {
        Self
    }
}

impl Screen for HistoryViewScreen {
    fn render(&self, frame: &mut Frame, history: &HistoryStore) {
        let (title_area, body_area, status_area) = ui::chrome(frame.area());

        ui::render_title(frame, title_area, "Quadrants - History");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(body_area);

        let summary = history.summary();
        let summary_text = format!(
            "Games: {}   Wins: {}   Draws: {}   Quits: {}",
            summary.total(),
            summary.wins(),
            summary.draws(),
            summary.quits()
        );
        let summary_widget = Paragraph::new(summary_text)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(summary_widget, chunks[0]);

        let rows: Vec<Row> = history
            .records()
            .iter()
            .map(|record| {
                let outcome_style = match record.outcome() {
                    RecordedOutcome::WonA => Style::default().fg(Color::Blue),
                    RecordedOutcome::WonB => Style::default().fg(Color::Red),
                    RecordedOutcome::Draw => Style::default().fg(Color::Yellow),
                    RecordedOutcome::Quit => Style::default().fg(Color::DarkGray),
                };
                Row::new(vec![
                    Cell::from(record.outcome().tag()).style(outcome_style),
                    Cell::from(record.player_a().as_str()),
                    Cell::from(record.player_b().as_str()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Percentage(46),
                Constraint::Percentage(46),
            ],
        )
        .header(
            Row::new(vec!["Result", "Player A", "Player B"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title("Games"));
        frame.render_widget(table, chunks[1]);

        ui::render_status(frame, status_area, "Esc or Enter to return to the menu");
    }

    #[instrument(skip(self, _history))]
    fn handle_key(&mut self, key: KeyEvent, _history: &mut HistoryStore) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ScreenTransition::GoToMainMenu,
            _ => ScreenTransition::Stay,
        }
    }
}
