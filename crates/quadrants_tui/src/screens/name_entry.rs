//! Player name entry screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::history::HistoryStore;
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// Names are stored space-separated in the history file, so they are
/// capped and may not contain whitespace.
const MAX_NAME_LEN: usize = 30;

/// Which name field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    PlayerA,
    PlayerB,
}

/// State for the name entry screen.
#[derive(Debug)]
pub struct NameEntryScreen {
    name_a: String,
    name_b: String,
    active: Field,
    error: Option<String>,
}

impl NameEntryScreen {
    /// Creates a new name entry screen with empty fields.
    #[instrument]
    pub fn new() -> Self {
        Self {
            name_a: String::new(),
            name_b: String::new(),
            active: Field::PlayerA,
            error: None,
        }
    }

    fn active_name_mut(&mut self) -> &mut String {
        match self.active {
            Field::PlayerA => &mut self.name_a,
            Field::PlayerB => &mut self.name_b,
        }
    }

    fn submit(&mut self) -> ScreenTransition {
        if self.name_a.is_empty() || self.name_b.is_empty() {
            self.error = Some("Both players need a name".to_string());
            return ScreenTransition::Stay;
        }
        ScreenTransition::StartGame {
            player_a: self.name_a.clone(),
            player_b: self.name_b.clone(),
        }
    }

    fn render_field(&self, frame: &mut Frame, area: ratatui::layout::Rect, field: Field) {
        let (label, value) = match field {
            Field::PlayerA => ("Player A", &self.name_a),
            Field::PlayerB => ("Player B", &self.name_b),
        };
        let style = if self.active == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = if self.active == field {
            format!("{}_", value)
        } else {
            value.clone()
        };
        let input = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title(label).style(style));
        frame.render_widget(input, area);
    }
}

impl Screen for NameEntryScreen {
    fn render(&self, frame: &mut Frame, _history: &HistoryStore) {
        let (title_area, body_area, status_area) = ui::chrome(frame.area());

        ui::render_title(frame, title_area, "Quadrants - New Game");

        let form_area = ui::center_rect(body_area, 40, 7);
        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(form_area);
        self.render_field(frame, fields[0], Field::PlayerA);
        self.render_field(frame, fields[2], Field::PlayerB);

        let status = match &self.error {
            Some(error) => error.clone(),
            None => "Type a name, Tab to switch, Enter to start, Esc for menu".to_string(),
        };
        ui::render_status(frame, status_area, &status);
    }

    #[instrument(skip(self, _history))]
    fn handle_key(&mut self, key: KeyEvent, _history: &mut HistoryStore) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => ScreenTransition::GoToMainMenu,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.active = match self.active {
                    Field::PlayerA => Field::PlayerB,
                    Field::PlayerB => Field::PlayerA,
                };
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.active {
                Field::PlayerA => {
                    self.active = Field::PlayerB;
                    ScreenTransition::Stay
                }
                Field::PlayerB => self.submit(),
            },
            KeyCode::Backspace => {
                self.active_name_mut().pop();
                self.error = None;
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if !c.is_whitespace() => {
                let name = self.active_name_mut();
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
                self.error = None;
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}
