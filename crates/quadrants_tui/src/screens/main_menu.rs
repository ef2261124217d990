//! Main menu screen - hub for navigation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::history::HistoryStore;
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// Menu options available in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play,
    HowToPlay,
    ViewHistory,
    ResetHistory,
    Quit,
}

impl MenuOption {
    fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::HowToPlay => "How to Play",
            Self::ViewHistory => "View History",
            Self::ResetHistory => "Reset History",
            Self::Quit => "Quit",
        }
    }

    fn all() -> &'static [MenuOption] {
        &[
            Self::Play,
            Self::HowToPlay,
            Self::ViewHistory,
            Self::ResetHistory,
            Self::Quit,
        ]
    }
}

/// State for the main menu screen.
#[derive(Debug)]
pub struct MainMenuScreen {
    list_state: ListState,
    status: String,
}

impl MainMenuScreen {
    /// Creates a new main menu screen.
    #[instrument]
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            list_state: state,
            status: "Arrows to navigate, Enter to select".to_string(),
        }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

impl Screen for MainMenuScreen {
    fn render(&self, frame: &mut Frame, history: &HistoryStore) {
        let (title_area, body_area, status_area) = ui::chrome(frame.area());

        ui::render_title(frame, title_area, "Quadrants");

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|option| ListItem::new(option.label()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Main Menu"))
            .highlight_style(
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let list_area = ui::center_rect(body_area, 30, MenuOption::all().len() as u16 + 2);
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, list_area, &mut list_state);

        let games = Paragraph::new(format!("{} games on record", history.summary().total()))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        if body_area.height > list_area.height {
            let footer = ratatui::layout::Rect {
                y: list_area.y + list_area.height,
                height: 1,
                ..body_area
            };
            frame.render_widget(games, footer);
        }

        ui::render_status(frame, status_area, &self.status);
    }

    #[instrument(skip(self, history))]
    fn handle_key(&mut self, key: KeyEvent, history: &mut HistoryStore) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                debug!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::Play => ScreenTransition::GoToNameEntry,
                    MenuOption::HowToPlay => ScreenTransition::GoToHowToPlay,
                    MenuOption::ViewHistory => ScreenTransition::GoToHistory,
                    MenuOption::ResetHistory => {
                        history.reset();
                        info!("History reset from main menu");
                        self.status = "History reset".to_string();
                        ScreenTransition::Stay
                    }
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
