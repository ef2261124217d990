//! Instructions screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::history::HistoryStore;
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

const INSTRUCTIONS: &str = "\
Quadrants is a two-player game on a 6x6 board split into four 3x3 \
quadrants. Players take turns claiming any unclaimed tile with the \
arrow keys and Enter.

Each quadrant hides a fixed pattern of control tiles. The first player \
to claim every control tile of a quadrant is credited that quadrant, \
and its whole 3x3 block lights up in their color.

Three quadrants have five control tiles; the bottom-left has six.

The game ends the moment a player holds both quadrants of a diagonal \
pair (top-left with bottom-right, or top-right with bottom-left). If \
all 36 tiles are claimed first, the game is a draw. Esc quits the \
current game.";

/// State for the instructions screen.
#[derive(Debug)]
pub struct HowToPlayScreen;

impl HowToPlayScreen {
    /// Creates the instructions screen.
    #[instrument]
    pub fn new() -> Self {
        Self
    }
}

impl Screen for HowToPlayScreen {
    fn render(&self, frame: &mut Frame, _history: &HistoryStore) {
        let (title_area, body_area, status_area) = ui::chrome(frame.area());

        ui::render_title(frame, title_area, "Quadrants - How to Play");

        let text_area = ui::center_rect(body_area, 64, 16);
        let text = Paragraph::new(INSTRUCTIONS)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(text, text_area);

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
