//! Screen trait and transition type for the TUI state machine.

use crate::history::HistoryStore;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](crate::controller::Controller) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the main menu.
    GoToMainMenu,
    /// Navigate to the player name entry screen.
    GoToNameEntry,
    /// Navigate to the instructions screen.
    GoToHowToPlay,
    /// Navigate to the history view.
    GoToHistory,
    /// Start a game session with the given player names.
    StartGame {
        /// Name of player A.
        player_a: String,
        /// Name of player B.
        player_b: String,
    },
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own state, renders its UI, and handles key
/// events. The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, history: &HistoryStore);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, history: &mut HistoryStore) -> ScreenTransition;
}
