//! In-game screen: board, cursor, and turn flow.

use crossterm::event::{KeyCode, KeyEvent};
use quadrants::{Coordinate, GameState, MoveReceipt, Outcome, Player};
use ratatui::Frame;
use tracing::{debug, info, instrument, warn};

use crate::history::HistoryStore;
use crate::input;
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// State for a single game session.
#[derive(Debug)]
pub struct InGameScreen {
    game: GameState,
    cursor: Coordinate,
    player_a: String,
    player_b: String,
    status: String,
    recorded: bool,
}

impl InGameScreen {
    /// Starts a fresh session for the named players.
    #[instrument(skip(player_a, player_b))]
    pub fn new(player_a: String, player_b: String) -> Self {
        info!(%player_a, %player_b, "Starting game session");
        let status = format!("{}'s turn (a)", player_a);
        Self {
            game: GameState::new(),
            cursor: Coordinate::new(3, 3).expect("static coordinate is in range"),
            player_a,
            player_b,
            status,
            recorded: false,
        }
    }

    fn name_of(&self, player: Player) -> &str {
        match player {
            Player::A => &self.player_a,
            Player::B => &self.player_b,
        }
    }

    /// Appends the outcome to the history store, exactly once.
    fn record_outcome(&mut self, history: &mut HistoryStore) {
        if self.recorded {
            warn!("Outcome already recorded for this session");
            return;
        }
        history.record(self.game.outcome(), &self.player_a, &self.player_b);
        self.recorded = true;
    }

    fn status_after_move(&self, receipt: &MoveReceipt) -> String {
        let mover = match *receipt.outcome() {
            // The turn already flipped, so the mover is the opponent.
            Outcome::InProgress => self.game.active_player().opponent(),
            _ => self.game.active_player(),
        };

        let mut status = format!("{} claimed {}", self.name_of(mover), self.cursor);
        for quadrant in receipt.newly_credited() {
            status.push_str(&format!(" - secured {}!", quadrant));
        }

        match *receipt.outcome() {
            Outcome::InProgress => {
                status.push_str(&format!(
                    " | {}'s turn",
                    self.name_of(self.game.active_player())
                ));
            }
            Outcome::Won(player) => {
                status = format!("{} wins! Press Enter for menu", self.name_of(player));
            }
            Outcome::Draw => {
                status = "Board full - draw! Press Enter for menu".to_string();
            }
            Outcome::Quit => {
                status = "Game quit. Press Enter for menu".to_string();
            }
        }
        status
    }

    fn apply_claim(&mut self, history: &mut HistoryStore) {
        match self.game.apply_move(self.cursor) {
            Ok(receipt) => {
                self.status = self.status_after_move(&receipt);
                if receipt.outcome().is_terminal() {
                    self.record_outcome(history);
                }
            }
            Err(error) => {
                // Recoverable: re-prompt with the reason.
                debug!(%error, "Move rejected");
                self.status = format!("{} - pick another tile", error);
            }
        }
    }

    fn quit_session(&mut self, history: &mut HistoryStore) {
        self.game.force_quit();
        self.status = "Game quit. Press Enter for menu".to_string();
        self.record_outcome(history);
    }
}

impl Screen for InGameScreen {
    fn render(&self, frame: &mut Frame, _history: &HistoryStore) {
        let (title_area, body_area, status_area) = ui::chrome(frame.area());

        let title = format!("Quadrants - {} (a) vs {} (b)", self.player_a, self.player_b);
        ui::render_title(frame, title_area, &title);

        let cursor = if self.game.is_terminal() {
            None
        } else {
            Some(self.cursor)
        };
        ui::board::render_board(frame, body_area, &self.game, cursor);

        ui::render_status(frame, status_area, &self.status);
    }

    #[instrument(skip(self, history))]
    fn handle_key(&mut self, key: KeyEvent, history: &mut HistoryStore) -> ScreenTransition {
        if self.game.is_terminal() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                    ScreenTransition::GoToMainMenu
                }
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                self.apply_claim(history);
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.quit_session(history);
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;

    fn temp_history(name: &str) -> (HistoryStore, PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "quad_in_game_{}_{}",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_file(&path);
        (HistoryStore::load(&path), path)
    }

    fn press(screen: &mut InGameScreen, history: &mut HistoryStore, code: KeyCode) {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), history);
    }

    #[test]
    fn test_enter_claims_tile_under_cursor() {
        let (mut history, path) = temp_history("claim.txt");
        let mut screen = InGameScreen::new("Alice".to_string(), "Bob".to_string());

        press(&mut screen, &mut history, KeyCode::Enter);
        assert_eq!(screen.game.claims(Player::A).len(), 1);
        assert_eq!(screen.game.active_player(), Player::B);

        // Same tile again: rejected, state unchanged.
        press(&mut screen, &mut history, KeyCode::Enter);
        assert_eq!(screen.game.claims(Player::B).len(), 0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_quit_records_outcome_once() {
        let (mut history, path) = temp_history("quit.txt");
        let mut screen = InGameScreen::new("Alice".to_string(), "Bob".to_string());

        press(&mut screen, &mut history, KeyCode::Esc);
        assert_eq!(screen.game.outcome(), Outcome::Quit);
        assert_eq!(history.summary().quits(), &1);

        // Terminal screen keys lead back to the menu without re-recording.
        press(&mut screen, &mut history, KeyCode::Char('x'));
        assert_eq!(history.summary().total(), &1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_cursor_moves_without_claiming() {
        let (mut history, path) = temp_history("cursor.txt");
        let mut screen = InGameScreen::new("Alice".to_string(), "Bob".to_string());

        press(&mut screen, &mut history, KeyCode::Up);
        press(&mut screen, &mut history, KeyCode::Left);
        assert_eq!(screen.cursor, Coordinate::new(2, 2).unwrap());
        assert_eq!(screen.game.claims(Player::A).len(), 0);

        let _ = std::fs::remove_file(&path);
    }
}
