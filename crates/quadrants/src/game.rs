//! The quadrants game state machine.

use crate::action::{Claim, ClaimError, MoveReceipt};
use crate::coordinate::Coordinate;
use crate::quadrant::Quadrant;
use crate::rules;
use crate::types::{Board, Outcome, Player, TileClaim, TileView};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game session.
///
/// Created fresh per session, mutated exclusively through
/// [`GameState::apply_move`] and [`GameState::force_quit`], and discarded
/// once the outcome turns terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    claims_a: Vec<Coordinate>,
    claims_b: Vec<Coordinate>,
    credits_a: Vec<Quadrant>,
    credits_b: Vec<Quadrant>,
    active: Player,
    outcome: Outcome,
    history: Vec<Claim>,
}

impl GameState {
    /// Creates a fresh game: all tiles unclaimed, no credits, A to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            claims_a: Vec::new(),
            claims_b: Vec::new(),
            credits_a: Vec::new(),
            credits_b: Vec::new(),
            active: Player::A,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the outcome is terminal.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns a player's claimed tiles in claim order.
    pub fn claims(&self, player: Player) -> &[Coordinate] {
        match player {
            Player::A => &self.claims_a,
            Player::B => &self.claims_b,
        }
    }

    /// Returns the quadrants credited to a player, in credit order.
    pub fn credits(&self, player: Player) -> &[Quadrant] {
        match player {
            Player::A => &self.credits_a,
            Player::B => &self.credits_b,
        }
    }

    /// Returns the full move history.
    pub fn history(&self) -> &[Claim] {
        &self.history
    }

    fn claims_mut(&mut self, player: Player) -> &mut Vec<Coordinate> {
        match player {
            Player::A => &mut self.claims_a,
            Player::B => &mut self.claims_b,
        }
    }

    fn credits_mut(&mut self, player: Player) -> &mut Vec<Quadrant> {
        match player {
            Player::A => &mut self.credits_a,
            Player::B => &mut self.credits_b,
        }
    }

    /// Applies the active player's claim at `coordinate`.
    ///
    /// The claim, any resulting quadrant credits, and the outcome
    /// transition commit atomically: validation failures leave the state
    /// untouched. On success the turn passes to the opponent unless the
    /// outcome turned terminal.
    ///
    /// # Errors
    ///
    /// - [`ClaimError::GameOver`] if the outcome is already terminal.
    /// - [`ClaimError::TileAlreadyClaimed`] if the tile is taken; the
    ///   caller is expected to re-prompt.
    ///
    /// Out-of-range coordinates cannot reach this method: constructing a
    /// [`Coordinate`] already rejects them.
    #[instrument(skip(self), fields(player = %self.active, tile = %coordinate))]
    pub fn apply_move(&mut self, coordinate: Coordinate) -> Result<MoveReceipt, ClaimError> {
        if self.outcome.is_terminal() {
            return Err(ClaimError::GameOver);
        }
        if !self.board.is_unclaimed(coordinate) {
            return Err(ClaimError::TileAlreadyClaimed(coordinate));
        }

        let player = self.active;
        self.board.claim(coordinate, player);
        self.claims_mut(player).push(coordinate);
        self.history.push(Claim::new(player, coordinate));
        // Each player can claim at most half the board.
        debug_assert!(self.claims(player).len() <= 18);

        let newly_credited =
            rules::newly_completed(self.claims(player), &self.credits_a, &self.credits_b);
        for quadrant in &newly_credited {
            debug_assert!(!self.credits(player).contains(quadrant));
            debug_assert!(!self.credits(player.opponent()).contains(quadrant));
            self.credits_mut(player).push(*quadrant);
            info!(quadrant = %quadrant, player = %player, "Quadrant credited");
        }

        if rules::holds_diagonal_pair(self.credits(player)) {
            self.outcome = Outcome::Won(player);
            info!(outcome = %self.outcome, "Game over");
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
            info!("Board full, game drawn");
        } else {
            self.active = player.opponent();
            debug!(next = %self.active, "Turn passed");
        }

        Ok(MoveReceipt::new(newly_credited, self.outcome))
    }

    /// Forces the session into the `Quit` outcome.
    ///
    /// No-op if the game already ended; the board is frozen as-is.
    #[instrument(skip(self))]
    pub fn force_quit(&mut self) {
        if !self.outcome.is_terminal() {
            info!("Session quit by caller");
            self.outcome = Outcome::Quit;
        }
    }

    /// Display projection of a tile for renderers.
    ///
    /// Tiles inside a credited quadrant's 3x3 block project as
    /// `Credited` for the crediting player; the underlying claim state
    /// is unaffected.
    pub fn tile_view(&self, coordinate: Coordinate) -> TileView {
        for quadrant in Quadrant::CANONICAL {
            if !quadrant.contains(coordinate) {
                continue;
            }
            if self.credits_a.contains(&quadrant) {
                return TileView::Credited(Player::A);
            }
            if self.credits_b.contains(&quadrant) {
                return TileView::Credited(Player::B);
            }
        }
        match self.board.get(coordinate) {
            TileClaim::Unclaimed => TileView::Unclaimed,
            TileClaim::Claimed(player) => TileView::Claimed(player),
        }
    }

    /// Rebuilds a game state by applying a sequence of coordinates from
    /// a fresh game.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ClaimError`] encountered.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Coordinate]) -> Result<GameState, ClaimError> {
        let mut state = GameState::new();
        for coordinate in moves {
            state.apply_move(*coordinate)?;
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: u8, column: u8) -> Coordinate {
        Coordinate::new(row, column).unwrap()
    }

    #[test]
    fn test_fresh_game() {
        let state = GameState::new();
        assert_eq!(state.active_player(), Player::A);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.board().unclaimed_count(), 36);
        assert!(state.claims(Player::A).is_empty());
        assert!(state.credits(Player::B).is_empty());
    }

    #[test]
    fn test_move_alternates_turns() {
        let mut state = GameState::new();
        state.apply_move(coord(1, 1)).unwrap();
        assert_eq!(state.active_player(), Player::B);
        state.apply_move(coord(6, 6)).unwrap();
        assert_eq!(state.active_player(), Player::A);
        assert_eq!(state.claims(Player::A), &[coord(1, 1)]);
        assert_eq!(state.claims(Player::B), &[coord(6, 6)]);
    }

    #[test]
    fn test_already_claimed_leaves_state_unchanged() {
        let mut state = GameState::new();
        state.apply_move(coord(2, 2)).unwrap();
        let snapshot = state.clone();

        let result = state.apply_move(coord(2, 2));
        assert_eq!(result, Err(ClaimError::TileAlreadyClaimed(coord(2, 2))));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_move_after_terminal_rejected() {
        let mut state = GameState::new();
        state.force_quit();
        assert_eq!(state.apply_move(coord(1, 1)), Err(ClaimError::GameOver));
    }

    #[test]
    fn test_force_quit_freezes_board() {
        let mut state = GameState::new();
        state.apply_move(coord(3, 3)).unwrap();
        state.force_quit();

        assert_eq!(state.outcome(), Outcome::Quit);
        assert!(state.is_terminal());
        assert_eq!(state.claims(Player::A), &[coord(3, 3)]);
        // Quit is terminal and immutable.
        state.force_quit();
        assert_eq!(state.outcome(), Outcome::Quit);
    }

    #[test]
    fn test_receipt_reports_credit() {
        // A takes the top-left control pattern; B plays elsewhere.
        let mut state = GameState::replay(&[
            coord(1, 1),
            coord(4, 4),
            coord(1, 3),
            coord(4, 6),
            coord(2, 2),
            coord(5, 5),
            coord(3, 1),
            coord(6, 4),
        ])
        .unwrap();

        let receipt = state.apply_move(coord(3, 3)).unwrap();
        assert_eq!(receipt.newly_credited(), &vec![Quadrant::TopLeft]);
        assert_eq!(*receipt.outcome(), Outcome::InProgress);
        assert_eq!(state.credits(Player::A), &[Quadrant::TopLeft]);
    }

    #[test]
    fn test_tile_view_projects_credited_block() {
        let mut state = GameState::replay(&[
            coord(1, 1),
            coord(4, 4),
            coord(1, 3),
            coord(4, 6),
            coord(2, 2),
            coord(5, 5),
            coord(3, 1),
            coord(6, 4),
        ])
        .unwrap();
        state.apply_move(coord(3, 3)).unwrap();

        // Whole top-left block projects as credited, even unclaimed tiles.
        for tile in Quadrant::TopLeft.display_block() {
            assert_eq!(state.tile_view(tile), TileView::Credited(Player::A));
        }
        // Claim state underneath is untouched.
        assert_eq!(state.board().get(coord(1, 2)), TileClaim::Unclaimed);
        assert_eq!(state.board().get(coord(1, 1)), TileClaim::Claimed(Player::A));
        // Outside the block the ordinary projection applies.
        assert_eq!(state.tile_view(coord(4, 4)), TileView::Claimed(Player::B));
        assert_eq!(state.tile_view(coord(6, 6)), TileView::Unclaimed);
    }
}
