//! Quadrants game engine - pure two-player tile-claiming logic.
//!
//! Two players alternately claim tiles on a 6x6 board split into four
//! 3x3 quadrants. Completing a quadrant's control pattern credits that
//! quadrant to the player; the game ends when a player's credited set
//! holds a diagonal quadrant pair, when the board fills (draw), or when
//! the session is quit.
//!
//! The crate is a pure state-transition API: no I/O, no terminal
//! coupling, no persistence. Presentation layers consume
//! [`GameState::apply_move`], [`GameState::tile_view`], and the terminal
//! [`Outcome`]; a history store records outcomes outside this crate.
//!
//! # Example
//!
//! ```
//! use quadrants::{ClaimError, Coordinate, GameState, Outcome};
//!
//! # fn main() -> Result<(), ClaimError> {
//! let mut game = GameState::new();
//! let receipt = game.apply_move(Coordinate::new(1, 1)?)?;
//!
//! assert!(receipt.newly_credited().is_empty());
//! assert_eq!(*receipt.outcome(), Outcome::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
mod game;
mod quadrant;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Claim, ClaimError, MoveReceipt};
pub use coordinate::Coordinate;
pub use game::GameState;
pub use quadrant::Quadrant;
pub use types::{Board, Outcome, Player, TileClaim, TileView};
