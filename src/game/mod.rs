//! Core game logic: board representation, player types, and the turn
//! state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, WIN_LENGTH};
pub use player::{Player, PlayerName, PlayerProfile};
pub use state::{GameOutcome, GameState, MoveError};
