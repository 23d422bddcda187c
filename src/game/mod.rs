//! Core Connect Four game logic: packed bitboard, player types, and the
//! replay state machine.

mod board;
mod player;
mod state;

pub use board::{Bitboard, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
