//! # C4 Tablegen
//!
//! Generates the Connect Four opening table: every reachable, still-live
//! position at a fixed ply depth, paired with the columns an external
//! solver scores best. A packed bitboard replays each candidate move-string
//! and throws out the illegal and the already-decided; survivors are scored
//! through the oracle seam and rendered as table records.
//!
//! ## Modules
//!
//! - [`game`]: core game logic: bitboard, player, replay state machine
//! - [`enumerate`]: lazy candidate generation and filtering
//! - [`score`]: best-column selection from solver score vectors
//! - [`oracle`]: score source trait and the file-backed implementation
//! - [`table`]: output record rendering
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod config;
pub mod enumerate;
pub mod error;
pub mod game;
pub mod oracle;
pub mod score;
pub mod table;
