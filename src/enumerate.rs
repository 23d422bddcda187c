//! Candidate move-string enumeration and filtering.
//!
//! The candidate space for a target length `n` is the full Cartesian power
//! of the column alphabet, `7^n` strings. Candidates are produced lazily,
//! cut down by a cheap per-column capacity pre-filter, then replayed in
//! full; a string survives only if every move is legal and the final
//! position is still live (the table pairs each position with its *next*
//! move, so finished games are useless).

use crate::game::{GameState, COLS, ROWS};

/// The seven column symbols, `'1'` through `'7'`.
pub const ALPHABET: &[u8; COLS] = b"1234567";

/// Enumeration parameters, loadable from the `[generator]` config section.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Ply depth of the generated positions.
    pub target_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig { target_length: 6 }
    }
}

/// Lazy odometer over the column alphabet: yields all strings of the fixed
/// length in lexicographic order without materializing the space.
///
/// Length 0 yields exactly the empty string.
pub struct Candidates {
    digits: Vec<u8>,
    done: bool,
}

impl Candidates {
    pub fn new(length: usize) -> Self {
        Candidates {
            digits: vec![0; length],
            done: false,
        }
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let current = self
            .digits
            .iter()
            .map(|&d| char::from(ALPHABET[d as usize]))
            .collect();

        // advance the odometer; positions right of the incremented digit
        // are all at their maximum and wrap to zero
        for i in (0..self.digits.len()).rev() {
            if (self.digits[i] as usize) + 1 < COLS {
                self.digits[i] += 1;
                for digit in &mut self.digits[i + 1..] {
                    *digit = 0;
                }
                return Some(current);
            }
        }
        self.done = true;
        Some(current)
    }
}

/// Cheap pre-filter: no column symbol may occur more than six times, since
/// a column holds six pieces. Also rejects symbols outside the alphabet.
pub fn fits_column_capacity(moves: &str) -> bool {
    let mut counts = [0u8; COLS];
    for symbol in moves.chars() {
        match column_index(symbol) {
            Some(col) => {
                counts[col] += 1;
                if counts[col] > ROWS as u8 {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}

/// Replay a move-string against a fresh board and check that it describes a
/// reachable, still-live position: every move legal, no win or draw before
/// or at the end of the string.
///
/// Rejections are the expected high-frequency outcome here, so they are
/// logged at debug level and never escalate.
pub fn replays_to_live_position(moves: &str) -> bool {
    let mut state = GameState::initial();
    for symbol in moves.chars() {
        let Some(col) = column_index(symbol) else {
            log::debug!("rejecting {moves:?}: symbol {symbol:?} is not a column");
            return false;
        };
        if let Err(err) = state.apply_move_mut(col) {
            log::debug!("rejecting {moves:?}: column {} is {err:?}", col + 1);
            return false;
        }
    }
    !state.is_terminal()
}

/// All accepted move-strings of the target length, lazily.
///
/// At length 42 every candidate that survives replay fills the board and is
/// therefore terminal, so the stream is empty; that is expected.
pub fn accepted_positions(target_length: usize) -> impl Iterator<Item = String> {
    Candidates::new(target_length)
        .filter(|moves| fits_column_capacity(moves))
        .filter(|moves| replays_to_live_position(moves))
}

/// 0-based column for an alphabet symbol, `None` for anything else.
fn column_index(symbol: char) -> Option<usize> {
    match symbol.to_digit(10) {
        Some(d) if (1..=COLS as u32).contains(&d) => Some(d as usize - 1),
        _ => None,
    }
}
