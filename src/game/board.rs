use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Bits per column in the packed layout. Each column owns 7 consecutive
/// bits; the topmost is never occupied and serves as the overflow sentinel.
const COLUMN_STRIDE: u64 = (ROWS + 1) as u64;

/// The reserved sentinel bit of every column (bits 6, 13, ..., 48).
const TOP_MASK: u64 = 0b1000000_1000000_1000000_1000000_1000000_1000000_1000000;

/// Shift distances of the four win directions under the 7-bit column
/// stride: 1 vertical, 6 and 8 the two diagonals, 7 horizontal. These
/// values and the packed layout move together.
const WIN_SHIFTS: [u64; 4] = [1, 6, 7, 8];

const NUM_CELLS: u32 = (ROWS * COLS) as u32;

/// Packed two-player board.
///
/// Bit `col * 7 + row` holds the piece at (col, row), row 0 at the bottom.
/// `heights` stores the absolute bit offset of each column's next free cell,
/// so `heights[col]` starts at `col * 7` and grows by one per piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bitboards: [u64; 2],
    heights: [u64; COLS],
    moves: u32,
}

impl Bitboard {
    /// Create a new empty board
    pub fn new() -> Self {
        Bitboard {
            bitboards: [0, 0],
            heights: std::array::from_fn(|col| col as u64 * COLUMN_STRIDE),
            moves: 0,
        }
    }

    /// The player to move, derived from move-count parity. Red moves first.
    pub fn current_player(&self) -> Player {
        Player::from_move_count(self.moves)
    }

    /// Total number of pieces on the board
    pub fn num_moves(&self) -> u32 {
        self.moves
    }

    /// Number of pieces stacked in a column. Never exceeds 6 after legal
    /// play.
    pub fn pieces_in_column(&self, col: usize) -> u32 {
        (self.heights[col] - col as u64 * COLUMN_STRIDE) as u32
    }

    /// Check whether a piece can be dropped in a column: the column's next
    /// free bit must not be its reserved sentinel bit.
    pub fn is_playable(&self, col: usize) -> bool {
        if col >= COLS {
            return false;
        }
        TOP_MASK & (1u64 << self.heights[col]) == 0
    }

    /// Drop the current player's piece in a column.
    ///
    /// The caller must have checked [`is_playable`](Self::is_playable);
    /// playing a full or out-of-range column is a logic error and panics.
    pub fn play(&mut self, col: usize) {
        assert!(self.is_playable(col), "play() on unplayable column {col}");
        let bit = 1u64 << self.heights[col];
        self.heights[col] += 1;
        self.bitboards[self.current_player().index()] ^= bit;
        self.moves += 1;
    }

    /// Check whether a player has four in a row in any direction.
    ///
    /// Branch-free: AND together four copies of the player's bitboard
    /// shifted by 0, s, 2s, 3s. Any surviving bit is the start of a
    /// connected run of four along that direction.
    pub fn is_win(&self, player: Player) -> bool {
        let b = self.bitboards[player.index()];
        WIN_SHIFTS
            .iter()
            .any(|&s| b & (b >> s) & (b >> (2 * s)) & (b >> (3 * s)) != 0)
    }

    /// Check whether the board is full without either player having won
    pub fn is_draw(&self) -> bool {
        self.moves == NUM_CELLS && !self.is_win(Player::Red) && !self.is_win(Player::Yellow)
    }

    /// Check whether the game has ended: a win for either player, or a
    /// full board.
    pub fn is_game_over(&self) -> bool {
        self.is_win(Player::Red) || self.is_win(Player::Yellow) || self.moves == NUM_CELLS
    }
}

impl Default for Bitboard {
    fn default() -> Self {
        Self::new()
    }
}
