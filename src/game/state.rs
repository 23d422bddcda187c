use super::{Bitboard, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Game state machine over the bitboard: applies moves with full legality
/// checking and tracks the outcome as soon as one is reached.
///
/// This is the rejection-path API: an unplayable column comes back as an
/// `Err`, never a panic, so candidate replays can discard bad strings as a
/// matter of course. [`Bitboard::play`] is the strict low-level contract
/// underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Bitboard,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Bitboard::new(),
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Get reference to board
    pub fn board(&self) -> &Bitboard {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        if !self.board.is_playable(column) {
            return Err(MoveError::ColumnFull);
        }

        let mover = self.board.current_player();
        self.board.play(column);

        if self.board.is_win(mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_draw() {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(())
    }
}
