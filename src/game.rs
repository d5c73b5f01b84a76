use tracing::{debug, info};

use crate::board::{self, BOARD_LEN, Board, Player, Win};

/// Whole-game state, derived from the displayed snapshot only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Win),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    #[display("the displayed board already has a winner")]
    GameOver,
    #[display("cell {_0} is already occupied")]
    CellOccupied(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { cell: usize, player: Player },
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_placed(self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

/// Board history plus the pointer to the displayed snapshot.
///
/// Contract:
/// - `history[0]` is the empty board and `history` is never empty.
/// - `current_move < history.len()` at all times.
/// - Whose turn it is follows from `current_move` parity; it is never stored.
#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
}

impl Game {
    pub fn new() -> Self {
        info!("new game");
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Plays the current player's mark on `cell` of the displayed board.
    ///
    /// Ignored without any state change when the displayed board has a winner
    /// or the cell is taken. Any entries after the pointer are discarded
    /// before the new snapshot is appended.
    pub fn play_move(&mut self, cell: usize) -> MoveOutcome {
        assert!(cell < BOARD_LEN, "cell index {cell} out of range");

        let current = *self.current_board();
        if board::evaluate(&current).is_some() {
            return self.reject(Rejection::GameOver);
        }
        if !current.cell(cell).is_empty() {
            return self.reject(Rejection::CellOccupied(cell));
        }

        let player = self.current_turn();
        let next = current.with_mark(cell, player);

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(cell, %player, move_number = self.current_move, "move placed");
        match self.status() {
            GameStatus::Won(win) => info!(winner = %win.player, line = ?win.line, "game won"),
            GameStatus::Drawn => info!("game drawn"),
            GameStatus::InProgress => {}
        }

        MoveOutcome::Placed { cell, player }
    }

    /// Moves the pointer to `move_index` without touching history.
    /// Caller contract: `move_index < self.history().len()`.
    pub fn jump_to(&mut self, move_index: usize) {
        assert!(
            move_index < self.history.len(),
            "move index {move_index} out of range (history has {} entries)",
            self.history.len()
        );
        self.current_move = move_index;
        debug!(move_index, "jumped to move");
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// X moves on even pointers, O on odd ones.
    pub fn current_turn(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn winner(&self) -> Option<Win> {
        board::evaluate(self.current_board())
    }

    pub fn is_draw(&self) -> bool {
        board::is_draw(self.current_board())
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(win) => GameStatus::Won(win),
            None if self.current_board().is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    fn reject(&self, reason: Rejection) -> MoveOutcome {
        debug!(%reason, move_number = self.current_move, "move ignored");
        MoveOutcome::Rejected(reason)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
