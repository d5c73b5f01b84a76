use serde::Serialize;

use crate::board::Player;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// One rendered square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: u8,
    /// `None` for an empty square, otherwise `"X"` or `"O"`.
    pub mark: Option<Player>,
    pub is_winning: bool,
}

/// Everything the host needs to draw the grid and the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardModel {
    /// Exactly 9 cells, row-major.
    pub cells: Vec<CellView>,
    pub status: String,
    pub winning_line: Option<[u8; 3]>,
    /// Contract:
    /// - `true` when the displayed board is won or drawn; clicks are ignored.
    pub is_game_over: bool,
    /// Contract:
    /// - `Some` exactly when the displayed board has a winner.
    pub congratulations: Option<String>,
}

/// One row in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub move_index: u32,
    pub label: String,
    /// Cell placed by this move; `None` for the start entry.
    pub position: Option<Position>,
    /// Contract:
    /// - `true` for the displayed move, which renders as a marker, not a jump control.
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryModel {
    pub ascending: bool,
    pub sort_label: String,
    /// Display order; follows `ascending`.
    pub entries: Vec<MoveEntry>,
}

/// Public view returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub board: BoardModel,
    pub history: HistoryModel,
    pub current_move: u32,
    pub next_player: Player,
}
