use serde::Serialize;
use tracing::instrument;

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Every winning triple, in scan order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Player {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Taken(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

/// One immutable 3x3 snapshot, cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_LEN],
}

impl Board {
    /// Creates the all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_LEN]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Cell; BOARD_LEN] {
        &self.cells
    }

    /// Returns a copy of this board with `index` marked for `player`.
    /// Caller contract: the cell must be empty.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        assert!(
            self.cells[index].is_empty(),
            "cell {index} is already taken"
        );
        let mut next = *self;
        next.cells[index] = Cell::Taken(player);
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns the first cell that differs between `self` and `next`.
    /// Consecutive history entries differ in exactly one cell.
    pub fn changed_cell(&self, next: &Board) -> Option<usize> {
        self.cells
            .iter()
            .zip(next.cells.iter())
            .position(|(before, after)| before != after)
    }
}

/// Winning player together with the completed triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Win {
    pub player: Player,
    pub line: [usize; 3],
}

impl Win {
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Returns the first completed line in `LINES` order, or `None`.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.cell(a).player()?;
        (board.cell(b) == Cell::Taken(player) && board.cell(c) == Cell::Taken(player))
            .then_some(Win { player, line })
    })
}

/// A draw is a full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate(board).is_none()
}

pub fn index_to_row_col(index: usize) -> (usize, usize) {
    (index / BOARD_WIDTH, index % BOARD_WIDTH)
}

#[cfg(test)]
pub(crate) fn parse_board(rows: &str) -> Board {
    let mut cells = [Cell::Empty; BOARD_LEN];
    let marks: Vec<char> = rows.chars().filter(|ch| *ch != '/').collect();
    assert_eq!(marks.len(), BOARD_LEN, "board literal must have 9 cells");
    for (cell, mark) in cells.iter_mut().zip(marks) {
        *cell = match mark {
            'X' => Cell::Taken(Player::X),
            'O' => Cell::Taken(Player::O),
            '.' => Cell::Empty,
            other => panic!("unexpected board mark {other:?}"),
        };
    }
    Board::from_cells(cells)
}
