use tracing::debug;

use crate::board::BOARD_LEN;
use crate::game::{Game, GameStatus, MoveOutcome, Rejection};
use crate::types::{BoardModel, CellView};

/// Builds the grid model from the displayed snapshot.
pub fn render(game: &Game) -> BoardModel {
    let board = game.current_board();
    let win = game.winner();

    let cells = board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| CellView {
            index: index as u8,
            mark: cell.player(),
            is_winning: win.is_some_and(|win| win.contains(index)),
        })
        .collect();

    BoardModel {
        cells,
        status: status_line(game),
        winning_line: win.map(|win| win.line.map(|index| index as u8)),
        is_game_over: game.status().is_terminal(),
        congratulations: win
            .map(|win| format!("Congratulations Player {} is the winner! 🎉🥳", win.player)),
    }
}

pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::Won(win) => format!("Winner: {}", win.player),
        GameStatus::Drawn => "It's a draw!".to_string(),
        GameStatus::InProgress => format!("Next player: {}", game.current_turn()),
    }
}

/// Handles a click on `cell`.
///
/// Refuses clicks on a won board or a taken cell before the store sees them;
/// the store applies the same checks on its own.
pub fn handle_click(game: &mut Game, cell: usize) -> MoveOutcome {
    assert!(cell < BOARD_LEN, "cell index {cell} out of range");

    let refused = if game.winner().is_some() {
        Some(Rejection::GameOver)
    } else if !game.current_board().cell(cell).is_empty() {
        Some(Rejection::CellOccupied(cell))
    } else {
        None
    };

    match refused {
        Some(reason) => {
            debug!(cell, %reason, "click ignored");
            MoveOutcome::Rejected(reason)
        }
        None => game.play_move(cell),
    }
}
