use tracing::debug;

use crate::board::index_to_row_col;
use crate::game::Game;
use crate::types::{HistoryModel, MoveEntry, Position};

/// Move list state. Only the display order lives here; the list itself is
/// rebuilt from the game on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveHistoryView {
    ascending: bool,
}

impl MoveHistoryView {
    pub fn new(ascending: bool) -> Self {
        Self { ascending }
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn toggle_sort_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "move list order toggled");
    }

    pub fn sort_label(&self) -> &'static str {
        if self.ascending {
            "Sort Moves: Ascending"
        } else {
            "Sort Moves: Descending"
        }
    }

    pub fn render(&self, game: &Game) -> HistoryModel {
        let history = game.history();
        let mut entries: Vec<MoveEntry> = (0..history.len())
            .map(|move_index| {
                // The placed cell comes from diffing with the previous snapshot,
                // so moves played after a jump get their real coordinates.
                let position = move_index
                    .checked_sub(1)
                    .and_then(|prev| history[prev].changed_cell(&history[move_index]))
                    .map(|cell| {
                        let (row, col) = index_to_row_col(cell);
                        Position {
                            row: row as u8,
                            col: col as u8,
                        }
                    });
                let is_current = move_index == game.current_move();

                MoveEntry {
                    move_index: move_index as u32,
                    label: entry_label(move_index, position, is_current),
                    position,
                    is_current,
                }
            })
            .collect();

        if !self.ascending {
            entries.reverse();
        }

        HistoryModel {
            ascending: self.ascending,
            sort_label: self.sort_label().to_string(),
            entries,
        }
    }
}

impl Default for MoveHistoryView {
    fn default() -> Self {
        Self::new(true)
    }
}

fn entry_label(move_index: usize, position: Option<Position>, is_current: bool) -> String {
    if is_current {
        return format!("You are at move #{move_index}");
    }
    match position {
        Some(Position { row, col }) => format!("Go to move #{move_index} ({row}, {col})"),
        None => "Go to game start".to_string(),
    }
}
