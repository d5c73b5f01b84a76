pub mod board;
pub mod history;

pub use history::MoveHistoryView;
