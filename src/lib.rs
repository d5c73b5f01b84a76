use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod game;
pub mod logging;
pub mod types;
pub mod view;

use crate::config::GameConfig;
use crate::game::Game;
use crate::types::GameView;
use crate::view::MoveHistoryView;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Browser-facing game handle. The host calls one method per UI event and
/// redraws from `view()`.
#[wasm_bindgen]
pub struct TicTacToe {
    game: Game,
    moves: MoveHistoryView,
}

#[wasm_bindgen]
impl TicTacToe {
    /// Accepts an optional `{ ascending, log_level }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TicTacToe, JsValue> {
        let config = GameConfig::from_js(config)?;
        logging::init(config.level_filter()?);
        Ok(Self::with_config(&config))
    }

    /// Returns `true` when the click placed a mark.
    pub fn play_move(&mut self, cell: u32) -> bool {
        view::board::handle_click(&mut self.game, cell as usize).is_placed()
    }

    pub fn jump_to(&mut self, move_index: u32) {
        self.game.jump_to(move_index as usize);
    }

    pub fn toggle_sort_order(&mut self) {
        self.moves.toggle_sort_order();
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.snapshot())?)
    }

    pub fn current_move(&self) -> u32 {
        self.game.current_move() as u32
    }

    pub fn history_len(&self) -> u32 {
        self.game.history().len() as u32
    }

    pub fn is_ascending(&self) -> bool {
        self.moves.is_ascending()
    }
}

impl TicTacToe {
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            game: Game::new(),
            moves: MoveHistoryView::new(config.ascending),
        }
    }

    pub fn snapshot(&self) -> GameView {
        GameView {
            board: view::board::render(&self.game),
            history: self.moves.render(&self.game),
            current_move: self.game.current_move() as u32,
            next_player: self.game.current_turn(),
        }
    }
}
