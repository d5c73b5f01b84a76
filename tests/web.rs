#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use tic_tac_toe::TicTacToe;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).expect("property must be readable")
}

fn config(ascending: bool, log_level: &str) -> JsValue {
    let object = Object::new();
    Reflect::set(&object, &"ascending".into(), &JsValue::from_bool(ascending)).unwrap();
    Reflect::set(&object, &"log_level".into(), &JsValue::from_str(log_level)).unwrap();
    object.into()
}

#[wasm_bindgen_test]
fn wasm_ready_reports_true() {
    assert!(tic_tac_toe::wasm_ready());
}

#[wasm_bindgen_test]
fn undefined_config_uses_defaults() {
    let game = TicTacToe::new(JsValue::UNDEFINED).unwrap();

    assert!(game.is_ascending());
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.history_len(), 1);
}

#[wasm_bindgen_test]
fn bad_log_level_throws() {
    let err = TicTacToe::new(config(true, "loud")).err().unwrap();

    assert_eq!(
        err.as_string().as_deref(),
        Some("invalid config: unknown log level \"loud\"")
    );
}

#[wasm_bindgen_test]
fn view_exposes_board_status_and_moves() {
    let mut game = TicTacToe::new(config(false, "debug")).unwrap();
    for cell in [0, 1, 4, 2, 8] {
        assert!(game.play_move(cell));
    }
    assert!(!game.play_move(5));

    let view = game.view().unwrap();
    let board = get(&view, "board");
    let history = get(&view, "history");

    assert_eq!(get(&board, "status").as_string().as_deref(), Some("Winner: X"));
    assert_eq!(get(&board, "is_game_over").as_bool(), Some(true));
    let line = Array::from(&get(&board, "winning_line"));
    let line: Vec<f64> = line.iter().map(|v| v.as_f64().unwrap()).collect();
    assert_eq!(line, vec![0.0, 4.0, 8.0]);

    let cells = Array::from(&get(&board, "cells"));
    assert_eq!(cells.length(), 9);
    assert_eq!(get(&cells.get(4), "mark").as_string().as_deref(), Some("X"));
    assert_eq!(get(&cells.get(4), "is_winning").as_bool(), Some(true));

    let entries = Array::from(&get(&history, "entries"));
    assert_eq!(entries.length(), 6);
    assert_eq!(
        get(&entries.get(0), "label").as_string().as_deref(),
        Some("You are at move #5")
    );
    assert_eq!(
        get(&history, "sort_label").as_string().as_deref(),
        Some("Sort Moves: Descending")
    );
}

#[wasm_bindgen_test]
fn jump_then_play_discards_later_moves() {
    let mut game = TicTacToe::new(JsValue::NULL).unwrap();
    for cell in [0, 1, 2, 3, 4] {
        game.play_move(cell);
    }

    game.jump_to(2);
    assert!(game.play_move(7));

    assert_eq!(game.history_len(), 4);
    assert_eq!(game.current_move(), 3);
}
