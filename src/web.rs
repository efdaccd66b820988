//! Browser bindings for the game page
//!
//! Score sequences and stat objects cross the boundary as camelCase JSON
//! strings; the difficulty filter crosses as an optional "easy"/"hard"
//! string. Unknown difficulty strings mean "no filter" on queries.

use wasm_bindgen::prelude::*;

use crate::leaderboard::{
    DEFAULT_NICKNAME, DEFAULT_TOP_LIMIT, Difficulty, Leaderboard, ScoreSubmission,
};
use crate::platform::storage::LocalStorage;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Pick-A-nimal leaderboard loaded");
}

/// Leaderboard over LocalStorage, detached when the capability is missing
fn board() -> Leaderboard<LocalStorage> {
    match LocalStorage::detect() {
        Some(storage) => Leaderboard::new(storage),
        None => Leaderboard::detached(),
    }
}

fn parse_difficulty(s: Option<String>) -> Option<Difficulty> {
    s.as_deref().and_then(Difficulty::from_str)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[wasm_bindgen(js_name = getDefaultNickname)]
pub fn get_default_nickname() -> String {
    DEFAULT_NICKNAME.to_string()
}

#[wasm_bindgen(js_name = readScores)]
pub fn read_scores() -> String {
    to_json(&board().read_scores())
}

#[wasm_bindgen(js_name = saveScore)]
pub fn save_score(
    flip_count: u32,
    elapsed_time: f64,
    created_at: f64,
    difficulty: &str,
    nickname: Option<String>,
) {
    board().save_score(ScoreSubmission {
        nickname,
        flip_count,
        elapsed_time,
        created_at,
        difficulty: Difficulty::from_str(difficulty).unwrap_or_default(),
    });
}

#[wasm_bindgen(js_name = getBestStats)]
pub fn get_best_stats(difficulty: Option<String>) -> String {
    to_json(&board().best_stats(parse_difficulty(difficulty)))
}

#[wasm_bindgen(js_name = getTopScoresByElapsedTime)]
pub fn get_top_scores_by_elapsed_time(limit: Option<u32>, difficulty: Option<String>) -> String {
    let limit = limit.map(|l| l as usize).unwrap_or(DEFAULT_TOP_LIMIT);
    to_json(&board().top_by_elapsed_time(limit, parse_difficulty(difficulty)))
}

#[wasm_bindgen(js_name = getTopScoresByFlipCount)]
pub fn get_top_scores_by_flip_count(limit: Option<u32>, difficulty: Option<String>) -> String {
    let limit = limit.map(|l| l as usize).unwrap_or(DEFAULT_TOP_LIMIT);
    to_json(&board().top_by_flip_count(limit, parse_difficulty(difficulty)))
}
