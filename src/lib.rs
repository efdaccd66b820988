//! Pick-A-nimal - a card-matching memory game
//!
//! This crate is the game's local leaderboard and persistence layer.
//!
//! Core modules:
//! - `leaderboard`: score records, defensive validation, rankings
//! - `platform`: browser/native storage abstraction
//! - `web`: wasm-bindgen bindings consumed by the page

pub mod leaderboard;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use leaderboard::{
    BestStats, DEFAULT_NICKNAME, DEFAULT_TOP_LIMIT, Difficulty, Leaderboard, ScoreRecord,
    ScoreSubmission, default_nickname,
};
pub use platform::storage::{MemoryStore, StringStore};
