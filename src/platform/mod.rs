//! Platform abstraction layer
//!
//! Handles browser/native differences for storage: LocalStorage on web,
//! an in-memory map everywhere else.

pub mod storage;
