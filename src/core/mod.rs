//! Core wordshift game engine (no_std compatible)
//!
//! This module contains the pure game logic: scoring of word
//! transformations and the turn machine that owns the game state. It only
//! needs `alloc`, `rand` and the `log` facade, so it can be embedded or
//! compiled to WebAssembly.

pub mod bot;
pub mod common;
pub mod config;
pub mod dictionary;
pub mod game;
pub mod history;
pub mod scoring;

// Re-export commonly used types
pub use bot::{Bot, GreedyBot, DEFAULT_SEARCH_BUDGET};
pub use common::{RejectionReason, TurnError};
pub use config::*;
pub use dictionary::{WordList, WordOracle, BUILTIN_WORDS};
pub use game::{GameOutcome, GameState, GameStatus, MoveAttempt, Player, TurnMachine};
pub use history::{PlayerId, TurnKind, TurnLog, TurnRecord};
pub use scoring::{
    analyze, normalize_word, score, ActionKind, ScoreBreakdown, Scorer, StandardScorer,
    TransformationAnalysis,
};
