//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    score, GameConfig, GameOutcome, GameStatus, GreedyBot, MoveAttempt, RejectionReason,
    TurnMachine, WordList, WordOracle,
};
pub use crate::player::{Participant, TurnChoice};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_game_view, CliPlayer, Session};
