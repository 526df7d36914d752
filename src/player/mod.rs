//! Participants that decide human turns
//!
//! Automated seats are driven by a [`crate::core::Bot`]; everything else
//! implements [`Participant`]:
//! - CliPlayer: Interactive command-line player
//! - ScriptedPlayer: Replays a fixed list of choices

use alloc::string::String;

use crate::core::{MoveAttempt, TurnMachine, TurnRecord};

/// What a participant wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnChoice {
    /// Submit a word for the current turn.
    Play(String),
    Pass,
    AddKeyLetter(char),
    RemoveKeyLetter(char),
    /// Abandon the game.
    Quit,
}

/// Interface implemented by non-automated players.
///
/// `choose` is called repeatedly until it produces a choice that resolves
/// the turn (an accepted word, a pass, or quitting).
pub trait Participant: Send {
    /// Decide the next action given read-only access to the game.
    fn choose(&mut self, game: &TurnMachine) -> TurnChoice;

    /// Inform the participant that its last word was refused.
    fn handle_rejection(&mut self, _attempt: &MoveAttempt) {}

    /// Inform the participant of any resolved turn, its own included.
    fn handle_turn(&mut self, _record: &TurnRecord) {}
}

pub mod scripted;
pub use scripted::ScriptedPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
