#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
pub mod player;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod save;
#[cfg(feature = "std")]
pub mod session;
pub mod prelude;

pub use crate::core::*;
pub use player::{Participant, ScriptedPlayer, TurnChoice};
#[cfg(feature = "std")]
pub use cli::{print_game_view, print_history, print_outcome, print_scoreboard};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player::CliPlayer;
#[cfg(feature = "std")]
pub use save::{load_from_file, load_state, save_state, save_to_file};
#[cfg(feature = "std")]
pub use session::{
    play_bot_turn, play_human_turn, propose_with_deadline, Seat, Session, DEFAULT_BOT_DEADLINE,
};
