//! Command-line display helpers
//!
//! Rendering of the current word, key letters, scores and history for
//! the terminal front end.

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;
