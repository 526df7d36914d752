// Greedy word search for automated players.
// Candidates are trial-scored through `TurnMachine::attempt_move`, so the
// search never sees or changes anything a human player could not.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::core::{dictionary::WordList, game::TurnMachine};

/// Candidates examined per turn unless configured otherwise.
pub const DEFAULT_SEARCH_BUDGET: usize = 2_000;

/// Proposes a word for the player whose turn it is.
pub trait Bot: Send + Sync {
    /// Pick a candidate for the current turn, or `None` to pass.
    fn propose(&self, game: &TurnMachine, rng: &mut dyn RngCore) -> Option<String>;
}

/// Plays the highest scoring legal word it can find, breaking ties at
/// random.
#[derive(Debug, Clone)]
pub struct GreedyBot {
    words: Arc<WordList>,
    budget: usize,
}

impl GreedyBot {
    pub fn new(words: Arc<WordList>) -> Self {
        Self {
            words,
            budget: DEFAULT_SEARCH_BUDGET,
        }
    }

    /// Limit how many plausible candidates are trial-scored per turn.
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }
}

impl Bot for GreedyBot {
    fn propose(&self, game: &TurnMachine, rng: &mut dyn RngCore) -> Option<String> {
        let current = game.current_word();
        let len = current.len();
        let mut best: Vec<&str> = Vec::new();
        let mut best_total = 0;
        let mut examined = 0;

        for word in self.words.words_between(len.saturating_sub(1), len + 1) {
            if examined >= self.budget {
                break;
            }
            if !within_one_edit(current, word) {
                continue;
            }
            examined += 1;
            let attempt = game.attempt_move(word);
            if !attempt.can_apply() {
                continue;
            }
            let total = attempt.score().total();
            if total > best_total {
                best.clear();
                best_total = total;
            }
            if total == best_total {
                best.push(word);
            }
        }

        log::debug!(
            "bot examined {} candidates for {}, {} tied at {}",
            examined,
            current,
            best.len(),
            best_total
        );
        best.choose(rng).map(|word| String::from(*word))
    }
}

/// Cheap prefilter: at most one letter gained and one lost, counted over
/// A-Z. Anything outside that range is left for `attempt_move` to judge.
fn within_one_edit(from: &str, to: &str) -> bool {
    let mut delta = [0i32; 26];
    for b in from.bytes().filter(u8::is_ascii_uppercase) {
        delta[(b - b'A') as usize] -= 1;
    }
    for b in to.bytes().filter(u8::is_ascii_uppercase) {
        delta[(b - b'A') as usize] += 1;
    }
    let gained: i32 = delta.iter().filter(|d| **d > 0).sum();
    let lost: i32 = -delta.iter().filter(|d| **d < 0).sum::<i32>();
    gained <= 1 && lost <= 1
}
