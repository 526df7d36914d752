#![cfg(feature = "std")]

//! Text rendering of the game for terminal front ends.

use std::collections::BTreeSet;
use std::string::String;

use crate::core::{GameOutcome, GameStatus, TurnMachine, TurnRecord};

/// Render a set of letters as `A B C`, or `-` when empty.
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return String::from("-");
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spaced-out word with locked letters in brackets, e.g. `C [A] T`.
pub fn format_word(word: &str, locked: &BTreeSet<char>) -> String {
    word.chars()
        .map(|c| {
            if locked.contains(&c) {
                format!("[{}]", c)
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line summary of a resolved turn.
pub fn format_record(record: &TurnRecord) -> String {
    if record.is_pass() {
        format!("{:>3}. P{} passed", record.turn_number, record.player_id.0)
    } else {
        format!(
            "{:>3}. P{} {} -> {} {}",
            record.turn_number,
            record.player_id.0,
            record.previous_word,
            record.new_word,
            record.score
        )
    }
}

/// Print the scores of every player, marking whose turn it is.
pub fn print_scoreboard(game: &TurnMachine) {
    for player in game.players() {
        let marker = if player.is_current_turn { '>' } else { ' ' };
        let kind = if player.is_automated { "bot" } else { "human" };
        println!("{} {:<12} {:>4}  ({})", marker, player.name, player.score, kind);
    }
}

/// Display the current word, the key letters and the scores.
pub fn print_game_view(game: &TurnMachine) {
    let state = game.state();
    println!();
    println!(
        "Turn {}/{}   word: {}",
        state.turn_number.min(state.max_turns),
        state.max_turns,
        format_word(&state.current_word, &state.locked_bonus_letters)
    );
    println!(
        "Key letters: {}   locked: {}",
        format_letters(&state.available_bonus_letters),
        format_letters(&state.locked_bonus_letters)
    );
    print_scoreboard(game);
}

pub fn print_history(game: &TurnMachine) {
    if game.history().is_empty() {
        println!("No turns played yet.");
        return;
    }
    for record in game.history().iter() {
        println!("{}", format_record(record));
    }
}

/// Announce the result once the game is over.
pub fn print_outcome(game: &TurnMachine) {
    if game.status() != GameStatus::Finished {
        return;
    }
    println!("\nFinal scores:");
    print_scoreboard(game);
    match game.outcome() {
        Some(GameOutcome::Winner(id)) => {
            let name = game
                .players()
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            println!("{} wins!", name);
        }
        Some(GameOutcome::Draw) | None => println!("It's a draw."),
    }
}
