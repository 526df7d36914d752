#![cfg(feature = "std")]

use std::io::{self, BufRead, BufReader, Write};
use std::string::String;

use super::{Participant, TurnChoice};
use crate::cli::{print_game_view, print_history};
use crate::core::{MoveAttempt, TurnMachine, TurnRecord};

const HELP: &str = "\
Commands:
  WORD          play WORD
  ?WORD         preview the score of WORD without playing it
  /pass         skip your turn
  /key X        add X to the key letters
  /unkey X      remove X from the key letters
  /history      show every turn so far
  /quit         leave the game";

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Choice(TurnChoice),
    Preview(String),
    History,
    Help,
}

/// Parse one line typed by the player. Returns `None` for blank or
/// unrecognized input.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(word) = line.strip_prefix('?') {
        return Some(Command::Preview(String::from(word.trim())));
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Some(Command::Choice(TurnChoice::Play(String::from(line))));
    };
    let mut parts = rest.split_whitespace();
    let command = parts.next()?.to_ascii_lowercase();
    let letter = parts.next().and_then(|arg| {
        let mut chars = arg.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
            _ => None,
        }
    });
    match command.as_str() {
        "pass" => Some(Command::Choice(TurnChoice::Pass)),
        "quit" | "exit" => Some(Command::Choice(TurnChoice::Quit)),
        "key" => letter.map(|c| Command::Choice(TurnChoice::AddKeyLetter(c))),
        "unkey" => letter.map(|c| Command::Choice(TurnChoice::RemoveKeyLetter(c))),
        "history" => Some(Command::History),
        "help" => Some(Command::Help),
        _ => None,
    }
}

/// Human player reading commands from a terminal.
pub struct CliPlayer {
    input: Box<dyn BufRead + Send>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    /// Read commands from any buffered source instead of stdin.
    pub fn from_reader<R: BufRead + Send + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    fn read_line(&mut self) -> Option<String> {
        print!("> ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for CliPlayer {
    fn choose(&mut self, game: &TurnMachine) -> TurnChoice {
        print_game_view(game);
        loop {
            // End of input leaves the game.
            let Some(line) = self.read_line() else {
                return TurnChoice::Quit;
            };
            match parse_command(&line) {
                Some(Command::Choice(choice)) => return choice,
                Some(Command::Preview(word)) => {
                    let attempt = game.attempt_move(&word);
                    match attempt.message() {
                        None => println!("{} would score {}", attempt.word(), attempt.score()),
                        Some(msg) => println!("{}: {}", attempt.word(), msg),
                    }
                }
                Some(Command::History) => print_history(game),
                Some(Command::Help) => println!("{}", HELP),
                None => println!("Unrecognized input, type /help for commands"),
            }
        }
    }

    fn handle_rejection(&mut self, attempt: &MoveAttempt) {
        println!(
            "{} was not accepted: {}",
            attempt.word(),
            attempt.message().unwrap_or_default()
        );
    }

    fn handle_turn(&mut self, record: &TurnRecord) {
        if record.is_pass() {
            println!("Turn {}: pass", record.turn_number);
        } else {
            println!(
                "Turn {}: {} -> {} {}",
                record.turn_number, record.previous_word, record.new_word, record.score
            );
        }
    }
}
