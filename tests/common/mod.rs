#![allow(dead_code)]

use std::sync::Arc;

use wordshift::{GameConfig, TurnMachine, WordList};

pub const WORDS: &[&str] = &[
    "CAT", "CART", "CARTS", "CATS", "ACT", "ACTS", "CAST", "SCAT", "TACO", "COAT", "DOG",
    "DOGS", "DOGGY", "GOD", "DOSS", "BOSS", "BOSSY", "POPE", "OPE", "FLOE", "FOES", "NARD",
    "YARN",
];

pub fn dictionary() -> Arc<WordList> {
    Arc::new(WordList::from_words(WORDS))
}

/// Two-player game (one human, one bot) already started on `start`.
pub fn started_game(max_turns: u32, start: &str) -> TurnMachine {
    let config = GameConfig {
        max_turns,
        ..GameConfig::default()
    };
    let mut game = TurnMachine::new(config, dictionary()).unwrap();
    game.add_player("Ann", false).unwrap();
    game.add_player("Bot", true).unwrap();
    game.start_with(start).unwrap();
    game
}

/// Attempt and apply `word`, panicking if it is refused.
pub fn play(game: &mut TurnMachine, word: &str) {
    let attempt = game.attempt_move(word);
    assert!(attempt.can_apply(), "{} refused: {:?}", word, attempt.rejection());
    assert!(game.apply_move(&attempt));
}
