#![cfg(feature = "std")]

mod common;

use std::sync::Arc;

use common::dictionary;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordshift::{GameConfig, GameState, GreedyBot, TurnMachine};

fn played_game(seed: u64, turns: u32) -> TurnMachine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let words = dictionary();
    let bot = GreedyBot::new(Arc::clone(&words));
    let config = GameConfig {
        max_turns: 20,
        ..GameConfig::default()
    };
    let mut game = TurnMachine::new(config, words).unwrap();
    game.add_player("Ann", false).unwrap();
    game.add_player("Bot", true).unwrap();
    game.start(&mut rng).unwrap();
    for _ in 0..turns {
        game.make_bot_move(&bot, &mut rng).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), turns in 0u32..12) {
        let game = played_game(seed, turns);
        let state = game.state();
        let bytes = bincode::serialize(state).unwrap();
        let decoded: GameState = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(&decoded, state);

        let restored = TurnMachine::from_state(decoded, dictionary()).unwrap();
        prop_assert_eq!(restored.state(), game.state());
        for word in common::WORDS {
            let a = game.attempt_move(word);
            let b = restored.attempt_move(word);
            prop_assert_eq!(a.rejection(), b.rejection());
            prop_assert_eq!(a.score(), b.score());
        }
    }
}

#[test]
fn game_state_json_roundtrip() {
    let game = played_game(99, 5);
    let json = serde_json::to_string(game.state()).unwrap();
    let decoded: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&decoded, game.state());
}

#[test]
fn saved_games_resume_where_they_stopped() {
    let game = played_game(4, 3);
    let mut buf = Vec::new();
    wordshift::save_state(game.state(), &mut buf).unwrap();
    let state = wordshift::load_state(buf.as_slice()).unwrap();

    let mut restored = TurnMachine::from_state(state, dictionary()).unwrap();
    let turn = restored.turn_number();
    assert!(restored.pass_turn());
    assert_eq!(restored.turn_number(), turn + 1);
    assert_eq!(restored.history().len(), 4);
}

#[test]
fn save_files_roundtrip() {
    let game = played_game(8, 6);
    let path = std::env::temp_dir().join(format!("wordshift-save-{}.bin", std::process::id()));
    wordshift::save_to_file(game.state(), &path).unwrap();
    let loaded = wordshift::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(&loaded, game.state());
}

#[test]
fn garbage_is_not_a_save() {
    assert!(wordshift::load_state(&b"not a game"[..]).is_err());
}
