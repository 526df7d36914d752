mod common;

use std::sync::Arc;

use common::{dictionary, WORDS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wordshift::{GameConfig, GameStatus, GreedyBot, TurnKind, TurnMachine};

/// Check every structural invariant of the game state.
fn assert_invariants(game: &TurnMachine) -> Result<(), TestCaseError> {
    let state = game.state();
    prop_assert!(state
        .available_bonus_letters
        .is_disjoint(&state.locked_bonus_letters));
    for letter in &state.locked_bonus_letters {
        prop_assert!(state.current_word.contains(*letter));
    }
    prop_assert!(state.used_words.contains(&state.current_word));

    let moves = state.history.iter().filter(|r| r.kind == TurnKind::Move).count();
    prop_assert_eq!(state.used_words.len(), moves + 1);

    let scored: u32 = state.history.iter().map(|r| r.score.total()).sum();
    let total: u32 = state.players.iter().map(|p| p.score).sum();
    prop_assert_eq!(scored, total);

    for (i, record) in state.history.iter().enumerate() {
        prop_assert_eq!(record.turn_number as usize, i + 1);
        prop_assert!(record.score.total() <= 4);
    }
    prop_assert_eq!(
        state.status == GameStatus::Finished,
        state.turn_number > state.max_turns
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random mixes of bot moves, passes, key letter edits and arbitrary
    /// words keep the state consistent and the turn counter monotonic.
    #[test]
    fn random_games_keep_invariants(seed in any::<u64>(), max_turns in 1u32..16) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let words = dictionary();
        let bot = GreedyBot::new(Arc::clone(&words));
        let config = GameConfig { max_turns, ..GameConfig::default() };
        let mut game = TurnMachine::new(config, words).unwrap();
        game.add_player("A", false).unwrap();
        game.add_player("B", true).unwrap();
        game.add_player("C", true).unwrap();
        game.start(&mut rng).unwrap();
        assert_invariants(&game)?;

        let mut steps = 0;
        while game.status() == GameStatus::Playing && steps < 200 {
            steps += 1;
            let turn = game.turn_number();
            let resolved = match rng.random_range(0..4) {
                0 => game.make_bot_move(&bot, &mut rng).is_ok(),
                1 => game.pass_turn(),
                2 => {
                    let word = WORDS[rng.random_range(0..WORDS.len())];
                    let attempt = game.attempt_move(word);
                    prop_assert_eq!(&attempt, &game.attempt_move(word));
                    game.apply_move(&attempt)
                }
                _ => {
                    let letter = (b'A' + rng.random_range(0..26u8)) as char;
                    if rng.random_bool(0.5) {
                        game.add_key_letter(letter);
                    } else {
                        game.remove_key_letter(letter);
                    }
                    false
                }
            };
            if resolved {
                prop_assert_eq!(game.turn_number(), turn + 1);
            } else {
                prop_assert_eq!(game.turn_number(), turn);
            }
            assert_invariants(&game)?;
        }
        prop_assert_eq!(game.status(), GameStatus::Finished);
        prop_assert_eq!(game.history().len() as u32, max_turns);
    }
}
