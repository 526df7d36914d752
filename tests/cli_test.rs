#![cfg(feature = "std")]

mod common;

use std::collections::BTreeSet;

use common::{play, started_game};
use wordshift::cli::{format_letters, format_record, format_word};
use wordshift::player::cli::{parse_command, Command};
use wordshift::{Participant, TurnChoice};

#[test]
fn parses_words_and_commands() {
    assert_eq!(
        parse_command("cats\n"),
        Some(Command::Choice(TurnChoice::Play("cats".to_string())))
    );
    assert_eq!(
        parse_command("?cart"),
        Some(Command::Preview("cart".to_string()))
    );
    assert_eq!(parse_command("/pass"), Some(Command::Choice(TurnChoice::Pass)));
    assert_eq!(parse_command("/QUIT"), Some(Command::Choice(TurnChoice::Quit)));
    assert_eq!(parse_command("/exit"), Some(Command::Choice(TurnChoice::Quit)));
    assert_eq!(
        parse_command("/key r"),
        Some(Command::Choice(TurnChoice::AddKeyLetter('r')))
    );
    assert_eq!(
        parse_command("/unkey Q"),
        Some(Command::Choice(TurnChoice::RemoveKeyLetter('Q')))
    );
    assert_eq!(parse_command("/history"), Some(Command::History));
    assert_eq!(parse_command("/help"), Some(Command::Help));
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(parse_command("   "), None);
    assert_eq!(parse_command("/"), None);
    assert_eq!(parse_command("/key"), None);
    assert_eq!(parse_command("/key ab"), None);
    assert_eq!(parse_command("/key 1"), None);
    assert_eq!(parse_command("/dance"), None);
}

#[test]
fn letters_and_words_render() {
    let empty = BTreeSet::new();
    assert_eq!(format_letters(&empty), "-");
    let letters: BTreeSet<char> = ['S', 'R'].into_iter().collect();
    assert_eq!(format_letters(&letters), "R S");

    let locked: BTreeSet<char> = ['A'].into_iter().collect();
    assert_eq!(format_word("CAT", &locked), "C [A] T");
    assert_eq!(format_word("CAT", &empty), "C A T");
}

#[test]
fn records_render_moves_and_passes() {
    let mut game = started_game(10, "CAT");
    play(&mut game, "CATS");
    game.pass_turn();
    let records: Vec<String> = game.history().iter().map(format_record).collect();
    assert_eq!(records[0], "  1. P0 CAT -> CATS +1 (add 1, remove 0, reorder 0, key 0)");
    assert_eq!(records[1], "  2. P1 passed");
}

#[test]
fn cli_player_reads_until_a_choice() {
    let game = started_game(10, "CAT");
    let input = "\n/dance\n?cart\n/history\n/key s\n";
    let mut player = wordshift::CliPlayer::from_reader(input.as_bytes());
    assert_eq!(player.choose(&game), TurnChoice::AddKeyLetter('s'));
    // End of input quits.
    assert_eq!(player.choose(&game), TurnChoice::Quit);
}
