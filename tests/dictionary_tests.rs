use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordshift::{WordList, WordOracle};

#[test]
fn words_are_normalized_and_filtered() {
    let list = WordList::from_words([" cat ", "Dog", "ox", "abcdefghijk", "can't", "", "CAT"]);
    assert_eq!(list.len(), 2);
    assert!(list.is_valid_word("CAT"));
    assert!(list.is_valid_word("dog"));
    assert!(list.is_valid_word(" Dog\n"));
    assert!(!list.is_valid_word("OX"));
    assert!(!list.is_valid_word("CAN'T"));
}

#[test]
fn insert_reports_new_words_only() {
    let mut list = WordList::default();
    assert!(list.is_empty());
    assert!(list.insert("yarn"));
    assert!(!list.insert("YARN"));
    assert!(!list.insert("no"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.words_of_length(4), ["YARN".to_string()]);
}

#[test]
fn random_word_has_the_requested_length() {
    let list = WordList::from_words(["CAT", "CART", "CARTS", "DOGS"]);
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..20 {
        let word = list.random_word_of_length(4, &mut rng).unwrap();
        assert!(word == "CART" || word == "DOGS");
    }
    assert_eq!(list.random_word_of_length(7, &mut rng), None);
}

#[test]
fn words_between_is_inclusive() {
    let list = WordList::from_words(["CAT", "CART", "CARTS", "CARTED"]);
    let mut found: Vec<&str> = list.words_between(4, 5).collect();
    found.sort_unstable();
    assert_eq!(found, ["CART", "CARTS"]);
    assert_eq!(list.words_between(8, 2).count(), 0);
}

#[test]
fn builtin_list_covers_common_moves() {
    let list = WordList::builtin();
    assert!(list.len() > 300);
    for word in ["CAT", "DOG", "POPE", "FLOE", "FOES", "NARD", "YARN"] {
        assert!(list.is_valid_word(word), "{} missing", word);
    }
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(list.random_word_of_length(4, &mut rng).is_some());
}

#[cfg(feature = "std")]
#[test]
fn reader_skips_comments_and_blank_lines() {
    let text = "# starter words\ncat\n\n  dogs  \n#skip\nx\n";
    let list = WordList::from_reader(text.as_bytes()).unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.is_valid_word("CAT"));
    assert!(list.is_valid_word("DOGS"));
    assert!(!list.is_valid_word("SKIP"));
}
