use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::sample::Index;
use wordshift::{analyze, score};

fn word() -> impl Strategy<Value = String> {
    "[A-Z]{1,10}"
}

fn key_letters() -> impl Strategy<Value = BTreeSet<char>> {
    prop::collection::btree_set(prop::char::range('A', 'Z'), 0..4)
}

fn word_and_permutation() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(prop::char::range('A', 'Z'), 1..10).prop_flat_map(|letters| {
        let original: String = letters.iter().collect();
        (Just(original), Just(letters).prop_shuffle())
            .prop_map(|(original, shuffled)| (original, shuffled.into_iter().collect()))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A word compared with itself never earns points.
    #[test]
    fn self_transformation_scores_zero(w in word()) {
        prop_assert_eq!(score(&w, &w, &BTreeSet::new()).total(), 0);
    }

    /// The total is always the sum of its parts, each worth at most one.
    #[test]
    fn total_is_sum_of_components(a in word(), b in word(), keys in key_letters()) {
        let s = score(&a, &b, &keys);
        for part in [s.add_points(), s.remove_points(), s.reorder_points(), s.bonus_points()] {
            prop_assert!(part <= 1);
        }
        prop_assert_eq!(
            s.total(),
            s.add_points() + s.remove_points() + s.reorder_points() + s.bonus_points()
        );
    }

    /// Permutations never add or remove and only reorder when the order changed.
    #[test]
    fn permutation_is_reorder_only((original, shuffled) in word_and_permutation()) {
        let a = analyze(&original, &shuffled, &BTreeSet::new());
        prop_assert!(a.added_letters.is_empty());
        prop_assert!(a.removed_letters.is_empty());
        prop_assert_eq!(a.is_reordered, original != shuffled);
    }

    /// Inserting one letter anywhere is a natural shift.
    #[test]
    fn single_insertion_is_not_a_reorder(
        w in "[A-Z]{1,9}",
        letter in prop::char::range('A', 'Z'),
        at in any::<Index>(),
    ) {
        let mut longer: Vec<char> = w.chars().collect();
        longer.insert(at.index(longer.len() + 1), letter);
        let longer: String = longer.into_iter().collect();

        let a = analyze(&w, &longer, &BTreeSet::new());
        prop_assert_eq!(a.added_letters, vec![letter]);
        prop_assert!(a.removed_letters.is_empty());
        prop_assert!(!a.is_reordered);

        let back = analyze(&longer, &w, &BTreeSet::new());
        prop_assert_eq!(back.removed_letters, vec![letter]);
        prop_assert!(!back.is_reordered);
    }

    /// Swapping one letter for another at any positions is a natural shift.
    #[test]
    fn single_substitution_is_not_a_reorder(
        w in "[A-Z]{2,10}",
        from in any::<Index>(),
        letter in prop::char::range('A', 'Z'),
        to in any::<Index>(),
    ) {
        let mut letters: Vec<char> = w.chars().collect();
        let removed = letters.remove(from.index(letters.len()));
        prop_assume!(removed != letter);
        letters.insert(to.index(letters.len() + 1), letter);
        let changed: String = letters.into_iter().collect();

        let a = analyze(&w, &changed, &BTreeSet::new());
        prop_assert_eq!(a.added_letters, vec![letter]);
        prop_assert_eq!(a.removed_letters, vec![removed]);
        prop_assert!(!a.is_reordered);
    }

    /// Lowercase and padded input is scored exactly like its normalized form.
    #[test]
    fn scoring_ignores_case_and_padding(a in word(), b in word(), keys in key_letters()) {
        let padded = format!("  {} ", b.to_lowercase());
        prop_assert_eq!(
            analyze(&a.to_lowercase(), &padded, &keys),
            analyze(&a, &b, &keys)
        );
    }

    /// Scoring is deterministic.
    #[test]
    fn analysis_is_deterministic(a in word(), b in word(), keys in key_letters()) {
        prop_assert_eq!(analyze(&a, &b, &keys), analyze(&a, &b, &keys));
    }
}
