//! Word transformation analysis and scoring.
//!
//! A move turns the previous word into a new one by adding letters,
//! removing letters and/or reordering them. Each kind of action is worth
//! one point no matter how many letters it touches, and playing any key
//! letter is worth one more.
//!
//! Reorder detection has to tell a real transposition apart from the
//! positional shift caused by an insertion or deletion: dropping the `P`
//! from `POPE` gives `OPE` without moving any letter relative to the
//! others, so it is a removal only.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter;

type LetterCounts = BTreeMap<char, usize>;

/// Kind of edit detected between two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Add,
    Remove,
    Reorder,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Add => write!(f, "add"),
            ActionKind::Remove => write!(f, "remove"),
            ActionKind::Reorder => write!(f, "reorder"),
        }
    }
}

/// Letter-level description of how one word became another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationAnalysis {
    /// Letters gained, as a sorted multiset.
    pub added_letters: Vec<char>,
    /// Letters lost, as a sorted multiset.
    pub removed_letters: Vec<char>,
    pub is_reordered: bool,
    pub bonus_letters_used: BTreeSet<char>,
}

impl TransformationAnalysis {
    /// Actions present in this transformation, in scoring order.
    pub fn actions(&self) -> Vec<ActionKind> {
        let mut actions = Vec::new();
        if !self.added_letters.is_empty() {
            actions.push(ActionKind::Add);
        }
        if !self.removed_letters.is_empty() {
            actions.push(ActionKind::Remove);
        }
        if self.is_reordered {
            actions.push(ActionKind::Reorder);
        }
        actions
    }

    /// Whether `letter` is among the removed letters.
    pub fn removes(&self, letter: char) -> bool {
        self.removed_letters.contains(&letter)
    }
}

/// Points earned by a move, one per action kind plus one for key letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    add_points: u8,
    remove_points: u8,
    reorder_points: u8,
    bonus_points: u8,
}

impl ScoreBreakdown {
    /// Breakdown of a pass or a degenerate move.
    pub const fn zero() -> Self {
        Self {
            add_points: 0,
            remove_points: 0,
            reorder_points: 0,
            bonus_points: 0,
        }
    }

    pub fn add_points(&self) -> u32 {
        u32::from(self.add_points)
    }

    pub fn remove_points(&self) -> u32 {
        u32::from(self.remove_points)
    }

    pub fn reorder_points(&self) -> u32 {
        u32::from(self.reorder_points)
    }

    pub fn bonus_points(&self) -> u32 {
        u32::from(self.bonus_points)
    }

    /// Sum of all components.
    pub fn total(&self) -> u32 {
        self.add_points() + self.remove_points() + self.reorder_points() + self.bonus_points()
    }
}

impl From<&TransformationAnalysis> for ScoreBreakdown {
    fn from(analysis: &TransformationAnalysis) -> Self {
        Self {
            add_points: u8::from(!analysis.added_letters.is_empty()),
            remove_points: u8::from(!analysis.removed_letters.is_empty()),
            reorder_points: u8::from(analysis.is_reordered),
            bonus_points: u8::from(!analysis.bonus_letters_used.is_empty()),
        }
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} (add {}, remove {}, reorder {}, key {})",
            self.total(),
            self.add_points,
            self.remove_points,
            self.reorder_points,
            self.bonus_points
        )
    }
}

/// Scoring capability consumed by the turn machine.
pub trait Scorer: Send + Sync {
    /// Classify the transformation from `previous` to `new`.
    fn analyze(&self, previous: &str, new: &str, bonus: &BTreeSet<char>) -> TransformationAnalysis;

    /// Points for the transformation from `previous` to `new`.
    fn score(&self, previous: &str, new: &str, bonus: &BTreeSet<char>) -> ScoreBreakdown {
        ScoreBreakdown::from(&self.analyze(previous, new, bonus))
    }
}

/// The standard rules implemented by [`analyze`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl Scorer for StandardScorer {
    fn analyze(&self, previous: &str, new: &str, bonus: &BTreeSet<char>) -> TransformationAnalysis {
        analyze(previous, new, bonus)
    }
}

/// Trim surrounding whitespace and uppercase every letter.
pub fn normalize_word(word: &str) -> String {
    word.trim().chars().flat_map(char::to_uppercase).collect()
}

/// Classify how `previous` was transformed into `new`.
///
/// Both words are normalized first. If either is empty the result carries
/// no actions at all.
pub fn analyze(previous: &str, new: &str, bonus: &BTreeSet<char>) -> TransformationAnalysis {
    let previous = normalize_word(previous);
    let new = normalize_word(new);
    if previous.is_empty() || new.is_empty() {
        return TransformationAnalysis::default();
    }

    let before = letter_counts(&previous);
    let after = letter_counts(&new);

    let mut added_letters = Vec::new();
    let mut removed_letters = Vec::new();
    let mut kept = 0;
    let letters: BTreeSet<char> = before.keys().chain(after.keys()).copied().collect();
    for letter in letters {
        let had = before.get(&letter).copied().unwrap_or(0);
        let has = after.get(&letter).copied().unwrap_or(0);
        if has > had {
            added_letters.extend(iter::repeat(letter).take(has - had));
        } else if had > has {
            removed_letters.extend(iter::repeat(letter).take(had - has));
        }
        kept += had.min(has);
    }

    // The stayed letters kept their order iff some arrangement of them is a
    // common subsequence of both words.
    let is_reordered = common_subsequence_len(&previous, &new) < kept;

    let bonus_letters_used = bonus
        .iter()
        .flat_map(|letter| letter.to_uppercase())
        .filter(|letter| after.contains_key(letter))
        .collect();

    TransformationAnalysis {
        added_letters,
        removed_letters,
        is_reordered,
        bonus_letters_used,
    }
}

/// Points for transforming `previous` into `new`.
pub fn score(previous: &str, new: &str, bonus: &BTreeSet<char>) -> ScoreBreakdown {
    ScoreBreakdown::from(&analyze(previous, new, bonus))
}

fn letter_counts(word: &str) -> LetterCounts {
    let mut counts = LetterCounts::new();
    for letter in word.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

/// Length of the longest common subsequence of `a` and `b`.
fn common_subsequence_len(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row = alloc::vec![0usize; b.len() + 1];
    for x in a.chars() {
        let mut diagonal = 0;
        for (j, y) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == *y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
