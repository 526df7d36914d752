//! Append-only record of resolved turns.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::core::scoring::ScoreBreakdown;

/// Stable identifier of a player within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u8);

/// How a turn was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnKind {
    Move,
    Pass,
}

/// One resolved turn. For a pass `previous_word` and `new_word` are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub turn_number: u32,
    pub player_id: PlayerId,
    pub previous_word: String,
    pub new_word: String,
    pub score: ScoreBreakdown,
    pub bonus_letters_used: BTreeSet<char>,
    pub kind: TurnKind,
}

impl TurnRecord {
    pub fn is_pass(&self) -> bool {
        self.kind == TurnKind::Pass
    }
}

/// Growable log of turn records. Entries are only ever appended, so the
/// index returned by [`TurnLog::push`] stays valid for the whole game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct TurnLog {
    records: Vec<TurnRecord>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: TurnRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&TurnRecord> {
        self.records.get(index)
    }

    pub fn last(&self) -> Option<&TurnRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnRecord> + '_ {
        self.records.iter()
    }

    /// Records belonging to one player, oldest first.
    pub fn by_player(&self, player: PlayerId) -> impl Iterator<Item = &TurnRecord> + '_ {
        self.records.iter().filter(move |r| r.player_id == player)
    }
}
