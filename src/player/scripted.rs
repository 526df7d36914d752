use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::{Participant, TurnChoice};
use crate::core::{MoveAttempt, RejectionReason, TurnMachine, TurnRecord};

/// Replays a fixed sequence of choices, then passes forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    script: VecDeque<TurnChoice>,
    rejections: Vec<RejectionReason>,
    seen: usize,
}

impl ScriptedPlayer {
    pub fn new<I: IntoIterator<Item = TurnChoice>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Reasons for every refused word, oldest first.
    pub fn rejections(&self) -> &[RejectionReason] {
        &self.rejections
    }

    /// Number of resolved turns this player was told about.
    pub fn turns_seen(&self) -> usize {
        self.seen
    }
}

impl Participant for ScriptedPlayer {
    fn choose(&mut self, _game: &TurnMachine) -> TurnChoice {
        self.script.pop_front().unwrap_or(TurnChoice::Pass)
    }

    fn handle_rejection(&mut self, attempt: &MoveAttempt) {
        if let Some(reason) = attempt.rejection() {
            self.rejections.push(reason);
        }
    }

    fn handle_turn(&mut self, _record: &TurnRecord) {
        self.seen += 1;
    }
}
