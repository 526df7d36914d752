use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info, warn};
use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::core::{
    bot::Bot,
    common::{RejectionReason, TurnError},
    config::{is_valid_length, GameConfig, ALPHABET},
    dictionary::WordOracle,
    history::{PlayerId, TurnKind, TurnLog, TurnRecord},
    scoring::{normalize_word, ScoreBreakdown, Scorer, StandardScorer, TransformationAnalysis},
};

/// Lifecycle of a game. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    NotStarted,
    Playing,
    Finished,
}

/// A seat at the table and its running score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_automated: bool,
    pub score: u32,
    pub is_current_turn: bool,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// Complete, serializable state of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub current_word: String,
    pub players: Vec<Player>,
    pub current_turn_index: usize,
    pub turn_number: u32,
    pub max_turns: u32,
    pub status: GameStatus,
    /// Every word that has been the current word, starting word included.
    pub used_words: BTreeSet<String>,
    pub available_bonus_letters: BTreeSet<char>,
    pub locked_bonus_letters: BTreeSet<char>,
    pub history: TurnLog,
}

impl GameState {
    fn new(max_turns: u32) -> Self {
        Self {
            current_word: String::new(),
            players: Vec::new(),
            current_turn_index: 0,
            turn_number: 0,
            max_turns,
            status: GameStatus::NotStarted,
            used_words: BTreeSet::new(),
            available_bonus_letters: BTreeSet::new(),
            locked_bonus_letters: BTreeSet::new(),
            history: TurnLog::new(),
        }
    }
}

/// Read-only verdict on a candidate word.
///
/// Attempts are stamped with the machine revision they were computed
/// against and can only be applied while that revision is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAttempt {
    word: String,
    previous_word: String,
    revision: u64,
    player_index: usize,
    analysis: TransformationAnalysis,
    score: ScoreBreakdown,
    rejection: Option<RejectionReason>,
}

impl MoveAttempt {
    /// The normalized candidate.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn previous_word(&self) -> &str {
        &self.previous_word
    }

    pub fn can_apply(&self) -> bool {
        self.rejection.is_none()
    }

    pub fn rejection(&self) -> Option<RejectionReason> {
        self.rejection
    }

    /// User-facing explanation of a rejection.
    pub fn message(&self) -> Option<&'static str> {
        self.rejection.map(|r| r.message())
    }

    /// Points the move would earn; zero when rejected.
    pub fn score(&self) -> ScoreBreakdown {
        self.score
    }

    /// Letter analysis, when the candidate got far enough to be compared.
    pub fn analysis(&self) -> &TransformationAnalysis {
        &self.analysis
    }
}

/// Authoritative owner of a game's state. Every change goes through one
/// of its methods.
#[derive(Clone)]
pub struct TurnMachine {
    state: GameState,
    config: GameConfig,
    revision: u64,
    oracle: Arc<dyn WordOracle>,
    scorer: Arc<dyn Scorer>,
}

impl TurnMachine {
    /// Create a game with no players that validates words against `oracle`.
    pub fn new(config: GameConfig, oracle: Arc<dyn WordOracle>) -> Result<Self, TurnError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config.max_turns),
            config,
            revision: 0,
            oracle,
            scorer: Arc::new(StandardScorer),
        })
    }

    /// Replace the scoring rules.
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Rebuild a machine around a previously saved state. The state is
    /// checked first since it may come from an untrusted file.
    pub fn from_state(state: GameState, oracle: Arc<dyn WordOracle>) -> Result<Self, TurnError> {
        check_state(&state)?;
        let config = GameConfig {
            max_turns: state.max_turns,
            ..GameConfig::default()
        };
        Ok(Self {
            state,
            config,
            revision: 0,
            oracle,
            scorer: Arc::new(StandardScorer),
        })
    }

    /// Seat a new player. Only allowed before the game starts.
    pub fn add_player(&mut self, name: &str, is_automated: bool) -> Result<PlayerId, TurnError> {
        if self.state.status != GameStatus::NotStarted {
            return Err(TurnError::AlreadyStarted);
        }
        let id = u8::try_from(self.state.players.len())
            .map_err(|_| TurnError::InvalidConfig("too many players"))?;
        let id = PlayerId(id);
        self.state.players.push(Player {
            id,
            name: String::from(name),
            is_automated,
            score: 0,
            is_current_turn: false,
        });
        self.revision += 1;
        Ok(id)
    }

    /// Start with a random word from the dictionary and a fresh set of key
    /// letters.
    pub fn start(&mut self, rng: &mut dyn RngCore) -> Result<(), TurnError> {
        if self.state.status != GameStatus::NotStarted {
            return Err(TurnError::AlreadyStarted);
        }
        let len = self.config.start_word_len;
        let word = self
            .oracle
            .random_word_of_length(len, rng)
            .ok_or(TurnError::NoStartingWord(len))?;
        self.start_with(&word)?;
        self.draw_key_letters(self.config.key_letter_count, rng);
        Ok(())
    }

    /// Start from an explicit dictionary word.
    pub fn start_with(&mut self, word: &str) -> Result<(), TurnError> {
        if self.state.status != GameStatus::NotStarted {
            return Err(TurnError::AlreadyStarted);
        }
        if self.state.players.is_empty() {
            return Err(TurnError::NoPlayers);
        }
        let word = normalize_word(word);
        if !is_valid_length(word.chars().count()) || !self.oracle.is_valid_word(&word) {
            return Err(TurnError::InvalidStartingWord);
        }
        self.state.used_words.insert(word.clone());
        self.state.current_word = word;
        self.state.current_turn_index = 0;
        self.state.turn_number = 1;
        self.state.status = GameStatus::Playing;
        self.state.players[0].is_current_turn = true;
        self.revision += 1;
        info!(
            "game started with {} ({} players, {} turns)",
            self.state.current_word,
            self.state.players.len(),
            self.state.max_turns
        );
        Ok(())
    }

    /// Read-only view of the whole game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn current_word(&self) -> &str {
        &self.state.current_word
    }

    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn history(&self) -> &TurnLog {
        &self.state.history
    }

    /// Counter bumped by every state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The player whose turn it is, while the game is being played.
    pub fn current_player(&self) -> Option<&Player> {
        if self.state.status != GameStatus::Playing {
            return None;
        }
        self.state.players.get(self.state.current_turn_index)
    }

    pub fn available_bonus_letters(&self) -> &BTreeSet<char> {
        &self.state.available_bonus_letters
    }

    pub fn locked_bonus_letters(&self) -> &BTreeSet<char> {
        &self.state.locked_bonus_letters
    }

    /// Check `candidate` against the current state without changing it.
    pub fn attempt_move(&self, candidate: &str) -> MoveAttempt {
        let word = normalize_word(candidate);
        let (analysis, score, rejection) = match self.evaluate(&word) {
            Ok(analysis) => {
                let score = ScoreBreakdown::from(&analysis);
                (analysis, score, None)
            }
            Err((reason, analysis)) => (analysis, ScoreBreakdown::zero(), Some(reason)),
        };
        debug!(
            "attempt {} -> {}: {}",
            self.state.current_word,
            word,
            rejection.map_or("ok", |r| r.message())
        );
        MoveAttempt {
            word,
            previous_word: self.state.current_word.clone(),
            revision: self.revision,
            player_index: self.state.current_turn_index,
            analysis,
            score,
            rejection,
        }
    }

    fn evaluate(
        &self,
        word: &str,
    ) -> Result<TransformationAnalysis, (RejectionReason, TransformationAnalysis)> {
        if self.state.status != GameStatus::Playing {
            return rejected(RejectionReason::GameNotActive);
        }
        if word.is_empty() {
            return rejected(RejectionReason::EmptyWord);
        }
        if !is_valid_length(word.chars().count()) {
            return rejected(RejectionReason::InvalidLength);
        }
        if word == self.state.current_word {
            return rejected(RejectionReason::NoOpMove);
        }
        if self.state.used_words.contains(word) {
            return rejected(RejectionReason::WordAlreadyUsed);
        }
        if !self.oracle.is_valid_word(word) {
            return rejected(RejectionReason::NotInDictionary);
        }

        let analysis = self.scorer.analyze(
            &self.state.current_word,
            word,
            &self.state.available_bonus_letters,
        );
        if analysis.added_letters.len() > 1 {
            return Err((RejectionReason::TooManyAdditions, analysis));
        }
        if analysis.removed_letters.len() > 1 {
            return Err((RejectionReason::TooManyRemovals, analysis));
        }
        if analysis
            .removed_letters
            .iter()
            .any(|letter| self.state.locked_bonus_letters.contains(letter))
        {
            return Err((RejectionReason::LockedLetterRemoved, analysis));
        }
        Ok(analysis)
    }

    /// Commit a legal attempt. Returns `false` and leaves the state
    /// untouched if the attempt cannot be applied.
    pub fn apply_move(&mut self, attempt: &MoveAttempt) -> bool {
        match self.try_apply_move(attempt) {
            Ok(_) => true,
            Err(err) => {
                debug!("apply_move refused: {}", err);
                false
            }
        }
    }

    /// Commit a legal attempt, reporting why it was refused otherwise.
    pub fn try_apply_move(&mut self, attempt: &MoveAttempt) -> Result<TurnRecord, TurnError> {
        self.ensure_playing()?;
        if let Some(reason) = attempt.rejection {
            return Err(TurnError::Rejected(reason));
        }
        if attempt.revision != self.revision
            || attempt.player_index != self.state.current_turn_index
            || attempt.previous_word != self.state.current_word
        {
            return Err(TurnError::StaleAttempt);
        }

        let player = &mut self.state.players[self.state.current_turn_index];
        player.score += attempt.score.total();
        let player_id = player.id;

        let used = attempt.analysis.bonus_letters_used.clone();
        let record = TurnRecord {
            turn_number: self.state.turn_number,
            player_id,
            previous_word: attempt.previous_word.clone(),
            new_word: attempt.word.clone(),
            score: attempt.score,
            bonus_letters_used: used.clone(),
            kind: TurnKind::Move,
        };

        self.state.used_words.insert(attempt.word.clone());
        self.state.current_word = attempt.word.clone();
        self.state
            .available_bonus_letters
            .retain(|letter| !used.contains(letter));
        self.state.locked_bonus_letters = used;
        self.state.history.push(record.clone());
        info!(
            "turn {}: player {} played {} -> {} {}",
            record.turn_number, player_id.0, record.previous_word, record.new_word, record.score
        );
        self.advance_turn();
        Ok(record)
    }

    /// Skip the current player's turn. Returns `false` if the game is not
    /// being played.
    pub fn pass_turn(&mut self) -> bool {
        self.try_pass_turn().is_ok()
    }

    /// Skip the current player's turn and return the recorded pass.
    pub fn try_pass_turn(&mut self) -> Result<TurnRecord, TurnError> {
        self.ensure_playing()?;
        let player_id = self.state.players[self.state.current_turn_index].id;
        let record = TurnRecord {
            turn_number: self.state.turn_number,
            player_id,
            previous_word: self.state.current_word.clone(),
            new_word: self.state.current_word.clone(),
            score: ScoreBreakdown::zero(),
            bonus_letters_used: BTreeSet::new(),
            kind: TurnKind::Pass,
        };
        self.state.locked_bonus_letters.clear();
        self.state.history.push(record.clone());
        info!("turn {}: player {} passed", record.turn_number, player_id.0);
        self.advance_turn();
        Ok(record)
    }

    /// Let `bot` pick a word for the current player. A missing or illegal
    /// proposal resolves the turn as a pass.
    pub fn make_bot_move(
        &mut self,
        bot: &dyn Bot,
        rng: &mut dyn RngCore,
    ) -> Result<TurnRecord, TurnError> {
        self.ensure_playing()?;
        let proposal = bot.propose(self, rng);
        self.submit_proposal(proposal)
    }

    /// Resolve the current turn with a proposed word, passing when there is
    /// none or it is not legal.
    pub fn submit_proposal(&mut self, proposal: Option<String>) -> Result<TurnRecord, TurnError> {
        self.ensure_playing()?;
        match proposal {
            Some(word) => {
                let attempt = self.attempt_move(&word);
                if attempt.can_apply() {
                    return self.try_apply_move(&attempt);
                }
                warn!(
                    "proposal {} rejected ({}), passing",
                    attempt.word(),
                    attempt.message().unwrap_or_default()
                );
            }
            None => info!("no move found, passing"),
        }
        self.try_pass_turn()
    }

    /// Make `letter` available as a key letter. Locked letters cannot be
    /// re-added until their lock clears.
    pub fn add_key_letter(&mut self, letter: char) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }
        let Some(letter) = normalize_letter(letter) else {
            return false;
        };
        if self.state.locked_bonus_letters.contains(&letter) {
            return false;
        }
        let added = self.state.available_bonus_letters.insert(letter);
        if added {
            self.revision += 1;
        }
        added
    }

    pub fn remove_key_letter(&mut self, letter: char) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }
        let Some(letter) = normalize_letter(letter) else {
            return false;
        };
        let removed = self.state.available_bonus_letters.remove(&letter);
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Add up to `count` random key letters that are neither in the current
    /// word nor already tracked. Returns the letters added.
    pub fn draw_key_letters(&mut self, count: usize, rng: &mut dyn RngCore) -> Vec<char> {
        if self.state.status != GameStatus::Playing || count == 0 {
            return Vec::new();
        }
        let candidates: Vec<char> = ALPHABET
            .iter()
            .copied()
            .filter(|letter| {
                !self.state.current_word.contains(*letter)
                    && !self.state.available_bonus_letters.contains(letter)
                    && !self.state.locked_bonus_letters.contains(letter)
            })
            .collect();
        let drawn: Vec<char> = candidates.choose_multiple(rng, count).copied().collect();
        for letter in &drawn {
            self.add_key_letter(*letter);
        }
        drawn
    }

    /// Stop the game early.
    pub fn end_game(&mut self) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }
        self.finish();
        true
    }

    /// Players sharing the highest score.
    pub fn leaders(&self) -> Vec<&Player> {
        let best = self.state.players.iter().map(|p| p.score).max().unwrap_or(0);
        self.state.players.iter().filter(|p| p.score == best).collect()
    }

    /// Winner or draw, once the game has finished.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.state.status != GameStatus::Finished {
            return None;
        }
        match self.leaders().as_slice() {
            [winner] => Some(GameOutcome::Winner(winner.id)),
            _ => Some(GameOutcome::Draw),
        }
    }

    fn ensure_playing(&self) -> Result<(), TurnError> {
        match self.state.status {
            GameStatus::NotStarted => Err(TurnError::NotStarted),
            GameStatus::Finished => Err(TurnError::GameNotActive),
            GameStatus::Playing => Ok(()),
        }
    }

    fn advance_turn(&mut self) {
        let count = self.state.players.len();
        self.state.players[self.state.current_turn_index].is_current_turn = false;
        self.state.current_turn_index = (self.state.current_turn_index + 1) % count;
        self.state.turn_number += 1;
        self.revision += 1;
        if self.state.turn_number > self.state.max_turns {
            self.finish();
        } else {
            self.state.players[self.state.current_turn_index].is_current_turn = true;
        }
    }

    fn finish(&mut self) {
        self.state.status = GameStatus::Finished;
        for player in &mut self.state.players {
            player.is_current_turn = false;
        }
        self.revision += 1;
        info!("game finished after {} turns", self.state.history.len());
    }
}

impl fmt::Debug for TurnMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnMachine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

fn rejected(
    reason: RejectionReason,
) -> Result<TransformationAnalysis, (RejectionReason, TransformationAnalysis)> {
    Err((reason, TransformationAnalysis::default()))
}

fn check_state(state: &GameState) -> Result<(), TurnError> {
    if state.status != GameStatus::NotStarted {
        if state.players.is_empty() {
            return Err(TurnError::InvalidState("no players"));
        }
        if state.current_turn_index >= state.players.len() {
            return Err(TurnError::InvalidState("current player out of range"));
        }
    }
    if !state
        .available_bonus_letters
        .is_disjoint(&state.locked_bonus_letters)
    {
        return Err(TurnError::InvalidState("key letter both available and locked"));
    }
    if state
        .locked_bonus_letters
        .iter()
        .any(|letter| !state.current_word.contains(*letter))
    {
        return Err(TurnError::InvalidState("locked letter not in the current word"));
    }
    Ok(())
}

fn normalize_letter(letter: char) -> Option<char> {
    let letter = letter.to_ascii_uppercase();
    letter.is_ascii_uppercase().then_some(letter)
}
