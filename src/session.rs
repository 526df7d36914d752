#![cfg(feature = "std")]

//! Drives a complete game over a table of human and automated seats.
//!
//! Bot searches run on tokio's blocking pool against a snapshot of the
//! game and are bounded by a deadline. The proposal is then submitted
//! through the same `attempt_move`/`apply_move` path a human uses, so the
//! session stays the single writer of the game state.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::{Bot, GameOutcome, GameStatus, PlayerId, TurnError, TurnMachine, TurnRecord};
use crate::player::{Participant, TurnChoice};

/// Default time a bot may spend searching before its turn becomes a pass.
pub const DEFAULT_BOT_DEADLINE: Duration = Duration::from_secs(2);

/// Who controls a seat.
pub enum Seat {
    Human(Box<dyn Participant>),
    Bot(Arc<dyn Bot>),
}

/// A game together with the participants playing it.
pub struct Session {
    game: TurnMachine,
    seats: Vec<Seat>,
    rng: SmallRng,
    bot_deadline: Duration,
}

impl Session {
    pub fn new(game: TurnMachine, rng: SmallRng) -> Self {
        Self {
            game,
            seats: Vec::new(),
            rng,
            bot_deadline: DEFAULT_BOT_DEADLINE,
        }
    }

    pub fn with_bot_deadline(mut self, deadline: Duration) -> Self {
        self.bot_deadline = deadline;
        self
    }

    /// Add a human-controlled seat.
    pub fn seat_human(
        &mut self,
        name: &str,
        participant: Box<dyn Participant>,
    ) -> Result<PlayerId, TurnError> {
        let id = self.game.add_player(name, false)?;
        self.seats.push(Seat::Human(participant));
        Ok(id)
    }

    /// Add an automated seat.
    pub fn seat_bot(&mut self, name: &str, bot: Arc<dyn Bot>) -> Result<PlayerId, TurnError> {
        let id = self.game.add_player(name, true)?;
        self.seats.push(Seat::Bot(bot));
        Ok(id)
    }

    /// Start from a chosen word instead of a random one. Key letters are
    /// left for the caller to add.
    pub fn start_with(&mut self, word: &str) -> Result<(), TurnError> {
        self.game.start_with(word)
    }

    /// Mutable access for setup before `run`, e.g. adding key letters.
    pub fn game_mut(&mut self) -> &mut TurnMachine {
        &mut self.game
    }

    pub fn game(&self) -> &TurnMachine {
        &self.game
    }

    pub fn into_game(self) -> TurnMachine {
        self.game
    }

    /// Start the game if needed and play it to the end. Returns `None` when
    /// a participant quit before the turn limit.
    pub async fn run(&mut self) -> anyhow::Result<Option<GameOutcome>> {
        if self.game.status() == GameStatus::NotStarted {
            self.game.start(&mut self.rng)?;
        }
        let mut quit = false;
        while self.game.status() == GameStatus::Playing {
            let index = self.game.state().current_turn_index;
            let Some(seat) = self.seats.get_mut(index) else {
                anyhow::bail!("player {} has no seat", index);
            };
            let record = match seat {
                Seat::Bot(bot) => {
                    let bot = Arc::clone(bot);
                    play_bot_turn(&mut self.game, bot, &mut self.rng, self.bot_deadline).await?
                }
                Seat::Human(participant) => {
                    match play_human_turn(&mut self.game, participant.as_mut())? {
                        Some(record) => record,
                        None => {
                            info!("player {} quit", index);
                            self.game.end_game();
                            quit = true;
                            break;
                        }
                    }
                }
            };
            for seat in &mut self.seats {
                if let Seat::Human(participant) = seat {
                    participant.handle_turn(&record);
                }
            }
            self.replenish_key_letters(&record);
        }
        if quit {
            return Ok(None);
        }
        Ok(self.game.outcome())
    }

    fn replenish_key_letters(&mut self, record: &TurnRecord) {
        if !self.game.config().replenish_key_letters || record.bonus_letters_used.is_empty() {
            return;
        }
        let drawn = self
            .game
            .draw_key_letters(record.bonus_letters_used.len(), &mut self.rng);
        if !drawn.is_empty() {
            info!("new key letters: {:?}", drawn);
        }
    }
}

/// Resolve one human turn. Key letter edits and refused words keep the
/// turn open; `Ok(None)` means the participant quit.
pub fn play_human_turn(
    game: &mut TurnMachine,
    participant: &mut dyn Participant,
) -> Result<Option<TurnRecord>, TurnError> {
    loop {
        match participant.choose(game) {
            TurnChoice::Play(word) => {
                let attempt = game.attempt_move(&word);
                if attempt.can_apply() {
                    return game.try_apply_move(&attempt).map(Some);
                }
                participant.handle_rejection(&attempt);
            }
            TurnChoice::Pass => return game.try_pass_turn().map(Some),
            TurnChoice::AddKeyLetter(letter) => {
                game.add_key_letter(letter);
            }
            TurnChoice::RemoveKeyLetter(letter) => {
                game.remove_key_letter(letter);
            }
            TurnChoice::Quit => return Ok(None),
        }
    }
}

/// Resolve one automated turn, passing when the search finds nothing or
/// misses its deadline.
pub async fn play_bot_turn(
    game: &mut TurnMachine,
    bot: Arc<dyn Bot>,
    rng: &mut SmallRng,
    deadline: Duration,
) -> anyhow::Result<TurnRecord> {
    let proposal = propose_with_deadline(game, bot, rng.random(), deadline).await;
    Ok(game.submit_proposal(proposal)?)
}

/// Run `bot` against a snapshot of `game` on the blocking pool. A search
/// that panics or outlives `deadline` yields `None`.
pub async fn propose_with_deadline(
    game: &TurnMachine,
    bot: Arc<dyn Bot>,
    seed: u64,
    deadline: Duration,
) -> Option<String> {
    let snapshot = game.clone();
    let search = tokio::task::spawn_blocking(move || {
        let mut rng = SmallRng::seed_from_u64(seed);
        bot.propose(&snapshot, &mut rng)
    });
    match tokio::time::timeout(deadline, search).await {
        Ok(Ok(proposal)) => proposal,
        Ok(Err(err)) => {
            warn!("bot search failed: {}", err);
            None
        }
        Err(_) => {
            warn!("bot search exceeded {:?}, passing", deadline);
            None
        }
    }
}
