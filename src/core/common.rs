//! Common types for wordshift: move rejections and turn errors.

use core::fmt;

/// Why a candidate word cannot be played this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectionReason {
    /// The game is not currently being played.
    GameNotActive,
    /// Nothing left after trimming whitespace.
    EmptyWord,
    /// Fewer than 3 or more than 10 letters.
    InvalidLength,
    /// Candidate is the current word.
    NoOpMove,
    /// Candidate was already played earlier in the game.
    WordAlreadyUsed,
    /// The dictionary does not know the candidate.
    NotInDictionary,
    /// More than one letter would be added.
    TooManyAdditions,
    /// More than one letter would be removed.
    TooManyRemovals,
    /// A locked key letter would be removed.
    LockedLetterRemoved,
}

impl RejectionReason {
    /// Short message suitable for showing to a player.
    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::GameNotActive => "The game is not in progress",
            RejectionReason::EmptyWord => "Enter a word",
            RejectionReason::InvalidLength => "Words must be 3 to 10 letters long",
            RejectionReason::NoOpMove => "That is the current word",
            RejectionReason::WordAlreadyUsed => "That word has already been played",
            RejectionReason::NotInDictionary => "Not a word in the dictionary",
            RejectionReason::TooManyAdditions => "You can add at most one letter",
            RejectionReason::TooManyRemovals => "You can remove at most one letter",
            RejectionReason::LockedLetterRemoved => "Locked letters cannot be removed this turn",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Contract violations raised by the turn machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// Operation requires a started game.
    NotStarted,
    /// `start` was called twice.
    AlreadyStarted,
    /// The game already finished.
    GameNotActive,
    /// The attempt was rejected and cannot be applied.
    Rejected(RejectionReason),
    /// State changed since the attempt was made.
    StaleAttempt,
    /// Starting word is not a dictionary word of valid length.
    InvalidStartingWord,
    /// The dictionary has no word of the requested length.
    NoStartingWord(usize),
    /// The game needs at least one player.
    NoPlayers,
    InvalidConfig(&'static str),
    /// A restored state breaks a structural rule.
    InvalidState(&'static str),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotStarted => write!(f, "Game has not been started"),
            TurnError::AlreadyStarted => write!(f, "Game has already been started"),
            TurnError::GameNotActive => write!(f, "Game is not in progress"),
            TurnError::Rejected(reason) => write!(f, "Move rejected: {}", reason),
            TurnError::StaleAttempt => write!(f, "Game state changed since the move was checked"),
            TurnError::InvalidStartingWord => write!(f, "Starting word is not a valid dictionary word"),
            TurnError::NoStartingWord(len) => {
                write!(f, "Dictionary has no word of length {}", len)
            }
            TurnError::NoPlayers => write!(f, "A game needs at least one player"),
            TurnError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            TurnError::InvalidState(msg) => write!(f, "Invalid game state: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
