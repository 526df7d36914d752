use crate::core::common::TurnError;

/// Shortest word accepted anywhere in the game.
pub const MIN_WORD_LEN: usize = 3;
/// Longest word accepted anywhere in the game.
pub const MAX_WORD_LEN: usize = 10;
/// Turns played before a game finishes, counted across all players.
pub const DEFAULT_MAX_TURNS: u32 = 20;
/// Length of the random starting word.
pub const DEFAULT_START_WORD_LEN: usize = 4;
/// Number of key letters drawn when a game starts.
pub const DEFAULT_KEY_LETTER_COUNT: usize = 2;

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Tunable parameters of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub max_turns: u32,
    pub start_word_len: usize,
    pub key_letter_count: usize,
    /// Draw a fresh key letter for every one consumed by a move.
    pub replenish_key_letters: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            start_word_len: DEFAULT_START_WORD_LEN,
            key_letter_count: DEFAULT_KEY_LETTER_COUNT,
            replenish_key_letters: true,
        }
    }
}

impl GameConfig {
    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), TurnError> {
        if self.max_turns == 0 {
            return Err(TurnError::InvalidConfig("max_turns must be at least 1"));
        }
        if !is_valid_length(self.start_word_len) {
            return Err(TurnError::InvalidConfig(
                "start_word_len must be between 3 and 10",
            ));
        }
        if self.key_letter_count > ALPHABET.len() {
            return Err(TurnError::InvalidConfig(
                "key_letter_count cannot exceed the alphabet",
            ));
        }
        Ok(())
    }
}

/// Whether `len` letters form an acceptable word length.
pub fn is_valid_length(len: usize) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len)
}
