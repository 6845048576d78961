use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// Showdown library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowdownError {
    #[error("Cannot select a hand from no cards")]
    EmptyCards,
    #[error("Unable to parse rank")]
    UnexpectedRankChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Card already added {0}")]
    DuplicateCard(Card),
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
}
