//! This is the core module. It exports the card model and
//! everything needed to classify and compare hands.

/// card.rs has rank, suit, and card.
mod card;
/// Re-export Card, Rank, and Suit together with the parsing helper.
pub use self::card::{Card, Rank, Suit, cards_from_str};

/// All the hand categories and how two hands compare.
mod hand;
/// Export `Hand`.
pub use self::hand::Hand;

/// Classification of cards into the best matching hand.
mod select;
/// Export the trait.
pub use self::select::Selectable;

/// Error type for the library.
mod error;
/// Export `ShowdownError`.
pub use self::error::ShowdownError;
