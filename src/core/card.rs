use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::ShowdownError;

/// Card rank or face value.
/// The discriminant is the numeric value, so `Deuce` is 2
/// and `Ace` is always high at 14.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Rank {
    /// 2
    Deuce = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the ranks.
/// This is what `Rank::ranks()` returns.
const RANKS: [Rank; 13] = [
    Rank::Deuce,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Get all of the `Rank`'s that are possible, weakest first.
    /// This is used to iterate through all possible
    /// ranks when counting how often each one appears in a hand.
    pub const fn ranks() -> [Rank; 13] {
        RANKS
    }

    /// The numeric value of this rank, 2 through 14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The spelled out name, as it appears in hand descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Parse a single character code.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            'A' => Some(Rank::Ace),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            'T' => Some(Rank::Ten),
            '9' => Some(Rank::Nine),
            '8' => Some(Rank::Eight),
            '7' => Some(Rank::Seven),
            '6' => Some(Rank::Six),
            '5' => Some(Rank::Five),
            '4' => Some(Rank::Four),
            '3' => Some(Rank::Three),
            '2' => Some(Rank::Deuce),
            _ => None,
        }
    }

    /// The single character code for this rank.
    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ten => 'T',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
            Rank::Five => '5',
            Rank::Four => '4',
            Rank::Three => '3',
            Rank::Deuce => '2',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum for the four different suits.
/// Suits carry no order at all. Two cards that differ only in
/// suit sort as equals, they just are not the same card.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Hearts
    Hearts,
    /// Clubs
    Clubs,
    /// Spades
    Spades,
    /// Diamonds
    Diamonds,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// The lower-case name, as it appears in card descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
        }
    }

    /// Parse a single character code.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'h' => Some(Suit::Hearts),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            'd' => Some(Suit::Diamonds),
            _ => None,
        }
    }

    /// The single character code for this suit.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card. This is a carrier for Rank and Suit combined.
///
/// # Examples
///
/// ```
/// use showdown::core::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
///
/// assert_eq!("Ace of spades", card.to_string());
/// ```
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub rank: Rank,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// Cards order by rank alone. The suit never breaks a tie, so
/// two cards of equal rank and different suit are neither `<`
/// nor `>` each other even though they are different cards.
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.rank.cmp(&other.rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

impl FromStr for Card {
    type Err = ShowdownError;

    /// Parse a two character code like `As` or `Td`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let rc = chars.next().ok_or(ShowdownError::TooFewChars)?;
        let sc = chars.next().ok_or(ShowdownError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(ShowdownError::UnparsedCharsRemaining);
        }
        let rank = Rank::from_char(rc).ok_or(ShowdownError::UnexpectedRankChar)?;
        let suit = Suit::from_char(sc).ok_or(ShowdownError::UnexpectedSuitChar)?;
        Ok(Card { rank, suit })
    }
}

/// Parse a whole set of cards written as concatenated two
/// character codes.
///
/// # Examples
///
/// ```
/// use showdown::core::cards_from_str;
///
/// let cards = cards_from_str("9cKd7h").unwrap();
///
/// assert_eq!(3, cards.len());
/// ```
pub fn cards_from_str(cards_string: &str) -> Result<Vec<Card>, ShowdownError> {
    let mut chars = cards_string.chars();
    let mut cards: Vec<Card> = Vec::new();

    while let Some(rc) = chars.next() {
        let sc = chars.next().ok_or(ShowdownError::TooFewChars)?;
        let rank = Rank::from_char(rc).ok_or(ShowdownError::UnexpectedRankChar)?;
        let suit = Suit::from_char(sc).ok_or(ShowdownError::UnexpectedSuitChar)?;

        let card = Card { rank, suit };
        if cards.contains(&card) {
            return Err(ShowdownError::DuplicateCard(card));
        }
        cards.push(card);
    }

    Ok(cards)
}
