use std::cmp::Ordering;
use std::fmt;

use super::{Card, Rank};

/// The best matching category for a set of cards, from a lone
/// high card up to a straight flush. Each variant carries
/// exactly the information needed to break a tie with another
/// hand of the same category; everything else about the cards
/// is irrelevant once they are classified.
///
/// Hands are built by [`Selectable::select`], not by hand.
///
/// [`Selectable::select`]: crate::core::Selectable::select
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hand {
    /// No two cards match. Holds the highest card.
    HighestCard(Card),
    /// Two cards share one rank.
    Pair(Rank),
    /// Two different ranks each appear twice.
    TwoPairs {
        /// The higher of the two paired ranks.
        high: Rank,
        /// The lower of the two paired ranks.
        low: Rank,
    },
    /// Three cards share one rank.
    ThreeOfAKind(Rank),
    /// Consecutive ranks with no gaps. Holds the top rank of the run.
    Straight(Rank),
    /// Every card shares one suit. Holds the highest card.
    Flush(Card),
    /// Three of one rank and two of another.
    FullHouse {
        /// The rank appearing twice.
        pair: Rank,
        /// The rank appearing three times. This alone decides
        /// between two full houses.
        triplet: Rank,
    },
    /// Four cards share one rank.
    FourOfAKind(Rank),
    /// A straight where every card also shares one suit.
    StraightFlush(Rank),
}

impl Hand {
    /// The precedence of this category relative to every other
    /// category. A hand in a higher category always wins,
    /// whatever the two hands carry. Adding a category means one
    /// entry here plus one arm in `tie_break` and one in `Display`.
    const fn category(self) -> u8 {
        match self {
            Hand::HighestCard(_) => 0,
            Hand::Pair(_) => 1,
            Hand::TwoPairs { .. } => 2,
            Hand::ThreeOfAKind(_) => 3,
            Hand::Straight(_) => 4,
            Hand::Flush(_) => 5,
            Hand::FullHouse { .. } => 6,
            Hand::FourOfAKind(_) => 7,
            Hand::StraightFlush(_) => 8,
        }
    }

    /// Compare the carried data of two hands of the same category.
    fn tie_break(self, other: Self) -> Ordering {
        match (self, other) {
            (Hand::HighestCard(a), Hand::HighestCard(b)) => a.rank.cmp(&b.rank),
            (Hand::Pair(a), Hand::Pair(b)) => a.cmp(&b),
            (Hand::TwoPairs { high: ah, low: al }, Hand::TwoPairs { high: bh, low: bl }) => {
                ah.cmp(&bh).then(al.cmp(&bl))
            }
            (Hand::ThreeOfAKind(a), Hand::ThreeOfAKind(b)) => a.cmp(&b),
            (Hand::Straight(a), Hand::Straight(b)) => a.cmp(&b),
            (Hand::Flush(a), Hand::Flush(b)) => a.rank.cmp(&b.rank),
            // The pair rank never decides between two full houses.
            (Hand::FullHouse { triplet: a, .. }, Hand::FullHouse { triplet: b, .. }) => a.cmp(&b),
            (Hand::FourOfAKind(a), Hand::FourOfAKind(b)) => a.cmp(&b),
            (Hand::StraightFlush(a), Hand::StraightFlush(b)) => a.cmp(&b),
            _ => unreachable!("tie break between two different hand categories"),
        }
    }
}

/// Hands order by category first; the carried data only matters
/// between two hands of the same category. Suits and full house
/// pair ranks never break ties, so the ordering is looser than
/// equality and there is no `Ord` impl.
///
/// # Examples
///
/// ```
/// use showdown::core::{Hand, Rank};
///
/// assert!(Hand::StraightFlush(Rank::Deuce) > Hand::FourOfAKind(Rank::Ace));
/// ```
impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(
            self.category()
                .cmp(&other.category())
                .then_with(|| self.tie_break(*other)),
        )
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::HighestCard(card) => write!(f, "High card: {}", card),
            Hand::Pair(rank) => write!(f, "Pair of {}s", rank.name()),
            Hand::TwoPairs { high, low } => {
                write!(f, "Pair of {}s and pair of {}s", low.name(), high.name())
            }
            Hand::ThreeOfAKind(rank) => write!(f, "Three of a kind: {}", rank.name()),
            Hand::Straight(rank) => write!(f, "Straight: {} high", rank.name()),
            Hand::Flush(card) => {
                write!(f, "Flush of {}, {} high", card.suit.name(), card.rank.name())
            }
            Hand::FullHouse { pair, triplet } => {
                write!(f, "Full house: {} over {}", triplet.name(), pair.name())
            }
            Hand::FourOfAKind(rank) => write!(f, "Four of a kind: {}", rank.name()),
            Hand::StraightFlush(rank) => write!(f, "Straight flush: {} high", rank.name()),
        }
    }
}
