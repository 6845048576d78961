use tracing::trace;

use super::{Card, Hand, Rank, ShowdownError};

/// Can this collection of cards be classified into a hand?
pub trait Selectable {
    /// Classify these cards into the best matching [`Hand`].
    fn select(&self) -> Result<Hand, ShowdownError>;
}

impl Selectable for [Card] {
    /// Classify a non-empty set of cards.
    ///
    /// The detectors run from the strongest category down and the
    /// first one that matches wins. Hand size is the caller's
    /// contract; five cards for standard poker, but any non-empty
    /// set classifies. An empty set is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Hand, Rank, Selectable, cards_from_str};
    ///
    /// let cards = cards_from_str("4hKd4c").unwrap();
    ///
    /// assert_eq!(Hand::Pair(Rank::Four), cards.select().unwrap());
    /// ```
    fn select(&self) -> Result<Hand, ShowdownError> {
        let mut sorted = self.to_vec();
        sorted.sort_by_key(|c| c.rank);

        // Every detector reports None on an empty set, so only an
        // empty input can reach the error.
        let hand = straight_flush(&sorted)
            .or_else(|| full_house(&sorted))
            .or_else(|| flush(&sorted))
            .or_else(|| straight(&sorted))
            .or_else(|| grouped(&sorted))
            .or_else(|| highest_card(self))
            .ok_or(ShowdownError::EmptyCards)?;

        trace!(?hand, "selected best matching hand");
        Ok(hand)
    }
}

/// All cards share one suit.
fn one_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

/// Every adjacent pair of the rank-sorted cards steps up by
/// exactly one. Vacuously true below two cards. Ace is always
/// 14, so `A 2 3 4 5` is not a run.
fn is_run(sorted: &[Card]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[1].rank.value() == w[0].rank.value() + 1)
}

/// How many times each rank appears. Slot 0 counts `Deuce`.
fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for c in cards {
        counts[usize::from(c.rank.value()) - 2] += 1;
    }
    counts
}

/// The highest rank appearing exactly `count` times.
fn rank_with_count(counts: &[u8; 13], count: u8) -> Option<Rank> {
    Rank::ranks()
        .into_iter()
        .rev()
        .find(|r| counts[usize::from(r.value()) - 2] == count)
}

fn straight_flush(sorted: &[Card]) -> Option<Hand> {
    if one_suit(sorted) && is_run(sorted) {
        Some(Hand::StraightFlush(sorted.last()?.rank))
    } else {
        None
    }
}

fn full_house(sorted: &[Card]) -> Option<Hand> {
    let counts = rank_counts(sorted);
    let triplet = rank_with_count(&counts, 3)?;
    let pair = rank_with_count(&counts, 2)?;
    Some(Hand::FullHouse { pair, triplet })
}

fn flush(sorted: &[Card]) -> Option<Hand> {
    if one_suit(sorted) {
        Some(Hand::Flush(*sorted.last()?))
    } else {
        None
    }
}

fn straight(sorted: &[Card]) -> Option<Hand> {
    if is_run(sorted) {
        Some(Hand::Straight(sorted.last()?.rank))
    } else {
        None
    }
}

/// Pair, two pairs, three of a kind, and four of a kind, keyed
/// on the largest group of matching ranks. No repeats means no
/// match here.
fn grouped(sorted: &[Card]) -> Option<Hand> {
    let counts = rank_counts(sorted);
    match counts.iter().copied().max().unwrap_or(0) {
        4 => Some(Hand::FourOfAKind(rank_with_count(&counts, 4)?)),
        3 => Some(Hand::ThreeOfAKind(rank_with_count(&counts, 3)?)),
        2 => {
            let high = rank_with_count(&counts, 2)?;
            let low = Rank::ranks()
                .into_iter()
                .rev()
                .filter(|r| *r != high)
                .find(|r| counts[usize::from(r.value()) - 2] == 2);
            match low {
                Some(low) => Some(Hand::TwoPairs { high, low }),
                None => Some(Hand::Pair(high)),
            }
        }
        _ => None,
    }
}

/// The fallback when nothing else matched: the best card wins.
fn highest_card(cards: &[Card]) -> Option<Hand> {
    Some(Hand::HighestCard(
        cards.iter().copied().max_by_key(|c| c.rank)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, cards_from_str};
    use rand::Rng;

    #[test_log::test]
    fn test_highest_card() {
        let cards = cards_from_str("9cKd7h").unwrap();
        assert_eq!(
            Hand::HighestCard(Card::new(Rank::King, Suit::Diamonds)),
            cards.select().unwrap()
        );
    }

    #[test_log::test]
    fn test_pair() {
        let cards = cards_from_str("4hKd4c").unwrap();
        assert_eq!(Hand::Pair(Rank::Four), cards.select().unwrap());
    }

    #[test_log::test]
    fn test_two_pairs() {
        let cards = cards_from_str("2h2c9d9sKh").unwrap();
        assert_eq!(
            Hand::TwoPairs {
                high: Rank::Nine,
                low: Rank::Deuce,
            },
            cards.select().unwrap()
        );
    }

    #[test_log::test]
    fn test_three_of_a_kind() {
        let cards = cards_from_str("4h4d4c").unwrap();
        assert_eq!(Hand::ThreeOfAKind(Rank::Four), cards.select().unwrap());
    }

    #[test_log::test]
    fn test_four_of_a_kind() {
        let cards = cards_from_str("6h6d6s6c").unwrap();
        assert_eq!(Hand::FourOfAKind(Rank::Six), cards.select().unwrap());
    }

    #[test_log::test]
    fn test_straight() {
        let cards = cards_from_str("2h3d4s5c6c").unwrap();
        assert_eq!(Hand::Straight(Rank::Six), cards.select().unwrap());
    }

    #[test_log::test]
    fn test_flush() {
        let cards = cards_from_str("2hTh4h9hQh").unwrap();
        assert_eq!(
            Hand::Flush(Card::new(Rank::Queen, Suit::Hearts)),
            cards.select().unwrap()
        );
    }

    #[test_log::test]
    fn test_full_house() {
        let cards = cards_from_str("2h2c4h4d4s").unwrap();
        assert_eq!(
            Hand::FullHouse {
                pair: Rank::Deuce,
                triplet: Rank::Four,
            },
            cards.select().unwrap()
        );
    }

    #[test_log::test]
    fn test_straight_flush() {
        let cards = cards_from_str("2h3h4h5h6h").unwrap();
        assert_eq!(Hand::StraightFlush(Rank::Six), cards.select().unwrap());
    }

    #[test_log::test]
    fn test_category_beats_carried_rank() {
        let straight_flush = cards_from_str("2h3h4h5h6h").unwrap().select().unwrap();
        let four_aces = cards_from_str("AhAdAsAcKd").unwrap().select().unwrap();
        assert_eq!(Hand::StraightFlush(Rank::Six), straight_flush);
        assert_eq!(Hand::FourOfAKind(Rank::Ace), four_aces);
        assert!(straight_flush > four_aces);
    }

    #[test_log::test]
    fn test_wheel_is_not_a_straight() {
        // Ace is always high, so this is five unmatched cards.
        let cards = cards_from_str("Ah2c3s4h5s").unwrap();
        assert_eq!(
            Hand::HighestCard(Card::new(Rank::Ace, Suit::Hearts)),
            cards.select().unwrap()
        );
    }

    #[test_log::test]
    fn test_single_card() {
        // Adjacency is vacuous below two cards; hand size is the
        // caller's contract, not enforced here.
        let cards = cards_from_str("Kd").unwrap();
        assert_eq!(Hand::StraightFlush(Rank::King), cards.select().unwrap());
    }

    #[test_log::test]
    fn test_empty_cards() {
        let cards: Vec<Card> = vec![];
        assert_eq!(Err(ShowdownError::EmptyCards), cards.select());
    }

    #[test]
    fn test_select_any_five_cards() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let cards: Vec<Card> = (0..5)
                .map(|_| {
                    let rank = Rank::ranks()[rng.random_range(0..13)];
                    let suit = Suit::suits()[rng.random_range(0..4)];
                    Card::new(rank, suit)
                })
                .collect();
            assert!(cards.select().is_ok());
        }
    }
}
