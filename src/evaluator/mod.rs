pub(crate) mod detector;
pub(crate) mod distribution;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_flush;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use std::collections::HashSet;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Classify seven cards into the best five-card poker category.
///
/// Cards may come in any order; the input is not modified. Distinctness is
/// the caller's contract, see [`try_evaluate`] for a checked variant.
///
/// ```
/// use poker_category::cards::parse_cards;
/// use poker_category::evaluator::{evaluate, Category};
///
/// let cards: [_; 7] = parse_cards("A♠ 2♠ 3♠ 4♠ 5♠ 9♦ K♣").unwrap().try_into().unwrap();
/// assert_eq!(evaluate(&cards), Category::StraightFlush);
/// ```
pub fn evaluate(cards: &[Card; 7]) -> Category {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (sorted cards, distributions, straight/flush/duplicates)
    let analysis = HandAnalysis::new(cards);
    log::trace!(
        "analysis of {:?}: straight={:?} flush={:?} groups={:?} straight_flush={:?}",
        analysis.sorted_cards,
        analysis.straight_info,
        analysis.suit_info,
        analysis.rank_groups,
        analysis.straight_flush
    );

    // Check categories in priority order (highest to lowest)
    let category = DETECTORS
        .iter()
        .find(|detector| detector.detect(&analysis))
        .map_or(Category::HighCard, |detector| detector.category(&analysis));

    log::trace!("classified as {category}");
    category
}

/// Checked [`evaluate`]: rejects anything but exactly seven distinct cards.
///
/// ```
/// use poker_category::cards::parse_cards;
/// use poker_category::evaluator::{try_evaluate, Category, EvalError};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// assert_eq!(try_evaluate(&cards), Ok(Category::RoyalFlush));
/// assert_eq!(try_evaluate(&cards[..5]), Err(EvalError::InvalidHandSize(5)));
/// ```
pub fn try_evaluate(cards: &[Card]) -> Result<Category, EvalError> {
    let seven: &[Card; 7] =
        cards.try_into().map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
    let mut seen = HashSet::with_capacity(7);
    for &card in seven {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard(card));
        }
    }
    Ok(evaluate(seven))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn seven(hand: &str) -> [Card; 7] {
        parse_cards(hand).unwrap().try_into().unwrap()
    }

    #[test]
    fn categories_are_ordered_by_strength() {
        for w in Category::ALL.windows(2) {
            assert!(w[0] < w[1]);
            assert_eq!(w[0].ordinal() + 1, w[1].ordinal());
        }
        assert_eq!(Category::RoyalFlush.to_string(), "Royal Flush");
    }

    #[test]
    fn evaluate_seven_card_categories() {
        let cases = [
            ("Ah Kh Qh Jh Th 2c 3d", Category::RoyalFlush),
            ("9c 8c 7c 6c 5c Kd 2h", Category::StraightFlush),
            ("9c 9d 9h 9s 5c Kd 2h", Category::FourOfAKind),
            ("9c 9d 9h 5s 5c Kd 2h", Category::FullHouse),
            ("Ac Tc 8c 6c 2c Kd 3h", Category::Flush),
            ("9c 8d 7h 6s 5c Kd 2h", Category::Straight),
            ("9c 9d 9h 6s 5c Kd 2h", Category::ThreeOfAKind),
            ("9c 9d 6h 6s 5c Kd 2h", Category::TwoPair),
            ("9c 9d 7h 6s 4c Kd 2h", Category::Pair),
            ("9c Jd 7h 6s 4c Kd 2h", Category::HighCard),
        ];
        for (hand, expected) in cases {
            assert_eq!(evaluate(&seven(hand)), expected, "{hand}");
        }
    }

    #[test]
    fn three_pairs_are_two_pair() {
        assert_eq!(evaluate(&seven("Ac Ad Kh Ks 4c 4d 2h")), Category::TwoPair);
    }

    #[test]
    fn try_evaluate_rejects_duplicates() {
        let cards = parse_cards("Ah Ah Qh Jh Th 2c 3d").unwrap();
        let dup = cards[0];
        assert_eq!(try_evaluate(&cards), Err(EvalError::DuplicateCard(dup)));
    }

    #[test]
    fn try_evaluate_rejects_eight_cards() {
        let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d 4d").unwrap();
        assert_eq!(try_evaluate(&cards), Err(EvalError::InvalidHandSize(8)));
    }
}
