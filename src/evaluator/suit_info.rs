use super::distribution::Distribution;
use crate::cards::{Card, Rank, Suit};

/// Information about whether five or more cards share a suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
    /// Highest card of the flush suit. With a wheel straight the Ace plays
    /// low, so the next card down anchors the flush instead.
    pub anchor_rank: Option<Rank>,
}

impl SuitInfo {
    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    /// Detect a suit holding at least five cards. Seven cards admit at most one.
    ///
    /// `sorted` must be in evaluator order (suit, then rank descending).
    pub fn detect(sorted: &[Card], dist: &Distribution, wheel: bool) -> Self {
        let Some(suit) = Suit::ALL.into_iter().find(|&s| dist.suit_count(s) >= 5) else {
            return SuitInfo { flush_suit: None, anchor_rank: None };
        };

        let anchor_rank = sorted
            .iter()
            .filter(|c| c.suit() == suit)
            .map(|c| c.rank())
            .find(|&r| !(wheel && r == Rank::Ace));

        SuitInfo { flush_suit: Some(suit), anchor_rank }
    }
}
