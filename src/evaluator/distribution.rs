use crate::cards::{Card, Rank, Suit};

/// Per-rank and per-suit card counts of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    ranks: [u8; Rank::COUNT],
    suits: [u8; Suit::COUNT],
}

impl Distribution {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut ranks = [0u8; Rank::COUNT];
        let mut suits = [0u8; Suit::COUNT];
        for card in cards {
            ranks[card.rank().index()] += 1;
            suits[card.suit().index()] += 1;
        }
        Self { ranks, suits }
    }

    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.ranks[rank.index()]
    }

    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suits[suit.index()]
    }

    /// (rank, count) pairs scanned from Ace down to Two, empty buckets included.
    pub fn ranks_desc(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL.iter().rev().map(move |&r| (r, self.ranks[r.index()]))
    }
}
