use super::distribution::Distribution;
use super::rank_groups::RankGroups;
use super::straight_flush;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 7-card hand.
/// Built once per evaluation and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Grouped by suit, rank descending within a suit.
    pub sorted_cards: [Card; 7],
    pub straight_info: StraightInfo,
    pub suit_info: SuitInfo,
    pub rank_groups: RankGroups,
    /// Top rank of a verified straight flush.
    pub straight_flush: Option<Rank>,
}

impl HandAnalysis {
    /// Analyze a 7-card hand. The input is copied, never reordered in place.
    pub fn new(cards: &[Card; 7]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(Card::cmp_by_suit_then_rank_desc);

        let distribution = Distribution::from_cards(&sorted_cards);
        let straight_info = StraightInfo::detect(&distribution);
        let suit_info = SuitInfo::detect(&sorted_cards, &distribution, straight_info.wheel);
        let rank_groups = RankGroups::from_distribution(&distribution);
        let straight_flush = straight_flush::verify(&sorted_cards, &straight_info, &suit_info);

        Self { sorted_cards, straight_info, suit_info, rank_groups, straight_flush }
    }
}
