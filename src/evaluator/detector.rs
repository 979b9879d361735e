use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognizes one category of the precedence list.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn category(&self, analysis: &HandAnalysis) -> Category;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks of one suit. Ace-high is a Royal Flush.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_flush.is_some()
    }

    fn category(&self, analysis: &HandAnalysis) -> Category {
        match analysis.straight_flush {
            Some(Rank::Ace) => Category::RoyalFlush,
            _ => Category::StraightFlush,
        }
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::FourOfAKind
    }
}

/// Full House: trips plus a pair, or two sets of trips
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::FullHouse
    }
}

/// Flush: five or more cards of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush()
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::Flush
    }
}

/// Straight: five consecutive ranks, the wheel included
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight()
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::Straight
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::ThreeOfAKind
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::TwoPair
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::Pair
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn category(&self, _analysis: &HandAnalysis) -> Category {
        Category::HighCard
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
