use super::distribution::Distribution;
use crate::cards::Rank;

/// Information about whether a hand contains a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
    /// The straight is 5-4-3-2-A with the Ace playing low.
    pub wheel: bool,
}

impl StraightInfo {
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }

    /// Detect the highest run of five or more occupied rank buckets.
    ///
    /// Buckets are scanned from Ace down to Two, so the first qualifying run
    /// is the highest one. The wheel is only considered when no other
    /// straight exists: it needs the run ending at Two to be exactly
    /// Five..Two with an Ace somewhere in the hand.
    pub fn detect(dist: &Distribution) -> Self {
        let mut top_rank = None;
        let mut run_start = None;
        let mut run_len = 0u8;

        for (rank, count) in dist.ranks_desc() {
            if count == 0 {
                run_start = None;
                run_len = 0;
                continue;
            }
            let start = *run_start.get_or_insert(rank);
            run_len += 1;
            if run_len >= 5 && top_rank.is_none() {
                top_rank = Some(start);
            }
        }

        if let Some(top) = top_rank {
            return StraightInfo { top_rank: Some(top), wheel: false };
        }

        if run_len == 4 && run_start == Some(Rank::Five) && dist.rank_count(Rank::Ace) > 0 {
            return StraightInfo { top_rank: Some(Rank::Five), wheel: true };
        }

        StraightInfo { top_rank: None, wheel: false }
    }
}
