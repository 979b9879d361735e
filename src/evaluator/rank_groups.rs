use super::distribution::Distribution;
use crate::cards::Rank;

/// Most pairs tracked; a third pair can never change the category.
const MAX_PAIRS: usize = 2;

/// Duplicate ranks in a hand: quads, triples and pairs.
///
/// Example: 777 33 A2 groups as trips 7, pairs [3].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    quad: Option<Rank>,
    trips: Option<Rank>,
    trips_count: u8,
    pairs: Vec<Rank>,
}

impl RankGroups {
    /// Scan rank buckets from Ace down to Two. The first (highest) triple
    /// is kept; every triple is counted. Pairs are kept highest first.
    pub fn from_distribution(dist: &Distribution) -> Self {
        let mut groups =
            Self { quad: None, trips: None, trips_count: 0, pairs: Vec::with_capacity(MAX_PAIRS) };

        for (rank, count) in dist.ranks_desc() {
            match count {
                4 => groups.quad = Some(rank),
                3 => {
                    if groups.trips.is_none() {
                        groups.trips = Some(rank);
                    }
                    groups.trips_count += 1;
                }
                2 if groups.pairs.len() < MAX_PAIRS => groups.pairs.push(rank),
                _ => {}
            }
        }

        groups
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.quad
    }

    /// Returns the highest three-of-a-kind rank, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.trips
    }

    /// Number of distinct ranks held three times.
    pub fn trips_count(&self) -> u8 {
        self.trips_count
    }

    /// Up to two pair ranks, in descending order.
    pub fn pairs(&self) -> &[Rank] {
        &self.pairs
    }

    /// Trips plus a pair, or two sets of trips (one plays as the pair).
    pub fn has_full_house(&self) -> bool {
        self.trips.is_some() && (!self.pairs.is_empty() || self.trips_count() > 1)
    }
}
