use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Largest multiplicity, 0 for an empty hand.
    pub fn top_count(&self) -> u8 {
        self.groups.first().map_or(0, |&(_, count)| count)
    }

    /// Second largest multiplicity, 0 when fewer than two distinct ranks.
    pub fn second_count(&self) -> u8 {
        self.groups.get(1).map_or(0, |&(_, count)| count)
    }

    /// Distinct ranks in multiplicity order; this is the tiebreak sequence
    /// for every paired category.
    pub fn ordered_ranks(&self) -> Vec<Rank> {
        self.groups.iter().map(|&(rank, _)| rank).collect()
    }
}
