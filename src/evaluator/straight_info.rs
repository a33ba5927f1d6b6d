use crate::cards::Rank;

/// Whether five ranks form a straight, and its representative high rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from ranks sorted descending.
    /// The wheel (A-5-4-3-2) counts as a straight with Five as its top rank.
    pub fn detect(sorted_desc: &[Rank; 5]) -> Self {
        let is_consecutive =
            sorted_desc.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if is_consecutive {
            return StraightInfo { top_rank: Some(sorted_desc[0]) };
        }

        if *sorted_desc == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }
}
