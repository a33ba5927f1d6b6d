use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, HandScore, Tiebreak};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Suit only breaks ties so the reported cards are stable
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = sorted_cards.map(Card::rank);

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_counts(&rank_counts),
            suit_info: SuitInfo::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    pub fn score(&self, category: Category, tiebreak: &[Rank]) -> HandScore {
        HandScore {
            category,
            tiebreak: Tiebreak::from_slice(tiebreak),
            cards: self.sorted_cards,
        }
    }
}
