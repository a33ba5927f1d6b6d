use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, HandScore};

/// Each detector recognises one category and builds its score.
///
/// Detectors run in `DETECTORS` order and the first match wins, since a
/// hand may also satisfy lower categories (a straight flush is a flush).
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore>;
}

/// Ten through Ace, all one suit.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let top = straight_flush_top(analysis)?;
        (top == Rank::Ace).then(|| analysis.score(self.category(), &[top]))
    }
}

/// Five consecutive ranks, all one suit, below the royal.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let top = straight_flush_top(analysis)?;
        Some(analysis.score(self.category(), &[top]))
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        (analysis.rank_groups.top_count() == 4).then(|| grouped_score(self.category(), analysis))
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let groups = &analysis.rank_groups;
        (groups.top_count() == 3 && groups.second_count() == 2)
            .then(|| grouped_score(self.category(), analysis))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        analysis.suit_info.is_flush().then(|| analysis.score(self.category(), &analysis.ranks))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let top = analysis.straight_info.top_rank?;
        Some(analysis.score(self.category(), &[top]))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        (analysis.rank_groups.top_count() == 3).then(|| grouped_score(self.category(), analysis))
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let groups = &analysis.rank_groups;
        (groups.top_count() == 2 && groups.second_count() == 2)
            .then(|| grouped_score(self.category(), analysis))
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        (analysis.rank_groups.top_count() == 2).then(|| grouped_score(self.category(), analysis))
    }
}

/// Fallback, always matches.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        Some(analysis.score(self.category(), &analysis.ranks))
    }
}

fn straight_flush_top(analysis: &HandAnalysis) -> Option<Rank> {
    if analysis.suit_info.is_flush() {
        analysis.straight_info.top_rank
    } else {
        None
    }
}

fn grouped_score(category: Category, analysis: &HandAnalysis) -> HandScore {
    analysis.score(category, &analysis.rank_groups.ordered_ranks())
}

/// All detectors, strongest category first.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
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
