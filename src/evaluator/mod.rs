pub(crate) mod combinations;
pub(crate) mod describe;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{parse_cards, Card, CardParseError, Rank};
use crate::hand::HandError;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

pub use describe::describe;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tiebreak ranks, most significant first. At most five entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tiebreak {
    ranks: [Rank; 5],
    len: u8,
}

impl Tiebreak {
    /// Build from up to five ranks; extra ranks are ignored.
    pub fn from_slice(ranks: &[Rank]) -> Self {
        let len = ranks.len().min(5);
        let mut buf = [Rank::Two; 5];
        buf[..len].copy_from_slice(&ranks[..len]);
        Self { ranks: buf, len: len as u8 }
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }

    /// Tiebreak as plain integers in 2..=14.
    pub fn values(&self) -> Vec<u8> {
        self.as_slice().iter().map(|r| r.value()).collect()
    }
}

impl Deref for Tiebreak {
    type Target = [Rank];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// Score of one five-card hand. Ordering follows `compare_scores`.
#[derive(Debug, Clone, Copy)]
pub struct HandScore {
    pub category: Category,
    pub tiebreak: Tiebreak,
    /// The five scored cards, descending by value.
    pub cards: [Card; 5],
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_scores(self, other)
    }
}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandScore {}

/// Category first, then tiebreak ranks pairwise; the first difference decides.
///
/// Same-category tiebreaks always have the same length. Should they differ,
/// only the shared prefix is compared.
pub fn compare_scores(a: &HandScore, b: &HandScore) -> Ordering {
    a.category.cmp(&b.category).then_with(|| {
        a.tiebreak
            .iter()
            .zip(b.tiebreak.iter())
            .map(|(x, y)| x.cmp(y))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] HandError),
}

impl From<CardParseError> for EvalError {
    fn from(err: CardParseError) -> Self {
        EvalError::InvalidInput(HandError::CardParse(err))
    }
}

/// Evaluate exactly five cards; detects category and tiebreak.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{evaluate_five, Category};
///
/// let cards = parse_cards(&["HK", "CK", "SK", "D5", "H5"]).unwrap();
/// let score = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(score.category, Category::FullHouse);
/// assert_eq!(score.tiebreak.values(), vec![13, 5]);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> HandScore {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // The high card detector always matches, so the fallback is never taken
    DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or_else(|| analysis.score(Category::HighCard, &analysis.ranks))
}

/// Best five-card score out of seven cards (all 21 subsets).
pub fn evaluate_seven(cards: &[Card; 7]) -> HandScore {
    best_of(cards)
}

/// Best five-card score from 5, 6 or 7 cards.
///
/// Only the count is validated; repeated cards are scored as given.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{evaluate_best, Category};
///
/// let cards = parse_cards(&["DA", "DK", "DT", "DJ", "DQ", "H2", "C3"]).unwrap();
/// let best = evaluate_best(&cards).unwrap();
/// assert_eq!(best.category, Category::RoyalFlush);
///
/// assert!(evaluate_best(&cards[..4]).is_err());
/// ```
pub fn evaluate_best(cards: &[Card]) -> Result<HandScore, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(HandError::CardCount(cards.len()).into());
    }
    Ok(best_of(cards))
}

/// Caller guarantees `cards.len() >= 5`.
fn best_of(cards: &[Card]) -> HandScore {
    use combinations::FiveCardSubsets;

    let mut best: Option<HandScore> = None;
    for idx in FiveCardSubsets::new(cards.len()) {
        let score = evaluate_five(&idx.map(|i| cards[i]));
        if best.as_ref().map_or(true, |b| score > *b) {
            best = Some(score);
        }
    }

    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Result of a single-hand query: category, description and best five cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandReport {
    pub score: HandScore,
    pub description: String,
}

impl HandReport {
    pub fn category(&self) -> Category {
        self.score.category
    }

    /// The best five cards in input notation, e.g. `["DA", "DK", ...]`.
    pub fn best_five_tokens(&self) -> Vec<String> {
        self.score.cards.iter().map(Card::to_string).collect()
    }
}

/// Parse 5 to 7 card tokens and report the best hand.
///
/// ```
/// use holdem_equity::evaluator::{evaluate_hand, Category};
///
/// let report = evaluate_hand(&["S2", "S5", "HA", "SA", "DA", "HT", "S5"]).unwrap();
/// assert_eq!(report.category(), Category::FullHouse);
/// assert_eq!(report.description, "Full House, Aces full of Fives");
/// assert_eq!(report.best_five_tokens(), vec!["SA", "DA", "HA", "S5", "S5"]);
///
/// assert!(evaluate_hand(&["S2", "S5", "HA"]).is_err());
/// ```
pub fn evaluate_hand<S: AsRef<str>>(tokens: &[S]) -> Result<HandReport, EvalError> {
    let cards = parse_cards(tokens)?;
    let score = evaluate_best(&cards)?;
    Ok(HandReport { score, description: describe(&score) })
}

/// Outcome of a two-hand showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Player1,
    Player2,
    Tie,
}

impl Winner {
    pub const fn label(self) -> &'static str {
        match self {
            Winner::Player1 => "Player 1",
            Winner::Player2 => "Player 2",
            Winner::Tie => "Tie",
        }
    }
}

impl From<Ordering> for Winner {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Winner::Player1,
            Ordering::Less => Winner::Player2,
            Ordering::Equal => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compare two hands given as card tokens (hole + board for each player).
///
/// ```
/// use holdem_equity::evaluator::{compare_hands, Winner};
///
/// let p1 = ["SK", "CA", "D6", "S9", "H4", "S3", "C2"];
/// let p2 = ["HA", "SQ", "D6", "S9", "H4", "S3", "C2"];
/// assert_eq!(compare_hands(&p1, &p2).unwrap(), Winner::Player1);
/// assert_eq!(compare_hands(&p2, &p1).unwrap(), Winner::Player2);
/// ```
pub fn compare_hands<S: AsRef<str>, T: AsRef<str>>(
    first: &[S],
    second: &[T],
) -> Result<Winner, EvalError> {
    let a = evaluate_best(&parse_cards(first)?)?;
    let b = evaluate_best(&parse_cards(second)?)?;
    Ok(compare_scores(&a, &b).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn five(tokens: [&str; 5]) -> HandScore {
        let cards = parse_cards(&tokens).expect("valid cards");
        evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]])
    }

    #[test]
    fn evaluate_five_tiebreaks() {
        assert_eq!(five(["SA", "SK", "SQ", "SJ", "ST"]).tiebreak.values(), vec![14]);
        assert_eq!(five(["H9", "H8", "H7", "H6", "H5"]).tiebreak.values(), vec![9]);
        assert_eq!(five(["C9", "D9", "H9", "S9", "CA"]).tiebreak.values(), vec![9, 14]);
        assert_eq!(five(["C3", "D3", "H3", "SJ", "CJ"]).tiebreak.values(), vec![3, 11]);
        assert_eq!(five(["HK", "HT", "H8", "H6", "H3"]).tiebreak.values(), vec![13, 10, 8, 6, 3]);
        assert_eq!(five(["CA", "D2", "H3", "S4", "C5"]).tiebreak.values(), vec![5]);
        assert_eq!(five(["CQ", "DQ", "HQ", "ST", "C2"]).tiebreak.values(), vec![12, 10, 2]);
        assert_eq!(five(["CJ", "DJ", "C9", "H9", "S2"]).tiebreak.values(), vec![11, 9, 2]);
        assert_eq!(five(["HA", "DA", "ST", "C9", "D2"]).tiebreak.values(), vec![14, 10, 9, 2]);
        assert_eq!(five(["HA", "DK", "S7", "C5", "D2"]).tiebreak.values(), vec![14, 13, 7, 5, 2]);
    }

    #[test]
    fn score_cards_are_descending() {
        let score = five(["C2", "HA", "D9", "S5", "CK"]);
        let values: Vec<u8> = score.cards.iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![14, 13, 9, 5, 2]);
    }

    #[test]
    fn comparator_category_dominates_tiebreak() {
        let low_two_pair = five(["C2", "D2", "C3", "D3", "H4"]);
        let ace_high = five(["HA", "DK", "SQ", "CJ", "D9"]);
        assert_eq!(compare_scores(&low_two_pair, &ace_high), Ordering::Greater);
        assert_eq!(compare_scores(&ace_high, &low_two_pair), Ordering::Less);
    }

    #[test]
    fn comparator_uses_shared_prefix_only() {
        let a = HandScore {
            category: Category::Flush,
            tiebreak: Tiebreak::from_slice(&[Rank::Ace, Rank::King]),
            cards: [Card::new(Rank::Two, Suit::Clubs); 5],
        };
        let b = HandScore { tiebreak: Tiebreak::from_slice(&[Rank::Ace]), ..a };
        assert_eq!(compare_scores(&a, &b), Ordering::Equal);
    }

    #[test]
    fn evaluate_best_rejects_bad_counts() {
        let cards = parse_cards(&["SA", "SK", "SQ", "SJ", "ST", "S9", "S8", "S7"]).unwrap();
        assert_eq!(
            evaluate_best(&cards),
            Err(EvalError::InvalidInput(HandError::CardCount(8)))
        );
        assert_eq!(
            evaluate_best(&cards[..4]),
            Err(EvalError::InvalidInput(HandError::CardCount(4)))
        );
    }

    #[test]
    fn repeated_cards_do_not_panic() {
        let same = parse_cards(&["SA", "SA", "SA", "SA", "SA"]).unwrap();
        assert_eq!(evaluate_best(&same).unwrap().category, Category::Flush);
        let mixed = parse_cards(&["SA", "SA", "HA", "DA", "CA"]).unwrap();
        assert_eq!(evaluate_best(&mixed).unwrap().category, Category::HighCard);
    }

    #[test]
    fn evaluate_best_handles_six_cards() {
        let cards = parse_cards(&["H2", "D2", "C2", "S2", "HK", "DK"]).unwrap();
        let best = evaluate_best(&cards).unwrap();
        assert_eq!(best.category, Category::FourOfAKind);
        assert_eq!(best.tiebreak.values(), vec![2, 13]);
    }

    #[test]
    fn compare_hands_reports_parse_errors() {
        let good = ["SK", "CA", "D6", "S9", "H4", "S3", "C2"];
        let bad = ["SK", "CA", "D6", "S9", "H4", "S3", "C1"];
        assert!(matches!(
            compare_hands(&good, &bad),
            Err(EvalError::InvalidInput(HandError::CardParse(CardParseError::InvalidRank(_))))
        ));
    }
}
