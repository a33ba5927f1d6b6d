use crate::evaluator::{Category, HandScore};

/// Human readable summary of a score, e.g. "Full House, Kings full of Fives".
///
/// ```
/// use holdem_equity::evaluator::{describe, evaluate_hand};
///
/// let report = evaluate_hand(&["HA", "HK", "H9", "H4", "H2"]).unwrap();
/// assert_eq!(describe(&report.score), "Flush, Ace high");
/// ```
pub fn describe(score: &HandScore) -> String {
    let tb = score.tiebreak.as_slice();
    let (Some(&first), second) = (tb.first(), tb.get(1).copied()) else {
        return "Invalid hand".to_string();
    };

    match (score.category, second) {
        (Category::RoyalFlush, _) => "Royal Flush".to_string(),
        (Category::StraightFlush, _) => format!("Straight Flush, {} high", first.name()),
        (Category::FourOfAKind, _) => format!("Four {}", first.plural()),
        (Category::FullHouse, Some(pair)) => {
            format!("Full House, {} full of {}", first.plural(), pair.plural())
        }
        (Category::Flush, _) => format!("Flush, {} high", first.name()),
        (Category::Straight, _) => format!("Straight, {} high", first.name()),
        (Category::ThreeOfAKind, _) => format!("Three {}", first.plural()),
        (Category::TwoPair, Some(low)) => {
            format!("Two Pair, {} and {}", first.plural(), low.plural())
        }
        (Category::OnePair, _) => format!("Pair of {}", first.plural()),
        (Category::HighCard, _) => format!("{} high", first.name()),
        (category, None) => format!("Invalid {category}"),
    }
}
