use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("expected 5 to 7 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_equity::cards::{Card, Rank, Suit};
/// use holdem_equity::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateCard(a));
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    /// Parse two card tokens.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, HandError> {
        Self::from_slice(&parse_cards(tokens)?)
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&split_tokens(s))
    }
}

/// Community cards on the board, zero to five of them.
///
/// ```
/// use holdem_equity::hand::Board;
///
/// let board: Board = "C2 C3 C4".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        ensure_distinct(&cards)?;
        Ok(Self { cards })
    }

    /// Parse zero to five card tokens.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, HandError> {
        Self::try_new(parse_cards(tokens)?)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards still to come before the river.
    pub fn missing(&self) -> usize {
        5 - self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&split_tokens(s))
    }
}

/// Ensure hole cards and board share no card.
///
/// ```
/// use holdem_equity::hand::{validate_holdem, Board, HoleCards};
///
/// let hole: HoleCards = "SA SK".parse().unwrap();
/// let board: Board = "C2 C3 C4".parse().unwrap();
/// validate_holdem(&hole, &board).unwrap();
///
/// let overlapping: Board = "SA C3 C4".parse().unwrap();
/// assert!(validate_holdem(&hole, &overlapping).is_err());
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    let all: Vec<Card> = hole.as_array().into_iter().chain(board.as_slice().iter().copied()).collect();
    ensure_distinct(&all)
}

/// Fail with the first card that appears twice.
pub(crate) fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(HandError::DuplicateCard(card));
        }
    }
    Ok(())
}

fn split_tokens(s: &str) -> Vec<&str> {
    s.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()).collect()
}
