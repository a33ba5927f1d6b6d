use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

/// Display names indexed by `Rank::index()`.
const RANK_NAMES: [&str; 13] =
    ["2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace"];

const RANK_PLURALS: [&str; 13] = [
    "Twos", "Threes", "Fours", "Fives", "Sixes", "Sevens", "Eights", "Nines", "10s", "Jacks",
    "Queens", "Kings", "Aces",
];

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2 through 14 (Ace high).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero based position in `Rank::ALL`.
    pub const fn index(self) -> usize {
        self as usize - 2
    }

    /// Rank for a numeric value in 2..=14.
    pub const fn from_value(v: u8) -> Option<Rank> {
        if v >= 2 && v <= 14 {
            Some(Rank::ALL[v as usize - 2])
        } else {
            None
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Human readable name used in hand descriptions ("10", "Jack", "Ace").
    pub const fn name(self) -> &'static str {
        RANK_NAMES[self.index()]
    }

    /// Plural form of `name`, as in "Kings full of Fives".
    pub const fn plural(self) -> &'static str {
        RANK_PLURALS[self.index()]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Rank {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardParseError::InvalidRank(c.to_string())),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed: H < D < C < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'S' => Ok(Suit::Spades),
            _ => Err(CardParseError::InvalidSuit(c.to_string())),
        }
    }
}

/// A playing card: suit + rank.
///
/// Cards are written suit first, as in `"HA"` (ace of hearts) or `"CT"`
/// (ten of clubs).
///
/// ```
/// use holdem_equity::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Hearts);
/// assert_eq!(card.to_string(), "HA");
/// assert_eq!("ha".parse::<Card>().unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Numeric rank value, 2 through 14.
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Dense index in 0..52, used for card set bitmasks.
    pub const fn index(self) -> usize {
        self.suit.index() * 13 + self.rank.index()
    }

    /// Inverse of `index`; `None` for values outside 0..52.
    pub const fn from_index(idx: usize) -> Option<Card> {
        if idx < 52 {
            Some(Card::new(Rank::ALL[idx % 13], Suit::ALL[idx / 13]))
        } else {
            None
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card format: '{0}'")]
    InvalidFormat(String),
    #[error("invalid suit: '{0}'")]
    InvalidSuit(String),
    #[error("invalid rank: '{0}'")]
    InvalidRank(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (suit_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(CardParseError::InvalidFormat(s.to_string())),
        };

        let suit = Suit::try_from(suit_ch)?;
        let rank = Rank::try_from(rank_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse a single two-character card token.
pub fn parse_card(token: &str) -> Result<Card, CardParseError> {
    token.parse()
}

/// Parse card tokens in order, stopping at the first invalid one.
///
/// ```
/// use holdem_equity::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards(&["SA", "dk", "CT"]).unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
///
/// assert!(parse_cards(&["SA", "ZZ", "CT"]).is_err());
/// ```
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardParseError> {
    tokens.iter().map(|t| parse_card(t.as_ref())).collect()
}
