use crate::cards::{Card, Rank, Suit};
use rand::Rng;

/// A set of cards stored as a 52-bit mask, one bit per `Card::index`.
///
/// Sets are `Copy` values: adding a card returns a new set, so a derived
/// set can be dropped without touching the one it came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    pub const EMPTY: CardSet = CardSet(0);

    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        cards.into_iter().fold(Self::EMPTY, CardSet::with)
    }

    pub const fn contains(self, card: Card) -> bool {
        self.0 & (1 << card.index()) != 0
    }

    /// This set plus `card`.
    #[must_use]
    pub const fn with(self, card: Card) -> Self {
        CardSet(self.0 | (1 << card.index()))
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cards in the set, ordered by index.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        (0..52).filter_map(Card::from_index).filter(move |&c| self.contains(c))
    }

    /// Draw a uniformly random card not in this set.
    ///
    /// Samples (suit, rank) pairs and rejects cards already in the set. The
    /// set must leave at least one card free.
    pub(crate) fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> Card {
        debug_assert!(self.len() < 52, "no cards left to draw");
        loop {
            let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
            let rank = Rank::ALL[rng.random_range(0..Rank::ALL.len())];
            let card = Card::new(rank, suit);
            if !self.contains(card) {
                return card;
            }
        }
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn with_leaves_the_source_set_untouched() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let base = CardSet::EMPTY;
        let layered = base.with(ace);
        assert!(!base.contains(ace));
        assert!(layered.contains(ace));
        assert!(base.is_empty());
        assert!(!layered.is_empty());
        assert_eq!(layered.len(), 1);
        assert_eq!(layered.with(ace), layered);
    }

    #[test]
    fn iter_returns_members() {
        let cards = parse_cards(&["HA", "S2", "CT"]).unwrap();
        let set: CardSet = cards.iter().copied().collect();
        let mut back: Vec<Card> = set.iter().collect();
        back.sort();
        let mut expected = cards.clone();
        expected.sort();
        assert_eq!(back, expected);
    }

    #[test]
    fn draw_never_returns_excluded_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // Leave only three cards free
        let free = parse_cards(&["H2", "DK", "SA"]).unwrap();
        let excluded: CardSet = (0..52)
            .filter_map(Card::from_index)
            .filter(|c| !free.contains(c))
            .collect();
        assert_eq!(excluded.len(), 49);

        for _ in 0..200 {
            let card = excluded.draw(&mut rng);
            assert!(free.contains(&card));
        }
    }

    #[test]
    fn draw_finds_the_last_free_card() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let last = Card::new(Rank::Seven, Suit::Clubs);
        let all_but_one: CardSet = (0..52).filter_map(Card::from_index).filter(|&c| c != last).collect();
        assert_eq!(all_but_one.len(), 51);
        for _ in 0..20 {
            assert_eq!(all_but_one.draw(&mut rng), last);
        }
    }
}
