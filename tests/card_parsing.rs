use holdem_equity::cards::{parse_card, parse_cards, Card, CardParseError, Rank, Suit};
use holdem_equity::hand::{Board, HoleCards};

#[test]
fn valid_tokens() {
    let cases = [
        ("HA", Rank::Ace, Suit::Hearts),
        ("SK", Rank::King, Suit::Spades),
        ("D7", Rank::Seven, Suit::Diamonds),
        ("CT", Rank::Ten, Suit::Clubs),
        ("s2", Rank::Two, Suit::Spades),
        ("hq", Rank::Queen, Suit::Hearts),
    ];
    for (token, rank, suit) in cases {
        assert_eq!(parse_card(token).unwrap(), Card::new(rank, suit), "{token}");
    }
}

#[test]
fn invalid_tokens() {
    for token in ["H1", "ZA", "XX", "", "A", "HAA", "10H", "AH"] {
        assert!(parse_card(token).is_err(), "{token} should not parse");
    }
    assert!(matches!(parse_card("AH"), Err(CardParseError::InvalidSuit(_))));
    assert!(matches!(parse_card("HX"), Err(CardParseError::InvalidRank(_))));
}

#[test]
fn every_card_round_trips_through_its_token() {
    for idx in 0..52 {
        let card = Card::from_index(idx).unwrap();
        assert_eq!(parse_card(&card.to_string()).unwrap(), card);
    }
}

#[test]
fn parse_all_is_all_or_nothing() {
    assert_eq!(parse_cards(&["HA", "SK"]).unwrap().len(), 2);
    assert!(parse_cards(&["HA", "SK", "??"]).is_err());
}

#[test]
fn hole_and_board_from_text() {
    let hole: HoleCards = "SA, HA".parse().unwrap();
    assert_eq!(hole.first(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(hole.second(), Card::new(Rank::Ace, Suit::Hearts));
    let board: Board = "D7 C8 H2".parse().unwrap();
    assert_eq!(board.missing(), 2);
    assert!("SA".parse::<HoleCards>().is_err());
    assert!("C2 C3 C4 C5 C6 C7".parse::<Board>().is_err());
}
