//! Monte Carlo equity estimation.
//!
//! Each trial completes the board at random, deals every opponent two random
//! cards, and compares the hero's best hand with the best opposing hand.
mod card_set;
mod parallel;

pub use card_set::CardSet;

use crate::cards::{Card, CardParseError, Rank, Suit};
use crate::evaluator::{evaluate_seven, HandScore};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] HandError),
    #[error("at least 2 players are needed, got {0}")]
    NotEnoughPlayers(usize),
}

impl From<CardParseError> for EquityError {
    fn from(err: CardParseError) -> Self {
        EquityError::InvalidInput(HandError::CardParse(err))
    }
}

/// Win/tie/loss counts over a number of trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SimulationOutcome {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl SimulationOutcome {
    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Count one trial given the hero's hand compared to the best opponent.
    pub fn record(&mut self, hero_vs_field: Ordering) {
        match hero_vs_field {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }

    /// Counts divided by the number of trials; all zero when no trial ran.
    pub fn equity(&self) -> Equity {
        let n = self.trials();
        if n == 0 {
            return Equity::default();
        }
        let n = n as f64;
        Equity {
            win: self.wins as f64 / n,
            tie: self.ties as f64 / n,
            loss: self.losses as f64 / n,
        }
    }
}

impl AddAssign for SimulationOutcome {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.ties += rhs.ties;
        self.losses += rhs.losses;
    }
}

impl Add for SimulationOutcome {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for SimulationOutcome {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Win, tie and loss probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Equity {
    pub win: f64,
    pub tie: f64,
    pub loss: f64,
}

/// A validated simulation setup: hero hole cards, known board and table size.
///
/// ```
/// use holdem_equity::equity::Simulator;
///
/// let sim = Simulator::from_tokens(&["SA", "HA"], &["D7", "C8", "H2"], 2).unwrap();
/// let outcome = sim.run_seeded(2_000, 42);
/// assert_eq!(sim.num_players(), 2);
/// assert_eq!(outcome.trials(), 2_000);
/// assert!(outcome.equity().win > 0.7);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    hole: HoleCards,
    board: Board,
    num_players: usize,
    /// Hero hole cards plus the known board.
    known: CardSet,
}

impl Simulator {
    pub fn new(hole: HoleCards, board: Board, num_players: usize) -> Result<Self, EquityError> {
        validate_holdem(&hole, &board)?;
        if num_players < 2 {
            return Err(EquityError::NotEnoughPlayers(num_players));
        }
        let known = CardSet::from_cards(hole.as_array().into_iter().chain(board.as_slice().iter().copied()));
        Ok(Self { hole, board, num_players, known })
    }

    /// Parse two hole card tokens and zero to five board tokens.
    pub fn from_tokens<S: AsRef<str>, T: AsRef<str>>(
        hole: &[S],
        board: &[T],
        num_players: usize,
    ) -> Result<Self, EquityError> {
        Self::new(HoleCards::parse(hole)?, Board::parse(board)?, num_players)
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Play one random completion; returns how the hero fared against the
    /// best opponent.
    pub fn run_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Ordering {
        let (board, dealt) = self.complete_board(rng);
        let [h1, h2] = self.hole.as_array();
        let hero = evaluate_seven(&[h1, h2, board[0], board[1], board[2], board[3], board[4]]);

        let best_opponent = (1..self.num_players)
            .map(|_| {
                let [first, second] = deal_opponent(dealt, rng);
                evaluate_seven(&[first, second, board[0], board[1], board[2], board[3], board[4]])
            })
            .max();

        best_opponent.map_or(Ordering::Greater, |best: HandScore| hero.cmp(&best))
    }

    /// Fill the board to five cards; returns it with the trial's exclusion set.
    fn complete_board<R: Rng + ?Sized>(&self, rng: &mut R) -> ([Card; 5], CardSet) {
        let known = self.board.as_slice();
        let mut board = [Card::new(Rank::Two, Suit::Hearts); 5];
        board[..known.len()].copy_from_slice(known);

        let mut dealt = self.known;
        for slot in &mut board[known.len()..] {
            *slot = dealt.draw(rng);
            dealt = dealt.with(*slot);
        }
        (board, dealt)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, num_trials: u64, rng: &mut R) -> SimulationOutcome {
        let mut outcome = SimulationOutcome::default();
        for _ in 0..num_trials {
            outcome.record(self.run_trial(rng));
        }
        outcome
    }

    /// Reproducible run: the same seed always gives the same outcome.
    pub fn run_seeded(&self, num_trials: u64, seed: u64) -> SimulationOutcome {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run_with_rng(num_trials, &mut rng)
    }

    /// Run with a fresh seed from the thread RNG.
    pub fn run(&self, num_trials: u64) -> SimulationOutcome {
        let seed: u64 = rand::rng().random();
        self.run_seeded(num_trials, seed)
    }
}

/// Two distinct cards outside `dealt`.
///
/// `dealt` is taken by value and left as is, so one opponent's cards are
/// never excluded for the next.
fn deal_opponent<R: Rng + ?Sized>(dealt: CardSet, rng: &mut R) -> [Card; 2] {
    let first = dealt.draw(rng);
    let second = dealt.with(first).draw(rng);
    [first, second]
}

/// Estimate win/tie/loss probabilities for `hole` against `num_players - 1`
/// random opponents, given zero to five known board cards.
///
/// ```
/// use holdem_equity::equity::run_simulation;
///
/// let no_board: [&str; 0] = [];
/// let equity = run_simulation(&["SK", "CA"], &no_board, 4, 500).unwrap();
/// let total = equity.win + equity.tie + equity.loss;
/// assert!((total - 1.0).abs() < 1e-9);
/// ```
pub fn run_simulation<S: AsRef<str>, T: AsRef<str>>(
    hole: &[S],
    board: &[T],
    num_players: usize,
    num_trials: u64,
) -> Result<Equity, EquityError> {
    Ok(Simulator::from_tokens(hole, board, num_players)?.run(num_trials).equity())
}

/// Same as `run_simulation` with a fixed seed.
pub fn run_simulation_seeded<S: AsRef<str>, T: AsRef<str>>(
    hole: &[S],
    board: &[T],
    num_players: usize,
    num_trials: u64,
    seed: u64,
) -> Result<Equity, EquityError> {
    Ok(Simulator::from_tokens(hole, board, num_players)?.run_seeded(num_trials, seed).equity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn outcome_records_and_converts() {
        let mut outcome = SimulationOutcome::default();
        outcome.record(Ordering::Greater);
        outcome.record(Ordering::Greater);
        outcome.record(Ordering::Equal);
        outcome.record(Ordering::Less);
        assert_eq!(outcome.trials(), 4);
        let eq = outcome.equity();
        assert_eq!((eq.win, eq.tie, eq.loss), (0.5, 0.25, 0.25));
    }

    #[test]
    fn empty_outcome_has_zero_equity() {
        assert_eq!(SimulationOutcome::default().equity(), Equity::default());
    }

    #[test]
    fn outcomes_sum() {
        let a = SimulationOutcome { wins: 1, ties: 2, losses: 3 };
        let b = SimulationOutcome { wins: 4, ties: 0, losses: 1 };
        let total: SimulationOutcome = [a, b].into_iter().sum();
        assert_eq!(total, SimulationOutcome { wins: 5, ties: 2, losses: 4 });
    }

    #[test]
    fn rejects_bad_setups() {
        let board: [&str; 0] = [];
        assert_eq!(
            Simulator::from_tokens(&["SA"], &board, 2).unwrap_err(),
            EquityError::InvalidInput(HandError::HoleCount(1))
        );
        assert_eq!(
            Simulator::from_tokens(&["SA", "SK"], &["C2", "C3", "C4", "C5", "C6", "C7"], 2)
                .unwrap_err(),
            EquityError::InvalidInput(HandError::TooManyBoardCards(6))
        );
        assert!(matches!(
            Simulator::from_tokens(&["SA", "SK"], &["SA"], 2),
            Err(EquityError::InvalidInput(HandError::DuplicateCard(_)))
        ));
        assert!(matches!(
            Simulator::from_tokens(&["SA", "XK"], &board, 2),
            Err(EquityError::InvalidInput(HandError::CardParse(_)))
        ));
        assert_eq!(
            Simulator::from_tokens(&["SA", "SK"], &board, 1).unwrap_err(),
            EquityError::NotEnoughPlayers(1)
        );
    }

    #[test]
    fn completed_board_keeps_known_cards_and_avoids_collisions() {
        let sim = Simulator::from_tokens(&["SA", "HA"], &["D7", "C8"], 2).unwrap();
        let known = parse_cards(&["SA", "HA", "D7", "C8"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let (board, dealt) = sim.complete_board(&mut rng);
            assert_eq!(&board[..2], &known[2..]);
            assert_eq!(dealt.len(), 7);
            assert_eq!(CardSet::from_cards(board).len(), 5);
            assert!(!board[2..].iter().any(|c| known.contains(c)));
        }
    }

    #[test]
    fn opponents_get_two_distinct_undealt_cards() {
        let sim = Simulator::from_tokens(&["SA", "HA"], &["D7", "C8", "H2"], 9).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..200 {
            let (board, dealt) = sim.complete_board(&mut rng);
            let before = dealt;
            for _ in 1..sim.num_players() {
                let [first, second] = deal_opponent(dealt, &mut rng);
                assert_ne!(first, second);
                assert!(!dealt.contains(first) && !dealt.contains(second));
                assert!(!board.contains(&first) && !board.contains(&second));
                assert_eq!(dealt, before);
            }
        }
    }

    #[test]
    fn full_board_is_never_redrawn() {
        let sim = Simulator::from_tokens(&["SA", "HA"], &["D7", "C8", "H2", "S3", "D4"], 2).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let (board, dealt) = sim.complete_board(&mut rng);
        assert_eq!(board.to_vec(), parse_cards(&["D7", "C8", "H2", "S3", "D4"]).unwrap());
        assert_eq!(dealt.len(), 7);
    }

    #[test]
    fn royal_flush_on_board_always_ties() {
        let sim =
            Simulator::from_tokens(&["C2", "D3"], &["SA", "SK", "SQ", "SJ", "ST"], 6).unwrap();
        let outcome = sim.run_seeded(300, 1);
        assert_eq!(outcome, SimulationOutcome { wins: 0, ties: 300, losses: 0 });
    }

    #[test]
    fn seeded_runs_repeat() {
        let sim = Simulator::from_tokens(&["SK", "CA"], &["D6", "S9", "H4"], 3).unwrap();
        assert_eq!(sim.run_seeded(400, 77), sim.run_seeded(400, 77));
    }
}
