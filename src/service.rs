//! Request handling on top of the core.
//!
//! Mirrors the JSON API the evaluator is usually served behind: request
//! shape checks, player/trial bounds and response types. Transport is left
//! to the caller; `handle_json` goes from request text to response text.
use crate::equity::{EquityError, Simulator};
use crate::evaluator::{compare_hands, evaluate_hand, EvalError, HandReport};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const MIN_SIMULATIONS: u64 = 100;
pub const MAX_SIMULATIONS: u64 = 100_000;
pub const MAX_THREADS: usize = 64;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Equity(#[from] EquityError),
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServiceError {
    /// False only for I/O failures reported by `serde_json`; every other
    /// error, JSON syntax and data errors included, is treated as a
    /// problem with the request.
    pub fn is_client_error(&self) -> bool {
        match self {
            ServiceError::Json(e) => !e.is_io(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub hole_cards: Vec<String>,
    pub board_cards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub best_hand: String,
    pub hand_value: String,
    pub cards: Vec<String>,
}

impl From<HandReport> for EvaluateResponse {
    fn from(report: HandReport) -> Self {
        Self {
            best_hand: report.category().to_string(),
            cards: report.best_five_tokens(),
            hand_value: report.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub player1_hole_cards: Vec<String>,
    pub player2_hole_cards: Vec<String>,
    pub community_cards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub player1: EvaluateResponse,
    pub player2: EvaluateResponse,
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloRequest {
    pub hole_cards: Vec<String>,
    #[serde(default)]
    pub board_cards: Vec<String>,
    pub num_players: usize,
    pub num_simulations: u64,
    /// Fixed seed for a reproducible run; random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Worker threads, 1 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloResponse {
    pub win_probability: f64,
    pub tie_probability: f64,
    pub loss_probability: f64,
    pub simulations: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Any request, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Request {
    Evaluate(EvaluateRequest),
    Compare(CompareRequest),
    MonteCarlo(MonteCarloRequest),
    Health,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Evaluate(EvaluateResponse),
    Compare(CompareResponse),
    MonteCarlo(MonteCarloResponse),
    Health(HealthResponse),
}

fn bad_request(msg: &str) -> ServiceError {
    warn!("rejected request: {msg}");
    ServiceError::BadRequest(msg.to_string())
}

/// Best hand for 2 hole cards and a 5 card board.
pub fn evaluate(req: &EvaluateRequest) -> Result<EvaluateResponse, ServiceError> {
    debug!("evaluate: hole={:?} board={:?}", req.hole_cards, req.board_cards);
    if req.hole_cards.len() != 2 || req.board_cards.len() != 5 {
        return Err(bad_request("Must provide exactly 2 hole cards and 5 board cards"));
    }

    let all: Vec<&str> = req.hole_cards.iter().chain(&req.board_cards).map(String::as_str).collect();
    Ok(evaluate_hand(&all)?.into())
}

/// Both players' best hands and the winner on a shared 5 card board.
pub fn compare(req: &CompareRequest) -> Result<CompareResponse, ServiceError> {
    debug!(
        "compare: p1={:?} p2={:?} board={:?}",
        req.player1_hole_cards, req.player2_hole_cards, req.community_cards
    );
    if req.player1_hole_cards.len() != 2 {
        return Err(bad_request("Player 1: Must provide exactly 2 hole cards"));
    }
    if req.player2_hole_cards.len() != 2 {
        return Err(bad_request("Player 2: Must provide exactly 2 hole cards"));
    }
    if req.community_cards.len() != 5 {
        return Err(bad_request("Must provide exactly 5 community cards"));
    }

    let seven = |hole: &[String]| -> Vec<String> {
        hole.iter().chain(&req.community_cards).cloned().collect()
    };
    let cards1 = seven(&req.player1_hole_cards);
    let cards2 = seven(&req.player2_hole_cards);

    let player1: EvaluateResponse = evaluate_hand(&cards1)?.into();
    let player2: EvaluateResponse = evaluate_hand(&cards2)?.into();
    let winner = compare_hands(&cards1, &cards2)?;

    Ok(CompareResponse { player1, player2, winner: winner.to_string() })
}

/// Equity estimate for the hero's hole cards and a partial board.
pub fn monte_carlo(req: &MonteCarloRequest) -> Result<MonteCarloResponse, ServiceError> {
    debug!("montecarlo: {req:?}");
    if req.hole_cards.len() != 2 {
        return Err(bad_request("Must provide exactly 2 hole cards"));
    }
    if req.board_cards.len() > 5 {
        return Err(bad_request("Board cards cannot exceed 5 cards"));
    }
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&req.num_players) {
        return Err(bad_request("Number of players must be between 2 and 10"));
    }
    if !(MIN_SIMULATIONS..=MAX_SIMULATIONS).contains(&req.num_simulations) {
        return Err(bad_request("Number of simulations must be between 100 and 100000"));
    }
    let threads = req.threads.unwrap_or(1);
    if !(1..=MAX_THREADS).contains(&threads) {
        return Err(bad_request("Number of threads must be between 1 and 64"));
    }

    let sim = Simulator::from_tokens(&req.hole_cards, &req.board_cards, req.num_players)?;
    let seed = req.seed.unwrap_or_else(|| rand::rng().random());
    let outcome = if threads > 1 {
        sim.run_parallel(req.num_simulations, seed, threads)
    } else {
        sim.run_seeded(req.num_simulations, seed)
    };
    let equity = outcome.equity();

    info!(
        "montecarlo: {} players, {} trials, seed {seed}, {threads} thread(s): \
         {} wins, {} ties, {} losses",
        req.num_players, req.num_simulations, outcome.wins, outcome.ties, outcome.losses
    );

    Ok(MonteCarloResponse {
        win_probability: equity.win,
        tie_probability: equity.tie,
        loss_probability: equity.loss,
        simulations: req.num_simulations,
    })
}

/// Liveness probe; never touches the evaluator.
pub fn health() -> HealthResponse {
    HealthResponse { status: "healthy".to_string() }
}

pub fn handle(request: &Request) -> Result<Response, ServiceError> {
    Ok(match request {
        Request::Evaluate(req) => Response::Evaluate(evaluate(req)?),
        Request::Compare(req) => Response::Compare(compare(req)?),
        Request::MonteCarlo(req) => Response::MonteCarlo(monte_carlo(req)?),
        Request::Health => Response::Health(health()),
    })
}

/// Decode a JSON request, handle it and encode the response.
///
/// ```
/// use holdem_equity::service::handle_json;
///
/// let out = handle_json(r#"{
///     "kind": "evaluate",
///     "holeCards": ["DA", "DK"],
///     "boardCards": ["DT", "DJ", "DQ", "H2", "C3"]
/// }"#).unwrap();
/// assert!(out.contains("\"bestHand\":\"Royal Flush\""));
/// ```
pub fn handle_json(text: &str) -> Result<String, ServiceError> {
    let request: Request = serde_json::from_str(text)?;
    let response = handle(&request)?;
    Ok(serde_json::to_string(&response)?)
}
