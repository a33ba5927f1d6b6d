use holdem_equity::service::{handle_json, ServiceError};
use serde_json::Value;

fn call(body: &str) -> Value {
    serde_json::from_str(&handle_json(body).unwrap()).unwrap()
}

#[test]
fn evaluate_request() {
    let out = call(
        r#"{"kind":"evaluate","holeCards":["S2","S5"],"boardCards":["HA","SA","DA","HT","S5"]}"#,
    );
    assert_eq!(out["bestHand"], "Full House");
    assert_eq!(out["handValue"], "Full House, Aces full of Fives");
    assert_eq!(out["cards"].as_array().map(Vec::len), Some(5));
}

#[test]
fn compare_request() {
    let out = call(
        r#"{"kind":"compare",
            "player1HoleCards":["HA","C3"],
            "player2HoleCards":["CQ","H4"],
            "communityCards":["SA","DQ","CK","D6","H6"]}"#,
    );
    assert_eq!(out["winner"], "Player 1");
    assert_eq!(out["player1"]["bestHand"], "Two Pair");
    assert_eq!(out["player2"]["handValue"], "Two Pair, Queens and Sixes");
}

#[test]
fn montecarlo_request_with_seed_and_threads() {
    let body = r#"{"kind":"montecarlo","holeCards":["SA","HA"],"boardCards":["D7"],
                   "numPlayers":3,"numSimulations":2000,"seed":5,"threads":4}"#;
    let a = call(body);
    let b = call(body);
    assert_eq!(a, b);
    assert_eq!(a["simulations"], 2000);
    let total: f64 = ["winProbability", "tieProbability", "lossProbability"]
        .iter()
        .map(|k| a[*k].as_f64().unwrap())
        .sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn health_request() {
    assert_eq!(call(r#"{"kind":"health"}"#)["status"], "healthy");
}

#[test]
fn bounds_are_bad_requests() {
    let err = handle_json(
        r#"{"kind":"montecarlo","holeCards":["SA","HA"],"numPlayers":11,"numSimulations":1000}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::BadRequest(_)));
    assert_eq!(err.to_string(), "Number of players must be between 2 and 10");

    let err = handle_json(
        r#"{"kind":"montecarlo","holeCards":["SA","HA"],"numPlayers":2,"numSimulations":1000,"threads":0}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::BadRequest(_)));
}

#[test]
fn bad_cards_and_unknown_kinds_are_client_errors() {
    let err = handle_json(
        r#"{"kind":"evaluate","holeCards":["S1","S5"],"boardCards":["HA","SA","DA","HT","S5"]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Eval(_)));
    assert!(err.is_client_error());

    let err = handle_json(r#"{"kind":"shuffle"}"#).unwrap_err();
    assert!(matches!(err, ServiceError::Json(_)));
}
