//! holdem-equity: Texas Hold'em hand evaluation and equity estimation
//!
//! Goals:
//! - Deterministic best-of-seven evaluation with a total order over hands
//! - Monte Carlo win/tie/loss estimates, reproducible under a fixed seed
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate and compare
//! ```
//! use holdem_equity::evaluator::{compare_hands, evaluate_hand, Category, Winner};
//!
//! let report = evaluate_hand(&["DA", "DK", "DT", "DJ", "DQ", "H2", "C3"]).unwrap();
//! assert_eq!(report.category(), Category::RoyalFlush);
//!
//! let p1 = ["DK", "C5", "SK", "HT", "C8", "C7", "D2"];
//! let p2 = ["H8", "D5", "SK", "HT", "C8", "C7", "D2"];
//! assert_eq!(compare_hands(&p1, &p2).unwrap(), Winner::Player1);
//! ```
//!
//! ## Equity
//! ```
//! use holdem_equity::equity::run_simulation_seeded;
//!
//! let equity = run_simulation_seeded(&["SA", "HA"], &["D7", "C8", "H2"], 2, 1_000, 7).unwrap();
//! assert!(equity.win > equity.loss);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin holdem-equity -- equity --hole SA HA --players 4 --trials 20000
//! ```

pub mod cards;
pub mod equity;
pub mod evaluator;
pub mod hand;
pub mod service;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
