use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use holdem_equity::service::{
    self, CompareRequest, EvaluateRequest, MonteCarloRequest, Request, Response,
};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Debug, Parser)]
#[command(name = "holdem-equity", version = holdem_equity::VERSION)]
#[command(about = "Evaluate, compare and estimate equity of Texas Hold'em hands")]
struct Cli {
    /// More logging (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Best hand from 2 hole cards and 5 board cards.
    Evaluate {
        #[arg(long, num_args = 2, required = true)]
        hole: Vec<String>,
        #[arg(long, num_args = 5, required = true)]
        board: Vec<String>,
    },
    /// Showdown between two players on a shared board.
    Compare {
        #[arg(long, num_args = 2, required = true)]
        p1: Vec<String>,
        #[arg(long, num_args = 2, required = true)]
        p2: Vec<String>,
        #[arg(long, num_args = 5, required = true)]
        board: Vec<String>,
    },
    /// Monte Carlo win/tie/loss estimate against random opponents.
    Equity {
        #[arg(long, num_args = 2, required = true)]
        hole: Vec<String>,
        /// Zero to five known board cards.
        #[arg(long, num_args = 0..=5)]
        board: Vec<String>,
        #[arg(long, short, default_value_t = 2)]
        players: usize,
        #[arg(long, short, default_value_t = 10_000)]
        trials: u64,
        /// Fixed seed for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
    /// Handle a JSON request read from a file, or stdin with "-".
    Request { path: String },
    /// Liveness check.
    Health,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp_millis()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_request(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("reading request from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading request from {path}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let response = match cli.command {
        Command::Evaluate { hole, board } => {
            Response::Evaluate(service::evaluate(&EvaluateRequest {
                hole_cards: hole,
                board_cards: board,
            })?)
        }
        Command::Compare { p1, p2, board } => Response::Compare(service::compare(&CompareRequest {
            player1_hole_cards: p1,
            player2_hole_cards: p2,
            community_cards: board,
        })?),
        Command::Equity { hole, board, players, trials, seed, threads } => {
            Response::MonteCarlo(service::monte_carlo(&MonteCarloRequest {
                hole_cards: hole,
                board_cards: board,
                num_players: players,
                num_simulations: trials,
                seed,
                threads: Some(threads),
            })?)
        }
        Command::Request { path } => {
            let text = read_request(&path)?;
            let request: Request = serde_json::from_str(&text).context("decoding request")?;
            service::handle(&request)?
        }
        Command::Health => Response::Health(service::health()),
    };

    print_json(&response)
}
