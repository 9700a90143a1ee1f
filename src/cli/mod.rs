//! Command-line parsing for the rating predictor.
//!
//! Only argument parsing lives here; `app` turns the parsed flags into
//! `PredictionParams` and a `ClientConfig`.

use clap::{ArgAction, Parser};

use crate::domain::PredictionParams;

/// Extrapolate a chess.com rating from its recent trend.
#[derive(Debug, Parser)]
#[command(name = "chessrating", version)]
pub struct Cli {
    /// chess.com username.
    #[arg(short, long, default_value = "")]
    pub user: String,

    /// Type of game (blitz, rapid, bullet, ...).
    #[arg(long, default_value = "blitz")]
    pub game_type: String,

    /// How many days of history to fetch.
    #[arg(long, default_value_t = 30)]
    pub days_ago: u32,

    /// How far in the future to predict (negative looks back).
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub days_in_future: i64,

    /// Assume that the current rating is accurate, and correct estimates.
    #[arg(long)]
    pub correct: bool,

    /// Rating history endpoint (defaults to $CHESSRATING_BASE_URL, then chess.com).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn params(&self) -> PredictionParams {
        PredictionParams {
            user: self.user.clone(),
            game_type: self.game_type.clone(),
            days_ago: self.days_ago,
            days_in_future: self.days_in_future,
            correct: self.correct,
        }
    }
}
