//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - builds the chess.com client
//! - runs the prediction and prints the rating

use clap::Parser;

use crate::cli::Cli;
use crate::data::{ChessComClient, ClientConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `chessrating` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init_logging(cli.verbose)?;

    let params = cli.params();
    let config = client_config(&cli);
    let client = ChessComClient::new(&config)?;

    let prediction = pipeline::predict_rating_now(&client, &params)?;
    println!("{}", prediction.rating);
    Ok(())
}

/// Environment/`.env` configuration with CLI overrides applied.
pub fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    config
}
