//! `chessrating` library crate.
//!
//! Fetches a chess.com player's rating history, fits a least-squares line
//! through it and extrapolates the rating to a future date.
//!
//! The binary (`chessrating`) is a thin wrapper around this library so the whole
//! prediction is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod logging;
pub mod math;

pub use app::pipeline::{predict_rating, predict_rating_now};
pub use data::{ChessComClient, ClientConfig, RatingSource};
pub use domain::{Prediction, PredictionParams, RatingSample};
pub use error::AppError;
pub use math::{LinearModel, fit_line};
