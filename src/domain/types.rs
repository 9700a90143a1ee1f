//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be
//! built from CLI flags, loaded from JSON, or logged as-is.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::math::LinearModel;

/// Milliseconds per second; chess.com reports timestamps in milliseconds.
const MILLIS_PER_SECOND: f64 = 1000.0;

/// Parameters for a single rating prediction.
///
/// Built once by the caller and never mutated afterwards; there are no
/// process-wide defaults, use `PredictionParams::default()` as a starting point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionParams {
    /// The chess.com user.
    pub user: String,
    /// The chess.com game type (`blitz`, `rapid`, `bullet`, ...).
    pub game_type: String,
    /// How many days of history to use.
    pub days_ago: u32,
    /// How far to look in the future. Negative values look into the past.
    pub days_in_future: i64,
    /// Correct the prediction so that the current rating is accurate.
    pub correct: bool,
}

impl Default for PredictionParams {
    fn default() -> Self {
        Self {
            user: String::new(),
            game_type: "blitz".to_string(),
            days_ago: 30,
            days_in_future: 30,
            correct: false,
        }
    }
}

impl PredictionParams {
    /// Check that the parameters can be sent to the history endpoint.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user.trim().is_empty() {
            return Err(AppError::Validation("must specify user".to_string()));
        }
        if self.game_type.trim().is_empty() {
            return Err(AppError::Validation("must specify game type".to_string()));
        }
        if self.days_ago == 0 {
            return Err(AppError::Validation("days ago must be positive".to_string()));
        }
        Ok(())
    }
}

/// One point of a player's rating history, exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSample {
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    pub rating: f64,
}

impl RatingSample {
    pub fn seconds(&self) -> f64 {
        self.timestamp / MILLIS_PER_SECOND
    }

    /// Regression point `(seconds, rating)`.
    pub fn point(&self) -> (f64, f64) {
        (self.seconds(), self.rating)
    }
}

/// Outcome of one prediction.
///
/// `rating` is the answer; the rest is kept for logging and inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub rating: i64,
    /// `rating` before truncation toward zero.
    pub raw_rating: f64,
    pub model: LinearModel,
    /// Offset added to the raw extrapolation (0 unless correction was requested).
    pub correction: f64,
    /// Target instant, seconds since the Unix epoch.
    pub target_seconds: i64,
    pub sample_count: usize,
}
