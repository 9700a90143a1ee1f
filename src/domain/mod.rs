//! Domain types used throughout the prediction.
//!
//! This module defines:
//!
//! - caller-supplied parameters (`PredictionParams`)
//! - fetched history points (`RatingSample`)
//! - the prediction output (`Prediction`)

pub mod types;

pub use types::*;
