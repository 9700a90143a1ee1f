//! Ordinary least squares fit of rating over time.
//!
//! We fit a single explanatory variable:
//!
//! ```text
//! minimize Σ (y_i - (a + b·x_i))^2
//! ```
//!
//! where `x` is seconds since the Unix epoch and `y` is the rating.
//!
//! Implementation choices:
//! - `x` is centred on its mean before solving. Raw timestamps are ~1.7e9, so the
//!   uncentred design matrix `[1, x]` is badly conditioned; the intercept is
//!   recovered afterwards.
//! - The 2-column system is solved with SVD, which handles tall design matrices
//!   (`QR::solve` on nalgebra is meant for square systems).
//! - Identical timestamps leave the slope undefined and are reported as an error
//!   rather than guessed.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A fitted line `y = intercept + slope·x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    /// Rating points per second.
    pub slope: f64,
}

impl LinearModel {
    /// Evaluate the line at `x`. Extrapolating outside the training range is fine.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Free-function form of [`LinearModel::predict`].
pub fn predict(model: &LinearModel, x: f64) -> f64 {
    model.predict(x)
}

/// Fit `y = a + b·x` to `(x, y)` points by ordinary least squares.
///
/// Fails with [`AppError::Fit`] when there are no points, a value is not finite,
/// or every `x` is the same.
pub fn fit_line(points: &[(f64, f64)]) -> Result<LinearModel, AppError> {
    if points.is_empty() {
        return Err(AppError::Fit("no points to fit".to_string()));
    }
    if points.iter().any(|(x, y)| !(x.is_finite() && y.is_finite())) {
        return Err(AppError::Fit("non-finite input value".to_string()));
    }

    let (x_min, x_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    if x_max == x_min {
        return Err(AppError::Fit(
            "all samples share one timestamp, slope is undefined".to_string(),
        ));
    }

    let n = points.len();
    let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / n as f64;

    let mut design = DMatrix::<f64>::zeros(n, 2);
    for (i, &(x, _)) in points.iter().enumerate() {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = x - x_mean;
    }
    let y = DVector::from_iterator(n, points.iter().map(|&(_, y)| y));

    let beta = solve_least_squares(&design, &y)
        .ok_or_else(|| AppError::Fit("least squares system is ill-conditioned".to_string()))?;

    Ok(LinearModel {
        intercept: beta[0] - beta[1] * x_mean,
        slope: beta[1],
    })
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
