//! The prediction pipeline shared by the binary and library callers.
//!
//! fetch history -> fit line -> (optional) correct to current rating -> extrapolate
//!
//! The clock is a parameter so the whole pipeline is deterministic under test.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::data::RatingSource;
use crate::domain::{Prediction, PredictionParams, RatingSample};
use crate::error::AppError;
use crate::math::fit_line;

/// Predict a player's rating `days_in_future` days after `now`.
pub fn predict_rating(
    source: &dyn RatingSource,
    params: &PredictionParams,
    now: DateTime<Utc>,
) -> Result<Prediction, AppError> {
    // 1) Reject bad parameters before touching the network.
    params.validate()?;
    let target = Duration::try_days(params.days_in_future)
        .and_then(|horizon| now.checked_add_signed(horizon))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "days in future {} is out of range",
                params.days_in_future
            ))
        })?;

    // 2) Fetch history. Sources guarantee chronological order and non-emptiness,
    // but an empty result must never reach the regression.
    let samples = source.fetch_history(&params.user, &params.game_type, params.days_ago)?;
    let Some(last) = samples.last() else {
        return Err(AppError::EmptyHistory {
            user: params.user.clone(),
        });
    };

    // 3) Fit rating over time in seconds.
    let points: Vec<(f64, f64)> = samples.iter().map(RatingSample::point).collect();
    let model = fit_line(&points)?;
    debug!(
        slope_per_day = model.slope * 86_400.0,
        intercept = model.intercept,
        samples = samples.len(),
        "fitted rating trend"
    );

    // 4) Shift the line so it passes through the latest observed rating at `now`.
    let now_seconds = now.timestamp();
    let correction = if params.correct {
        let current_pred = model.predict(now_seconds as f64);
        last.rating - current_pred
    } else {
        0.0
    };
    debug!(correction, "applied correction");

    // 5) Extrapolate.
    let target_seconds = target.timestamp();
    let future_pred = model.predict(target_seconds as f64) + correction;
    if !future_pred.is_finite() {
        return Err(AppError::Fit(format!(
            "prediction at {target} is not a finite number"
        )));
    }
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    let truncated = future_pred.trunc();
    if !(truncated >= i64::MIN as f64 && truncated < i64::MAX as f64) {
        return Err(AppError::Fit(format!(
            "prediction {future_pred} at {target} does not fit in an integer rating"
        )));
    }

    Ok(Prediction {
        rating: truncated as i64,
        raw_rating: future_pred,
        model,
        correction,
        target_seconds,
        sample_count: samples.len(),
    })
}

/// [`predict_rating`] against the wall clock.
pub fn predict_rating_now(
    source: &dyn RatingSource,
    params: &PredictionParams,
) -> Result<Prediction, AppError> {
    predict_rating(source, params, Utc::now())
}
