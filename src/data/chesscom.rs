//! chess.com rating history integration.
//!
//! The endpoint was found by inspecting chess.com's HTML and is not a documented
//! API, so expect it to move.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use crate::domain::RatingSample;
use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://www.chess.com/callback/live/stats";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "CHESSRATING_BASE_URL";

/// Where and how to reach the rating history endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from the environment (or `.env`) when set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }
}

/// Anything that can produce a player's rating history.
///
/// Implementations must return samples in chronological order: the last
/// element is taken as the player's current rating.
pub trait RatingSource {
    fn fetch_history(
        &self,
        user: &str,
        game_type: &str,
        days_ago: u32,
    ) -> Result<Vec<RatingSample>, AppError>;
}

pub struct ChessComClient {
    client: Client,
    base_url: Url,
}

impl ChessComClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("bad base URL '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "base URL '{}' cannot take path segments",
                config.base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("could not build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// `<base>/<user>/chart`, with the user percent-encoded as one segment.
    pub fn chart_url(&self, user: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(user).push("chart");
        }
        url
    }
}

impl RatingSource for ChessComClient {
    fn fetch_history(
        &self,
        user: &str,
        game_type: &str,
        days_ago: u32,
    ) -> Result<Vec<RatingSample>, AppError> {
        let url = self.chart_url(user);
        debug!(%url, game_type, days_ago, "requesting rating history");

        let resp = self
            .client
            .get(url)
            .query(&[("type", game_type), ("daysAgo", &days_ago.to_string())])
            .send()
            .map_err(|e| AppError::Network(format!("could not get ratings from chess.com: {e}")))?;

        if resp.status() != StatusCode::OK {
            return Err(AppError::HttpStatus(resp.status().as_u16()));
        }

        let body = resp.text().map_err(|e| {
            AppError::Network(format!("could not read response from chess.com: {e}"))
        })?;
        let samples = parse_history(&body)?;

        if samples.is_empty() {
            return Err(AppError::EmptyHistory {
                user: user.to_string(),
            });
        }

        info!(user, samples = samples.len(), "fetched rating history");
        Ok(samples)
    }
}

/// Decode the endpoint's `[{"timestamp": ms, "rating": n}, ...]` body.
pub fn parse_history(body: &str) -> Result<Vec<RatingSample>, AppError> {
    let samples: Vec<RatingSample> =
        serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))?;

    if let Some(bad) = samples
        .iter()
        .find(|s| !(s.timestamp.is_finite() && s.rating.is_finite()))
    {
        return Err(AppError::Decode(format!("non-finite sample {bad:?}")));
    }

    Ok(samples)
}
