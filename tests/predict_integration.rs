use chrono::{DateTime, TimeZone, Utc};
use httpmock::prelude::*;
use serde_json::json;

use chessrating::data::{ChessComClient, ClientConfig, RatingSource};
use chessrating::{AppError, PredictionParams, predict_rating};

const DAY_MS: i64 = 86_400_000;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn client_for(server: &MockServer) -> ChessComClient {
    ChessComClient::new(&ClientConfig {
        base_url: server.base_url(),
        timeout: None,
    })
    .expect("client should build")
}

fn params(user: &str) -> PredictionParams {
    PredictionParams {
        user: user.to_string(),
        days_in_future: 10,
        ..PredictionParams::default()
    }
}

/// +20 per day ending at `now`, offset by half a point.
fn trend_body() -> serde_json::Value {
    let t = now().timestamp_millis();
    json!([
        { "timestamp": t - 2 * DAY_MS, "rating": 1500.5 },
        { "timestamp": t - DAY_MS, "rating": 1520.5 },
        { "timestamp": t, "rating": 1540.5 },
    ])
}

#[test]
fn predicts_from_fetched_history() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hikaru/chart")
            .query_param("type", "blitz")
            .query_param("daysAgo", "30");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(trend_body());
    });

    let prediction = predict_rating(&client_for(&server), &params("hikaru"), now())
        .expect("prediction should succeed");

    mock.assert();
    assert_eq!(prediction.rating, 1740);
    assert_eq!(prediction.sample_count, 3);
}

#[test]
fn passes_game_type_and_window() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/magnus/chart")
            .query_param("type", "rapid")
            .query_param("daysAgo", "90");
        then.status(200).json_body(trend_body());
    });

    let samples = client_for(&server)
        .fetch_history("magnus", "rapid", 90)
        .expect("fetch should succeed");

    mock.assert();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[2].rating, 1540.5);
}

#[test]
fn missing_user_makes_no_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(trend_body());
    });

    let err = predict_rating(&client_for(&server), &params(""), now()).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    mock.assert_hits(0);
}

#[test]
fn non_200_status_is_reported_without_parsing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/nobody/chart");
        then.status(404).body("<html>not found</html>");
    });

    let err = predict_rating(&client_for(&server), &params("nobody"), now()).unwrap_err();

    mock.assert_hits(1);
    assert_eq!(err, AppError::HttpStatus(404));
    assert_eq!(err.to_string(), "GET returned 404");
}

#[test]
fn malformed_json_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/hikaru/chart");
        then.status(200).body(r#"{"error": "rate limited"}"#);
    });

    let err = predict_rating(&client_for(&server), &params("hikaru"), now()).unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[test]
fn empty_history_names_the_user() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/newbie/chart");
        then.status(200).json_body(json!([]));
    });

    let err = predict_rating(&client_for(&server), &params("newbie"), now()).unwrap_err();

    mock.assert_hits(1);
    assert_eq!(
        err,
        AppError::EmptyHistory {
            user: "newbie".to_string()
        }
    );
    assert!(err.to_string().contains("newbie"));
}

#[test]
fn unreachable_server_is_a_network_error() {
    let client = ChessComClient::new(&ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Some(std::time::Duration::from_secs(5)),
    })
    .expect("client should build");

    let err = predict_rating(&client, &params("hikaru"), now()).unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn repeated_calls_are_independent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/hikaru/chart");
        then.status(200).json_body(trend_body());
    });
    let client = client_for(&server);
    let corrected = PredictionParams {
        correct: true,
        ..params("hikaru")
    };

    let first = predict_rating(&client, &corrected, now()).unwrap();
    let second = predict_rating(&client, &corrected, now()).unwrap();

    mock.assert_hits(2);
    assert_eq!(first, second);
    assert!(first.correction.abs() < 1e-6);
}
