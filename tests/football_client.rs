//! Drives `FootballDataClient` against a local stand-in for the
//! football-data.org API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use matchanalyzer::football::{resolve_team, MatchQuery};
use matchanalyzer::models::{Competition, MatchCount};
use matchanalyzer::{Error, FootballDataClient, MatchDataSource};

const API_KEY: &str = "test-key";

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == API_KEY)
        .unwrap_or(false)
}

fn fixture(date: &str, home: (u64, &str), away: (u64, &str), score: Option<(u32, u32)>) -> serde_json::Value {
    json!({
        "id": 1,
        "utcDate": date,
        "status": if score.is_some() { "FINISHED" } else { "POSTPONED" },
        "competition": {"id": 2021, "code": "PL", "name": "Premier League"},
        "homeTeam": {"id": home.0, "name": home.1},
        "awayTeam": {"id": away.0, "name": away.1},
        "score": {
            "fullTime": {
                "home": score.map(|s| s.0),
                "away": score.map(|s| s.1)
            }
        }
    })
}

async fn team_matches(
    State(seen): State<Seen>,
    Path(id): Path<u64>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    }
    seen.lock().unwrap().push(query);

    match id {
        57 => Json(json!({
            "matches": [
                fixture("2024-02-04T16:30:00Z", (57, "Arsenal FC"), (64, "Liverpool FC"), Some((3, 1))),
                fixture("2024-03-31T15:30:00Z", (65, "Manchester City FC"), (57, "Arsenal FC"), Some((0, 0))),
                fixture("2024-01-20T12:30:00Z", (63, "Fulham FC"), (57, "Arsenal FC"), Some((2, 1))),
                fixture("2024-04-14T15:30:00Z", (57, "Arsenal FC"), (58, "Aston Villa FC"), Some((0, 2))),
                fixture("2024-04-20T11:30:00Z", (76, "Wolverhampton"), (57, "Arsenal FC"), None),
                fixture("2024-03-09T17:30:00Z", (57, "Arsenal FC"), (66, "Brentford FC"), Some((2, 1))),
                fixture("2024-02-24T15:00:00Z", (57, "Arsenal FC"), (67, "Newcastle United FC"), Some((4, 1)))
            ]
        }))
        .into_response(),
        58 => Json(json!({ "matches": [] })).into_response(),
        429 => (
            StatusCode::TOO_MANY_REQUESTS,
            [("X-RequestCounter-Reset", "42")],
            "slow down",
        )
            .into_response(),
        500 => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        503 => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "matches": [] })).into_response()
        }
        600 => (StatusCode::OK, "not json").into_response(),
        _ => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

async fn competition_teams(Path(code): Path<String>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return (StatusCode::FORBIDDEN, "restricted").into_response();
    }
    match code.as_str() {
        "PL" => Json(json!({
            "count": 3,
            "teams": [
                {"id": 61, "name": "Chelsea FC", "tla": "CHE"},
                {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal"},
                {"id": 58, "name": "Aston Villa FC"}
            ]
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, "unknown competition").into_response(),
    }
}

async fn spawn_provider() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/v4/teams/{id}/matches", get(team_matches))
        .route("/v4/competitions/{code}/teams", get(competition_teams))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v4", addr), seen)
}

fn client(base_url: &str, key: &str) -> FootballDataClient {
    FootballDataClient::new(key, base_url, Duration::from_secs(1), 365).unwrap()
}

fn count(n: u32) -> MatchCount {
    MatchCount::new(n).unwrap()
}

#[tokio::test]
async fn test_recent_matches_are_newest_first_and_limited() {
    let (base, seen) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let matches = client
        .fetch_recent_matches(&MatchQuery::new(57, count(5)))
        .await
        .unwrap();

    assert_eq!(matches.len(), 5);
    assert!(matches.windows(2).all(|w| w[0].date >= w[1].date));
    // The postponed match has no score and is dropped.
    assert_eq!(matches[0].away_team_name, "Aston Villa FC");
    assert_eq!(matches[4].home_team_name, "Arsenal FC");
    assert_eq!(matches[4].away_team_name, "Liverpool FC");

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].get("status").map(String::as_str), Some("FINISHED"));
    assert!(seen[0].contains_key("dateFrom"));
    assert!(seen[0].contains_key("dateTo"));
    assert!(!seen[0].contains_key("competitions"));
}

#[tokio::test]
async fn test_fewer_matches_than_limit() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let matches = client
        .fetch_recent_matches(&MatchQuery::new(57, count(10)))
        .await
        .unwrap();

    assert_eq!(matches.len(), 6);
}

#[tokio::test]
async fn test_zero_matches_is_success() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let matches = client
        .fetch_recent_matches(&MatchQuery::new(58, count(3)))
        .await
        .unwrap();

    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_competition_filter_sent() {
    let (base, seen) = spawn_provider().await;
    let client = client(&base, API_KEY);

    client
        .fetch_recent_matches(&MatchQuery::new(58, count(3)).in_competition(Competition::PremierLeague))
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].get("competitions").map(String::as_str), Some("PL"));
}

#[tokio::test]
async fn test_unknown_team_is_not_found() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let err = client
        .fetch_recent_matches(&MatchQuery::new(99999, count(5)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_rejected_key_is_authentication_error() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, "wrong-key");

    let err = client
        .fetch_recent_matches(&MatchQuery::new(57, count(5)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));

    let err = client.list_teams(Competition::PremierLeague).await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
}

#[tokio::test]
async fn test_server_error_is_upstream_unavailable() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let err = client
        .fetch_recent_matches(&MatchQuery::new(500, count(5)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UpstreamUnavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_rate_limit_reads_reset_header() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let err = client
        .fetch_recent_matches(&MatchQuery::new(429, count(5)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RateLimited(42)));
}

#[tokio::test]
async fn test_timeout_is_upstream_unavailable() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let err = client
        .fetch_recent_matches(&MatchQuery::new(503, count(5)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UpstreamUnavailable(msg) if msg.contains("timed out")));
}

#[test]
fn test_lookback_window_is_bounded() {
    for days in [0, -5, 3651, 1_000_000_000] {
        let err = FootballDataClient::new(API_KEY, "http://127.0.0.1:9/v4", Duration::from_secs(1), days)
            .err()
            .expect("lookback out of range");
        assert!(matches!(err, Error::Config(_)));
    }
    assert!(FootballDataClient::new(API_KEY, "http://127.0.0.1:9/v4", Duration::from_secs(1), 3650).is_ok());
}

#[tokio::test]
async fn test_unreachable_provider() {
    let client = client("http://127.0.0.1:9/v4", API_KEY);

    let err = client.list_teams(Competition::PremierLeague).await.unwrap_err();

    assert!(matches!(err, Error::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let err = client
        .fetch_recent_matches(&MatchQuery::new(600, count(5)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ParseError(_)));
}

#[tokio::test]
async fn test_teams_sorted_and_resolved() {
    let (base, _) = spawn_provider().await;
    let client = client(&base, API_KEY);

    let teams = client.list_teams(Competition::PremierLeague).await.unwrap();
    let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Arsenal FC", "Aston Villa FC", "Chelsea FC"]);

    let team = resolve_team(&client, Competition::PremierLeague, 61).await.unwrap();
    assert_eq!(team.name, "Chelsea FC");

    let err = resolve_team(&client, Competition::PremierLeague, 5).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = client.list_teams(Competition::Bundesliga).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
