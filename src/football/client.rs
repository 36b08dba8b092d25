use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client, Response, StatusCode};

use crate::config::{Config, MAX_LOOKBACK_DAYS};
use crate::error::{Error, Result};
use crate::football::source::{select_recent, MatchDataSource, MatchQuery};
use crate::models::provider::{ApiMatch, MatchesResponse, TeamsResponse};
use crate::models::{Competition, MatchRecord, Team};

/// Seconds to wait when a 429 carries no counter-reset header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

pub struct FootballDataClient {
    client: Client,
    base_url: String,
    lookback_days: i64,
}

impl FootballDataClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration, lookback_days: i64) -> Result<Self> {
        if !(1..=MAX_LOOKBACK_DAYS).contains(&lookback_days) {
            return Err(Error::Config(format!(
                "match lookback must be between 1 and {} days (got {})",
                MAX_LOOKBACK_DAYS, lookback_days
            )));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert("X-Auth-Token", header::HeaderValue::from_str(api_key)?);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("matchanalyzer/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            lookback_days,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.football_api_key,
            &config.football_api_base_url,
            config.stats_timeout,
            config.match_lookback_days,
        )
    }

    fn matches_url(&self, query: &MatchQuery) -> String {
        let today = Utc::now().date_naive();
        let from = today - chrono::Duration::days(self.lookback_days);
        let mut url = format!(
            "{}/teams/{}/matches?status=FINISHED&dateFrom={}&dateTo={}",
            self.base_url,
            query.team_id,
            from.format("%Y-%m-%d"),
            today.format("%Y-%m-%d"),
        );
        if let Some(competition) = query.competition {
            url.push_str(&format!("&competitions={}", competition.code()));
        }
        url
    }
}

#[async_trait]
impl MatchDataSource for FootballDataClient {
    async fn list_teams(&self, competition: Competition) -> Result<Vec<Team>> {
        let url = format!("{}/competitions/{}/teams", self.base_url, competition.code());
        tracing::info!("Fetching teams for: {}", competition.code());

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let response = check_status(response, &format!("competition {}", competition.code())).await?;

        let body: TeamsResponse = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("Failed to decode teams: {}", e)))?;

        let mut teams: Vec<Team> = body
            .teams
            .into_iter()
            .map(|t| t.into_team(competition))
            .collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!("{} teams in {}", teams.len(), competition.code());
        Ok(teams)
    }

    async fn fetch_recent_matches(&self, query: &MatchQuery) -> Result<Vec<MatchRecord>> {
        let url = self.matches_url(query);
        tracing::info!(
            "Fetching last {} matches for team {}",
            query.limit,
            query.team_id
        );

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let response = check_status(response, &format!("team {}", query.team_id)).await?;

        let body: MatchesResponse = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("Failed to decode matches: {}", e)))?;

        let total = body.matches.len();
        let records: Vec<MatchRecord> = body
            .matches
            .into_iter()
            .filter_map(ApiMatch::into_record)
            .collect();
        if records.len() < total {
            tracing::debug!(
                "Dropped {} matches without a final score",
                total - records.len()
            );
        }

        Ok(select_recent(records, query.team_id, query.limit))
    }

    fn name(&self) -> &str {
        "football-data.org"
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::UpstreamUnavailable("request timed out".to_string())
    } else {
        Error::UpstreamUnavailable(e.to_string())
    }
}

async fn check_status(response: Response, subject: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Authentication(format!("{} - {}", status, body)))
        }
        StatusCode::NOT_FOUND => Err(Error::NotFound(subject.to_string())),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("x-requestcounter-reset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            tracing::warn!("Stats provider rate limit hit, reset in {}s", retry_after);
            Err(Error::RateLimited(retry_after))
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(Error::UpstreamUnavailable(format!(
                "Failed to fetch {}: {} - {}",
                subject, status, body
            )))
        }
    }
}
