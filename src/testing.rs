//! Deterministic stand-ins for the stats provider and the narrative service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::football::source::select_recent;
use crate::football::{MatchDataSource, MatchQuery};
use crate::llm::{parse_narrative, NarrativeGenerator, NarrativeRequest};
use crate::models::{Competition, MatchRecord, Narrative, Team, TeamId};

pub fn played(days_ago: i64, home: TeamId, away: TeamId, hg: u32, ag: u32) -> MatchRecord {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    MatchRecord {
        date: base - Duration::days(days_ago),
        home_team_id: home,
        home_team_name: format!("Team {}", home),
        away_team_id: away,
        away_team_name: format!("Team {}", away),
        home_goals: hg,
        away_goals: ag,
        competition_code: "PL".to_string(),
    }
}

#[derive(Default)]
pub struct FakeSource {
    teams: HashMap<Competition, Vec<Team>>,
    matches: HashMap<TeamId, Vec<MatchRecord>>,
    match_error: Option<fn() -> Error>,
    queries: Arc<Mutex<Vec<MatchQuery>>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, competition: Competition, id: TeamId, name: &str) -> Self {
        self.teams.entry(competition).or_default().push(Team {
            id,
            name: name.to_string(),
            competition,
        });
        self
    }

    pub fn with_matches(mut self, team_id: TeamId, matches: Vec<MatchRecord>) -> Self {
        self.matches.insert(team_id, matches);
        self
    }

    pub fn failing_matches_with(mut self, error: fn() -> Error) -> Self {
        self.match_error = Some(error);
        self
    }

    pub fn recorded_queries(&self) -> Arc<Mutex<Vec<MatchQuery>>> {
        self.queries.clone()
    }
}

#[async_trait]
impl MatchDataSource for FakeSource {
    async fn list_teams(&self, competition: Competition) -> Result<Vec<Team>> {
        let mut teams = self.teams.get(&competition).cloned().unwrap_or_default();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    async fn fetch_recent_matches(&self, query: &MatchQuery) -> Result<Vec<MatchRecord>> {
        self.queries.lock().unwrap().push(*query);
        if let Some(error) = self.match_error {
            return Err(error());
        }
        let matches = self
            .matches
            .get(&query.team_id)
            .cloned()
            .unwrap_or_default();
        Ok(select_recent(matches, query.team_id, query.limit))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub struct FakeNarrator {
    reply: Option<String>,
}

impl FakeNarrator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl NarrativeGenerator for FakeNarrator {
    async fn generate(&self, _request: &NarrativeRequest) -> Result<Narrative> {
        match &self.reply {
            Some(text) => Ok(parse_narrative(text)),
            None => Err(Error::GenerationUnavailable("service down".to_string())),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}
