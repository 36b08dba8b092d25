//! Response shapes of the football-data.org v4 API. Only the fields the
//! analyzer reads are declared; everything else is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::competition::Competition;
use super::matches::MatchRecord;
use super::team::{Team, TeamId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<ApiTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTeam {
    pub id: TeamId,
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
}

impl ApiTeam {
    pub fn into_team(self, competition: Competition) -> Team {
        Team {
            id: self.id,
            name: self.name,
            competition,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<ApiMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMatch {
    #[serde(rename = "utcDate")]
    pub utc_date: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub competition: Option<ApiCompetitionRef>,
    #[serde(rename = "homeTeam")]
    pub home_team: ApiTeamRef,
    #[serde(rename = "awayTeam")]
    pub away_team: ApiTeamRef,
    pub score: ApiScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCompetitionRef {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTeamRef {
    pub id: Option<TeamId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiScore {
    #[serde(rename = "fullTime")]
    pub full_time: ApiScoreLine,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiScoreLine {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

impl ApiMatch {
    /// Converts to a `MatchRecord`. Matches without a full-time score or
    /// without team ids are dropped.
    pub fn into_record(self) -> Option<MatchRecord> {
        let home_goals = self.score.full_time.home?;
        let away_goals = self.score.full_time.away?;
        let home_team_id = self.home_team.id?;
        let away_team_id = self.away_team.id?;

        Some(MatchRecord {
            date: self.utc_date,
            home_team_id,
            home_team_name: self.home_team.name.unwrap_or_else(|| "Unknown".to_string()),
            away_team_id,
            away_team_name: self.away_team.name.unwrap_or_else(|| "Unknown".to_string()),
            home_goals,
            away_goals,
            competition_code: self
                .competition
                .and_then(|c| c.code)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "filters": {"status": ["FINISHED"]},
        "resultSet": {"count": 2},
        "matches": [
            {
                "id": 1,
                "utcDate": "2024-04-14T15:30:00Z",
                "status": "FINISHED",
                "competition": {"id": 2021, "code": "PL", "name": "Premier League"},
                "homeTeam": {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal"},
                "awayTeam": {"id": 58, "name": "Aston Villa FC"},
                "score": {"winner": "AWAY_TEAM", "fullTime": {"home": 0, "away": 2}}
            },
            {
                "id": 2,
                "utcDate": "2024-04-20T11:00:00Z",
                "status": "POSTPONED",
                "competition": {"id": 2021, "code": "PL"},
                "homeTeam": {"id": 39, "name": "Wolverhampton"},
                "awayTeam": {"id": 57, "name": "Arsenal FC"},
                "score": {"winner": null, "fullTime": {"home": null, "away": null}}
            }
        ]
    }"#;

    #[test]
    fn test_parse_matches_response() {
        let response: MatchesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.matches.len(), 2);

        let records: Vec<_> = response
            .matches
            .into_iter()
            .filter_map(ApiMatch::into_record)
            .collect();

        assert_eq!(records.len(), 1);
        let first = &records[0];
        assert_eq!(first.home_team_id, 57);
        assert_eq!(first.away_team_name, "Aston Villa FC");
        assert_eq!((first.home_goals, first.away_goals), (0, 2));
        assert_eq!(first.competition_code, "PL");
    }

    #[test]
    fn test_parse_teams_response() {
        let json = r#"{"count": 1, "teams": [{"id": 86, "name": "Real Madrid CF", "tla": "RMA"}]}"#;
        let response: TeamsResponse = serde_json::from_str(json).unwrap();
        let team = response.teams[0].clone().into_team(Competition::LaLiga);
        assert_eq!(team.id, 86);
        assert_eq!(team.competition, Competition::LaLiga);
    }
}
