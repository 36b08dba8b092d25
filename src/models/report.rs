use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::competition::Competition;
use super::matches::{MatchCount, MatchRecord, Outcome};
use super::summary::ComparisonResult;
use super::team::TeamId;

/// What the user picked on the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchupSelection {
    pub competition_a: Competition,
    pub team_a: TeamId,
    pub competition_b: Competition,
    pub team_b: TeamId,
    #[serde(default)]
    pub match_count: Option<MatchCount>,
}

/// One line of a team's recent results, seen from that team's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentMatch {
    pub date: DateTime<Utc>,
    pub opponent: String,
    pub home: bool,
    pub goals_for: u32,
    pub goals_against: u32,
    pub outcome: Outcome,
    pub competition_code: String,
}

impl RecentMatch {
    pub fn from_record(record: &MatchRecord, team_id: TeamId) -> Option<Self> {
        let (goals_for, goals_against) = record.goals_for_team(team_id)?;
        Some(Self {
            date: record.date,
            opponent: record.opponent_of(team_id)?.to_string(),
            home: record.home_team_id == team_id,
            goals_for,
            goals_against,
            outcome: Outcome::from_score(goals_for, goals_against),
            competition_code: record.competition_code.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Narrative {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    /// Reply text as returned by the model.
    pub raw: String,
}

impl Narrative {
    pub fn is_structured(&self) -> bool {
        !self.insights.is_empty() || !self.recommendations.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NarrativeOutcome {
    Generated(Narrative),
    Unavailable { reason: String },
}

impl NarrativeOutcome {
    pub fn narrative(&self) -> Option<&Narrative> {
        match self {
            NarrativeOutcome::Generated(n) => Some(n),
            NarrativeOutcome::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub competition_a: Competition,
    pub competition_b: Competition,
    pub match_count: MatchCount,
    pub comparison: ComparisonResult,
    pub recent_matches_a: Vec<RecentMatch>,
    pub recent_matches_b: Vec<RecentMatch>,
    pub narrative: NarrativeOutcome,
    pub generated_at: DateTime<Utc>,
}
