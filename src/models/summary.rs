use serde::{Deserialize, Serialize};

use super::matches::Outcome;
use super::team::TeamId;

/// Aggregate performance over a team's most recent matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamSummary {
    pub team_id: TeamId,
    pub team_name: String,
    pub matches_considered: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    /// Most recent first.
    pub form: Vec<Outcome>,
    /// 0.0 when no matches were considered.
    pub avg_goals_for: f64,
    pub avg_goals_against: f64,
}

impl TeamSummary {
    pub fn empty(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            matches_considered: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
            form: Vec::new(),
            avg_goals_for: 0.0,
            avg_goals_against: 0.0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn form_string(&self) -> String {
        self.form.iter().map(Outcome::letter).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// Head-to-head view of two summaries. Every delta is A minus B.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    pub team_a: TeamSummary,
    pub team_b: TeamSummary,
    pub goal_diff_delta: i64,
    pub points_delta: i64,
    pub goals_for_delta: i64,
    pub goals_against_delta: i64,
}

impl ComparisonResult {
    /// Side with more points over the window; `None` when level.
    pub fn form_leader(&self) -> Option<Side> {
        match self.points_delta.signum() {
            1 => Some(Side::A),
            -1 => Some(Side::B),
            _ => None,
        }
    }

    pub fn summary(&self, side: Side) -> &TeamSummary {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }
}
