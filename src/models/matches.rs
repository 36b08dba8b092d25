use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::team::TeamId;
use crate::error::{Error, Result};

/// A finished match as reported by the stats provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub date: DateTime<Utc>,
    pub home_team_id: TeamId,
    pub home_team_name: String,
    pub away_team_id: TeamId,
    pub away_team_name: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub competition_code: String,
}

impl MatchRecord {
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Goals (for, against) from the point of view of `team_id`, or `None`
    /// if the team did not play in this match.
    pub fn goals_for_team(&self, team_id: TeamId) -> Option<(u32, u32)> {
        if self.home_team_id == team_id {
            Some((self.home_goals, self.away_goals))
        } else if self.away_team_id == team_id {
            Some((self.away_goals, self.home_goals))
        } else {
            None
        }
    }

    pub fn outcome_for(&self, team_id: TeamId) -> Option<Outcome> {
        self.goals_for_team(team_id)
            .map(|(scored, conceded)| Outcome::from_score(scored, conceded))
    }

    pub fn opponent_of(&self, team_id: TeamId) -> Option<&str> {
        if self.home_team_id == team_id {
            Some(&self.away_team_name)
        } else if self.away_team_id == team_id {
            Some(&self.home_team_name)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn from_score(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Number of recent matches to analyze, always within 3..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MatchCount(u32);

impl MatchCount {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 10;

    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidSelection(format!(
                "Number of matches must be between {} and {} (got {}).",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn clamped(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for MatchCount {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for MatchCount {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MatchCount> for u32 {
    fn from(count: MatchCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for MatchCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
