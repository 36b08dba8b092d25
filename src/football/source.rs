use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{Competition, MatchCount, MatchRecord, Team, TeamId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchQuery {
    pub team_id: TeamId,
    pub limit: MatchCount,
    pub competition: Option<Competition>,
}

impl MatchQuery {
    pub fn new(team_id: TeamId, limit: MatchCount) -> Self {
        Self {
            team_id,
            limit,
            competition: None,
        }
    }

    pub fn in_competition(mut self, competition: Competition) -> Self {
        self.competition = Some(competition);
        self
    }
}

/// Where finished matches and team catalogs come from.
#[async_trait]
pub trait MatchDataSource: Send + Sync {
    /// Teams of a competition, sorted by name.
    async fn list_teams(&self, competition: Competition) -> Result<Vec<Team>>;

    /// At most `query.limit` finished matches involving the team, most
    /// recent first. Fewer matches than requested is not an error.
    async fn fetch_recent_matches(&self, query: &MatchQuery) -> Result<Vec<MatchRecord>>;

    fn name(&self) -> &str;
}

/// Looks a team up in its competition's catalog.
pub async fn resolve_team(
    source: &dyn MatchDataSource,
    competition: Competition,
    team_id: TeamId,
) -> Result<Team> {
    let teams = source.list_teams(competition).await?;
    teams
        .into_iter()
        .find(|t| t.id == team_id)
        .ok_or_else(|| {
            Error::NotFound(format!(
                "team {} in {}",
                team_id,
                competition.display_name()
            ))
        })
}

/// Normalizes a provider match list: keeps matches the team played, newest
/// first, truncated to `limit`.
pub fn select_recent(
    mut matches: Vec<MatchRecord>,
    team_id: TeamId,
    limit: MatchCount,
) -> Vec<MatchRecord> {
    matches.retain(|m| m.involves(team_id));
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches.truncate(limit.get() as usize);
    matches
}
