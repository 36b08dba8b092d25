use std::sync::Arc;

use chrono::Utc;

use crate::analysis::aggregator::aggregate;
use crate::analysis::comparator::compare;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::football::{resolve_team, MatchDataSource, MatchQuery};
use crate::llm::{NarrativeGenerator, NarrativeRequest};
use crate::models::{
    AnalysisReport, Competition, MatchCount, MatchRecord, MatchupSelection, NarrativeOutcome,
    RecentMatch, Team, TeamId,
};

/// Fetch, aggregate, compare and narrate one matchup. Holds no state that
/// outlives a call to [`analyze`](Self::analyze).
pub struct AnalysisPipeline {
    source: Arc<dyn MatchDataSource>,
    narrator: Arc<dyn NarrativeGenerator>,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    pub fn new(
        source: impl MatchDataSource + 'static,
        narrator: impl NarrativeGenerator + 'static,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source: Arc::new(source),
            narrator: Arc::new(narrator),
            config,
        }
    }

    pub fn source(&self) -> &dyn MatchDataSource {
        self.source.as_ref()
    }

    pub fn default_match_count(&self) -> MatchCount {
        self.config.default_match_count
    }

    pub async fn analyze(&self, selection: &MatchupSelection) -> Result<AnalysisReport> {
        let limit = selection
            .match_count
            .unwrap_or(self.config.default_match_count);

        // Step 1: Resolve both teams and fetch their matches concurrently
        tracing::info!(
            "Analyzing team {} ({}) vs team {} ({}) over {} matches",
            selection.team_a,
            selection.competition_a.code(),
            selection.team_b,
            selection.competition_b.code(),
            limit
        );
        let ((team_a, matches_a), (team_b, matches_b)) = futures::try_join!(
            self.team_matches(selection.competition_a, selection.team_a, limit),
            self.team_matches(selection.competition_b, selection.team_b, limit),
        )?;

        // Step 2: Aggregate each side
        let summary_a = aggregate(team_a.id, &team_a.name, &matches_a);
        let summary_b = aggregate(team_b.id, &team_b.name, &matches_b);
        tracing::debug!(
            "{}: {} pts ({}), {}: {} pts ({})",
            summary_a.team_name,
            summary_a.points,
            summary_a.form_string(),
            summary_b.team_name,
            summary_b.points,
            summary_b.form_string()
        );

        // Step 3: Compare
        let comparison = compare(summary_a, summary_b);

        // Step 4: Narrative, degrading to numbers only on failure
        let request = NarrativeRequest::new(
            selection.competition_a,
            selection.competition_b,
            comparison.clone(),
        );
        let narrative = self.narrate(&request).await;

        Ok(AnalysisReport {
            competition_a: selection.competition_a,
            competition_b: selection.competition_b,
            match_count: limit,
            comparison,
            recent_matches_a: recent_view(&matches_a, team_a.id),
            recent_matches_b: recent_view(&matches_b, team_b.id),
            narrative,
            generated_at: Utc::now(),
        })
    }

    async fn team_matches(
        &self,
        competition: Competition,
        team_id: TeamId,
        limit: MatchCount,
    ) -> Result<(Team, Vec<MatchRecord>)> {
        let team = resolve_team(self.source.as_ref(), competition, team_id).await?;

        let mut query = MatchQuery::new(team.id, limit);
        if self.config.restrict_to_competition {
            query = query.in_competition(competition);
        }

        let matches = self.source.fetch_recent_matches(&query).await?;
        if matches.len() < limit.get() as usize {
            tracing::info!(
                "Only {} of {} requested matches available for {} from {}",
                matches.len(),
                limit,
                team.name,
                self.source.name()
            );
        }

        Ok((team, matches))
    }

    async fn narrate(&self, request: &NarrativeRequest) -> NarrativeOutcome {
        match self.narrator.generate(request).await {
            Ok(narrative) => NarrativeOutcome::Generated(narrative),
            Err(e) => {
                tracing::warn!("{} narrative failed, showing numbers only: {}", self.narrator.name(), e);
                NarrativeOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn recent_view(matches: &[MatchRecord], team_id: TeamId) -> Vec<RecentMatch> {
    matches
        .iter()
        .filter_map(|m| RecentMatch::from_record(m, team_id))
        .collect()
}
