use crate::models::{MatchRecord, Outcome, TeamId, TeamSummary};

/// Folds a team's matches (most recent first) into a `TeamSummary`.
///
/// Each record is oriented by `team_id`, so the team may appear on either
/// side. Records the team did not play in are skipped.
pub fn aggregate(team_id: TeamId, team_name: &str, matches: &[MatchRecord]) -> TeamSummary {
    let mut summary = TeamSummary::empty(team_id, team_name);

    for record in matches {
        let Some((scored, conceded)) = record.goals_for_team(team_id) else {
            tracing::warn!(
                "Skipping match on {} not involving team {}",
                record.date.format("%Y-%m-%d"),
                team_id
            );
            continue;
        };

        let outcome = Outcome::from_score(scored, conceded);
        match outcome {
            Outcome::Win => summary.wins += 1,
            Outcome::Draw => summary.draws += 1,
            Outcome::Loss => summary.losses += 1,
        }

        summary.goals_for += scored;
        summary.goals_against += conceded;
        summary.points += outcome.points();
        summary.form.push(outcome);
    }

    summary.matches_considered = summary.form.len() as u32;
    summary.avg_goals_for = per_match(summary.goals_for, summary.matches_considered);
    summary.avg_goals_against = per_match(summary.goals_against, summary.matches_considered);

    summary
}

/// Two-decimal average; 0.0 when there are no matches.
fn per_match(total: u32, matches: u32) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    (total as f64 / matches as f64 * 100.0).round() / 100.0
}
