use crate::models::{ComparisonResult, TeamSummary};

pub fn compare(team_a: TeamSummary, team_b: TeamSummary) -> ComparisonResult {
    let goal_diff_delta = team_a.goal_difference() - team_b.goal_difference();
    let points_delta = team_a.points as i64 - team_b.points as i64;
    let goals_for_delta = team_a.goals_for as i64 - team_b.goals_for as i64;
    let goals_against_delta = team_a.goals_against as i64 - team_b.goals_against as i64;

    ComparisonResult {
        team_a,
        team_b,
        goal_diff_delta,
        points_delta,
        goals_for_delta,
        goals_against_delta,
    }
}
