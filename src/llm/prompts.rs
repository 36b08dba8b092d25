use serde::Serialize;

use crate::models::{Competition, ComparisonResult, TeamSummary};

pub const SYSTEM_PROMPT: &str = r#"You are a football analyst assistant. You receive pre-calculated statistics
about two teams' recent performances. All numerical calculations have already
been done. Your job is to interpret the data and provide actionable insights.

You will receive a JSON object with:
- team_a, team_b: each with team_name, competition and metrics
  (matches_played, wins, draws, losses, total_points, goals_scored,
  goals_conceded, avg_goals_scored, avg_goals_conceded, form with the most
  recent result first)
- deltas: team_a minus team_b for points, goal difference, goals scored and
  goals conceded

Respond with EXACTLY this format (no markdown code blocks):

INSIGHTS:
1. [Compare form and scoring ability]
2. [Defensive comparison]
3. [Overall prediction or key factor]

RECOMMENDATIONS:
1. [First tactical recommendation]
2. [Second tactical recommendation]
3. [Third tactical recommendation]

Rules:
- Keep each point to 1-2 sentences
- Reference actual numbers from the data
- Do not perform calculations, use only the provided metrics
- Do not add commentary before or after the required format"#;

#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub competition_a: Competition,
    pub competition_b: Competition,
    pub comparison: ComparisonResult,
}

#[derive(Serialize)]
struct PromptPayload<'a> {
    team_a: TeamPayload<'a>,
    team_b: TeamPayload<'a>,
    deltas: DeltaPayload,
}

#[derive(Serialize)]
struct TeamPayload<'a> {
    team_name: &'a str,
    competition: &'a str,
    metrics: MetricsPayload,
}

#[derive(Serialize)]
struct MetricsPayload {
    matches_played: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    total_points: u32,
    goals_scored: u32,
    goals_conceded: u32,
    avg_goals_scored: f64,
    avg_goals_conceded: f64,
    form: String,
}

#[derive(Serialize)]
struct DeltaPayload {
    points: i64,
    goal_difference: i64,
    goals_scored: i64,
    goals_conceded: i64,
}

impl<'a> TeamPayload<'a> {
    fn new(summary: &'a TeamSummary, competition: Competition) -> Self {
        Self {
            team_name: &summary.team_name,
            competition: competition.display_name(),
            metrics: MetricsPayload {
                matches_played: summary.matches_considered,
                wins: summary.wins,
                draws: summary.draws,
                losses: summary.losses,
                total_points: summary.points,
                goals_scored: summary.goals_for,
                goals_conceded: summary.goals_against,
                avg_goals_scored: summary.avg_goals_for,
                avg_goals_conceded: summary.avg_goals_against,
                form: summary.form_string(),
            },
        }
    }
}

impl NarrativeRequest {
    pub fn new(
        competition_a: Competition,
        competition_b: Competition,
        comparison: ComparisonResult,
    ) -> Self {
        Self {
            competition_a,
            competition_b,
            comparison,
        }
    }

    pub fn to_prompt(&self) -> String {
        let c = &self.comparison;
        let payload = PromptPayload {
            team_a: TeamPayload::new(&c.team_a, self.competition_a),
            team_b: TeamPayload::new(&c.team_b, self.competition_b),
            deltas: DeltaPayload {
                points: c.points_delta,
                goal_difference: c.goal_diff_delta,
                goals_scored: c.goals_for_delta,
                goals_conceded: c.goals_against_delta,
            },
        };

        // Serializing plain structs of numbers and strings cannot fail.
        let json = serde_json::to_string_pretty(&payload).unwrap_or_default();
        format!("Analyze this match data:\n{}", json)
    }
}
