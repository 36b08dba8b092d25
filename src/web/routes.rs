use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::models::{
    AnalysisReport, Competition, CompetitionInfo, MatchCount, MatchupSelection, TeamId,
};
use crate::render::format_html;
use crate::web::error::AppError;
use crate::web::page::{render_page, FormValues, Output};
use crate::web::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let values = FormValues {
        match_count: state.pipeline.default_match_count(),
        ..Default::default()
    };
    Html(render_page(&values, &Output::Placeholder))
}

/// GET /api/competitions
pub async fn list_competitions() -> Json<Value> {
    let data: Vec<CompetitionInfo> = Competition::all()
        .iter()
        .copied()
        .map(CompetitionInfo::from)
        .collect();
    Json(json!({ "data": data }))
}

/// GET /api/competitions/{code}/teams
pub async fn list_teams(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> std::result::Result<Json<Value>, AppError> {
    let competition = Competition::from_code(&code)?;
    let teams = state.pipeline.source().list_teams(competition).await?;

    let count = teams.len();
    Ok(Json(json!({ "data": teams, "count": count })))
}

/// Raw JSON body of `POST /api/analyze`, validated by
/// [`into_selection`](Self::into_selection).
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub competition_a: String,
    pub team_a: TeamId,
    pub competition_b: String,
    pub team_b: TeamId,
    #[serde(default)]
    pub match_count: Option<u32>,
}

impl AnalyzeRequest {
    pub fn into_selection(self) -> Result<MatchupSelection> {
        Ok(MatchupSelection {
            competition_a: Competition::from_code(&self.competition_a)?,
            team_a: self.team_a,
            competition_b: Competition::from_code(&self.competition_b)?,
            team_b: self.team_b,
            match_count: self.match_count.map(MatchCount::new).transpose()?,
        })
    }
}

/// POST /api/analyze
pub async fn analyze_json(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> std::result::Result<Json<AnalysisReport>, AppError> {
    let Json(request) = body?;
    let selection = request.into_selection()?;
    let report = state.pipeline.analyze(&selection).await?;
    Ok(Json(report))
}

/// Raw form fields; every field may be blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub competition_a: String,
    #[serde(default)]
    pub team_a: String,
    #[serde(default)]
    pub competition_b: String,
    #[serde(default)]
    pub team_b: String,
    #[serde(default)]
    pub match_count: String,
}

impl AnalyzeForm {
    fn values(&self, default_count: MatchCount) -> FormValues {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        FormValues {
            competition_a: Competition::from_code(&self.competition_a).ok(),
            team_a: non_empty(&self.team_a),
            competition_b: Competition::from_code(&self.competition_b).ok(),
            team_b: non_empty(&self.team_b),
            match_count: self
                .match_count
                .trim()
                .parse()
                .map(MatchCount::clamped)
                .unwrap_or(default_count),
        }
    }

    pub fn into_selection(self) -> Result<MatchupSelection> {
        let (competition_a, team_a) = parse_side("A", &self.competition_a, &self.team_a)?;
        let (competition_b, team_b) = parse_side("B", &self.competition_b, &self.team_b)?;

        let match_count = match self.match_count.trim() {
            "" => None,
            raw => {
                let n: u32 = raw.parse().map_err(|_| {
                    Error::InvalidSelection(format!("'{}' is not a number of matches.", raw))
                })?;
                Some(MatchCount::new(n)?)
            }
        };

        Ok(MatchupSelection {
            competition_a,
            team_a,
            competition_b,
            team_b,
            match_count,
        })
    }
}

fn parse_side(label: &str, competition: &str, team: &str) -> Result<(Competition, TeamId)> {
    let missing = || {
        Error::InvalidSelection(format!(
            "Please select a league and team for Team {}.",
            label
        ))
    };

    if competition.trim().is_empty() || team.trim().is_empty() {
        return Err(missing());
    }

    let competition = Competition::from_code(competition)?;
    let team_id = team.trim().parse().map_err(|_| missing())?;
    Ok((competition, team_id))
}

/// POST /analyze
///
/// Always answers with a page; failures land in the output region.
pub async fn analyze_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let values = form.values(state.pipeline.default_match_count());

    let output = match form.into_selection() {
        Ok(selection) => match state.pipeline.analyze(&selection).await {
            Ok(report) => Output::Report(format_html(&report)),
            Err(e) => {
                tracing::warn!("Analysis failed: {}", e);
                Output::Error(e.user_message())
            }
        },
        Err(e) => Output::Error(e.user_message()),
    };

    Html(render_page(&values, &output))
}
