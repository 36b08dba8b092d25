use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The leagues available in the provider's free tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competition {
    #[serde(rename = "PL")]
    PremierLeague,
    #[serde(rename = "BL1")]
    Bundesliga,
    #[serde(rename = "SA")]
    SerieA,
    #[serde(rename = "PD")]
    LaLiga,
    #[serde(rename = "FL1")]
    Ligue1,
    #[serde(rename = "CL")]
    ChampionsLeague,
}

impl Competition {
    pub fn all() -> &'static [Competition] {
        &[
            Competition::PremierLeague,
            Competition::Bundesliga,
            Competition::SerieA,
            Competition::LaLiga,
            Competition::Ligue1,
            Competition::ChampionsLeague,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Competition::PremierLeague => "PL",
            Competition::Bundesliga => "BL1",
            Competition::SerieA => "SA",
            Competition::LaLiga => "PD",
            Competition::Ligue1 => "FL1",
            Competition::ChampionsLeague => "CL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Competition::PremierLeague => "Premier League (England)",
            Competition::Bundesliga => "Bundesliga (Germany)",
            Competition::SerieA => "Serie A (Italy)",
            Competition::LaLiga => "La Liga (Spain)",
            Competition::Ligue1 => "Ligue 1 (France)",
            Competition::ChampionsLeague => "Champions League",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::NotFound(format!("competition '{}'", code)))
    }
}

impl std::fmt::Display for Competition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Wire-friendly view of a competition for dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitionInfo {
    pub code: String,
    pub name: String,
}

impl From<Competition> for CompetitionInfo {
    fn from(competition: Competition) -> Self {
        Self {
            code: competition.code().to_string(),
            name: competition.display_name().to_string(),
        }
    }
}
