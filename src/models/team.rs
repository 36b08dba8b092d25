use serde::{Deserialize, Serialize};

use super::competition::Competition;

pub type TeamId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub competition: Competition,
}
