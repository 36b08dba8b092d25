pub mod client;
pub mod source;

pub use client::FootballDataClient;
pub use source::{resolve_team, MatchDataSource, MatchQuery};
