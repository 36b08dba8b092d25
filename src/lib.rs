pub mod config;
pub mod error;
pub mod models;
pub mod football;
pub mod llm;
pub mod analysis;
pub mod render;
pub mod web;

#[cfg(test)]
mod testing;

pub use config::{Config, PipelineConfig};
pub use error::{Error, ErrorKind, Result};
pub use football::{FootballDataClient, MatchDataSource};
pub use llm::{ClaudeProvider, NarrativeGenerator};
pub use analysis::AnalysisPipeline;
