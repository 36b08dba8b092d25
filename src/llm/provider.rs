use async_trait::async_trait;

use crate::error::Result;
use crate::llm::prompts::NarrativeRequest;
use crate::models::Narrative;

/// Text-generation boundary. Implementations report every failure as
/// `Error::GenerationUnavailable`.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, request: &NarrativeRequest) -> Result<Narrative>;
    fn name(&self) -> &str;
}
