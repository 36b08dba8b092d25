pub mod provider;
pub mod claude;
pub mod prompts;
pub mod parser;

pub use provider::NarrativeGenerator;
pub use claude::ClaudeProvider;
pub use prompts::NarrativeRequest;
pub use parser::parse_narrative;
