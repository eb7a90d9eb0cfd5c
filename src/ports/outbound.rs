//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ProcessedOutput};

/// Structure generator. Turns validated free-form text into the structured breakdown.
///
/// Two implementations exist: the deterministic heuristic pipeline and a model-backed
/// generator. The use case only sees this trait; `main` picks the implementation once.
#[async_trait::async_trait]
pub trait StructurePort: Send + Sync {
    /// Short backend name for logs ("heuristic", "openai").
    fn backend_name(&self) -> &'static str;

    /// Generate the breakdown for `text`. Input has already been validated by the caller.
    async fn generate_structure(&self, text: &str) -> Result<ProcessedOutput, DomainError>;
}
