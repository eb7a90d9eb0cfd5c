//! Heuristic structure adapter. Deterministic, no API calls.
//!
//! Used whenever no AI API key is configured. Wraps the pure domain pipeline.

use crate::domain::pipeline;
use crate::domain::{DomainError, ProcessedOutput};
use crate::ports::StructurePort;
use tracing::debug;

/// Rule-based stand-in for a model-backed generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicAdapter;

impl HeuristicAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl StructurePort for HeuristicAdapter {
    fn backend_name(&self) -> &'static str {
        "heuristic"
    }

    async fn generate_structure(&self, text: &str) -> Result<ProcessedOutput, DomainError> {
        let output = pipeline::generate_structure(text);
        debug!(
            text_len = text.len(),
            actions = output.action_items.len(),
            steps = output.visual_task_steps.len(),
            "heuristic structure generated"
        );
        Ok(output)
    }
}
