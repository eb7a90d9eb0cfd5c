//! Assist service. Validates raw text and delegates structuring to the configured generator.
//!
//! Coordinates between input validation (domain) and the structure port (heuristic or model).

use crate::domain::pipeline::text::truncate_with_ellipsis;
use crate::domain::pipeline::{
    MAX_ACTION_ITEMS, MAX_TASK_CHARS, PLANNING_SESSION, REVIEW_SESSION, TRUNCATED_TASK_CHARS,
    validate_input,
};
use crate::domain::{DomainError, ProcessedOutput};
use crate::ports::StructurePort;
use std::sync::Arc;
use tracing::{info, warn};

/// Planning + 1..=3 work sessions + review.
const MIN_SESSIONS: usize = 3;
const MAX_SESSIONS: usize = 5;

/// Service behind `POST /process`.
///
/// Holds no mutable state; safe to share across request handlers behind an `Arc`.
pub struct AssistService {
    generator: Arc<dyn StructurePort>,
}

impl AssistService {
    pub fn new(generator: Arc<dyn StructurePort>) -> Self {
        Self { generator }
    }

    pub fn backend_name(&self) -> &'static str {
        self.generator.backend_name()
    }

    /// Validate `text`, generate the breakdown, and enforce output invariants.
    ///
    /// Validation failures come back as `DomainError::Validation`; everything else is a
    /// processing failure.
    pub async fn process(&self, text: &str) -> Result<ProcessedOutput, DomainError> {
        if let Err(e) = validate_input(text) {
            info!(text_len = text.len(), reason = %e, "rejected input");
            return Err(e.into());
        }

        let mut output = self.generator.generate_structure(text).await?;
        Self::enforce_invariants(&mut output)?;

        info!(
            backend = self.backend_name(),
            text_len = text.len(),
            actions = output.action_items.len(),
            steps = output.visual_task_steps.len(),
            sessions = output.guided_focus_sessions.len(),
            "text processed"
        );
        Ok(output)
    }

    /// Cap and truncate action items, then reject outputs that break the plan shape. The
    /// heuristic pipeline always satisfies these; model output may not.
    fn enforce_invariants(output: &mut ProcessedOutput) -> Result<(), DomainError> {
        if output.action_items.len() > MAX_ACTION_ITEMS {
            warn!(
                actions = output.action_items.len(),
                "generator returned too many action items; truncating"
            );
            output.action_items.truncate(MAX_ACTION_ITEMS);
        }
        for item in &mut output.action_items {
            item.task = truncate_with_ellipsis(&item.task, MAX_TASK_CHARS, TRUNCATED_TASK_CHARS);
        }

        if output.action_items.is_empty() {
            return Err(Self::malformed("has no action_items"));
        }
        if output.visual_task_steps.is_empty() {
            return Err(Self::malformed("has no visual_task_steps"));
        }

        let sessions = &output.guided_focus_sessions;
        if !(MIN_SESSIONS..=MAX_SESSIONS).contains(&sessions.len()) {
            return Err(Self::malformed(&format!(
                "has {} guided_focus_sessions (expected {}-{})",
                sessions.len(),
                MIN_SESSIONS,
                MAX_SESSIONS
            )));
        }
        if sessions[0].session_name != PLANNING_SESSION {
            return Err(Self::malformed(&format!(
                "does not start with a \"{}\" session",
                PLANNING_SESSION
            )));
        }
        if sessions[sessions.len() - 1].session_name != REVIEW_SESSION {
            return Err(Self::malformed(&format!(
                "does not end with a \"{}\" session",
                REVIEW_SESSION
            )));
        }
        Ok(())
    }

    fn malformed(reason: &str) -> DomainError {
        DomainError::Internal(format!("generated output {}", reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::HeuristicAdapter;
    use crate::domain::pipeline;
    use crate::domain::{ActionItem, DEFAULT_OWNER, Deadline, FocusSession, Priority};

    /// Returns a fixed output regardless of input.
    struct FixedGenerator(ProcessedOutput);

    #[async_trait::async_trait]
    impl StructurePort for FixedGenerator {
        fn backend_name(&self) -> &'static str {
            "fixed"
        }

        async fn generate_structure(&self, _text: &str) -> Result<ProcessedOutput, DomainError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait::async_trait]
    impl StructurePort for FailingGenerator {
        fn backend_name(&self) -> &'static str {
            "failing"
        }

        async fn generate_structure(&self, _text: &str) -> Result<ProcessedOutput, DomainError> {
            Err(DomainError::Ai("upstream timeout".to_string()))
        }
    }

    fn item(n: usize) -> ActionItem {
        ActionItem {
            task: format!("Task {n}"),
            owner: DEFAULT_OWNER.to_string(),
            priority: Priority::Low,
            deadline: Deadline::not_specified(),
        }
    }

    #[tokio::test]
    async fn test_heuristic_process() {
        let service = AssistService::new(Arc::new(HeuristicAdapter::new()));
        let text = "You need to prepare a presentation by Friday. Include three main points.";

        let output = service.process(text).await.unwrap();

        assert_eq!(output, pipeline::process(text).unwrap());
        assert_eq!(service.backend_name(), "heuristic");
    }

    #[tokio::test]
    async fn test_validation_happens_before_generation() {
        let service = AssistService::new(Arc::new(FailingGenerator));

        let err = service.process("   ").await.unwrap_err();

        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_generator_error_propagates() {
        let service = AssistService::new(Arc::new(FailingGenerator));

        let err = service.process("Write the memo").await.unwrap_err();

        assert!(!err.is_client_error());
        assert!(err.to_string().contains("upstream timeout"));
    }

    #[tokio::test]
    async fn test_model_output_capped_at_five_items() {
        let mut canned = pipeline::generate_structure("Write the memo.");
        canned.action_items = (1..=8).map(item).collect();
        let service = AssistService::new(Arc::new(FixedGenerator(canned)));

        let output = service.process("anything").await.unwrap();

        assert_eq!(output.action_items.len(), 5);
        assert_eq!(output.action_items[4].task, "Task 5");
    }

    #[tokio::test]
    async fn test_model_output_without_action_items_rejected() {
        let mut canned = pipeline::generate_structure("Write the memo.");
        canned.action_items.clear();
        let service = AssistService::new(Arc::new(FixedGenerator(canned)));

        let err = service.process("anything").await.unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
        assert!(err.to_string().contains("action_items"));
    }

    #[tokio::test]
    async fn test_model_tasks_truncated_to_limit() {
        let mut canned = pipeline::generate_structure("Write the memo.");
        canned.action_items[0].task = "t".repeat(150);
        let service = AssistService::new(Arc::new(FixedGenerator(canned)));

        let output = service.process("anything").await.unwrap();

        assert_eq!(output.action_items[0].task, format!("{}...", "t".repeat(97)));
    }

    #[tokio::test]
    async fn test_model_output_with_too_few_sessions_rejected() {
        let mut canned = pipeline::generate_structure("Write the memo.");
        canned.guided_focus_sessions.truncate(2);
        let service = AssistService::new(Arc::new(FixedGenerator(canned)));

        let err = service.process("anything").await.unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
        assert!(err.to_string().contains("2 guided_focus_sessions"));
    }

    #[tokio::test]
    async fn test_model_output_with_too_many_sessions_rejected() {
        let mut canned = pipeline::generate_structure("Write the memo.");
        let work = canned.guided_focus_sessions[1].clone();
        for _ in 0..3 {
            canned.guided_focus_sessions.insert(1, work.clone());
        }
        let service = AssistService::new(Arc::new(FixedGenerator(canned)));

        let err = service.process("anything").await.unwrap_err();

        assert!(err.to_string().contains("6 guided_focus_sessions"));
    }

    #[tokio::test]
    async fn test_model_output_must_bracket_with_planning_and_review() {
        let odd = FocusSession {
            session_name: "Warm Up".to_string(),
            duration_minutes: 5,
            instructions: vec!["Stretch".to_string()],
            break_minutes: 0,
        };

        let mut no_planning = pipeline::generate_structure("Write the memo.");
        no_planning.guided_focus_sessions[0] = odd.clone();
        let service = AssistService::new(Arc::new(FixedGenerator(no_planning)));
        let err = service.process("anything").await.unwrap_err();
        assert!(err.to_string().contains("start with"));

        let mut no_review = pipeline::generate_structure("Write the memo.");
        let last = no_review.guided_focus_sessions.len() - 1;
        no_review.guided_focus_sessions[last] = odd;
        let service = AssistService::new(Arc::new(FixedGenerator(no_review)));
        let err = service.process("anything").await.unwrap_err();
        assert!(err.to_string().contains("end with"));
    }
}
