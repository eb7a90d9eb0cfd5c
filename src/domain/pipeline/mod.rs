//! Deterministic text-to-structure pipeline.
//!
//! Every stage is a pure function with a total fallback, so once the input passes validation the
//! pipeline cannot fail. Stages run in a fixed order: deadline, priority and action items first,
//! then the presentation stages that consume them.

pub mod action_items;
pub mod deadline;
pub mod focus_sessions;
pub mod narration;
pub mod priority;
pub mod simplify;
pub mod text;
pub mod visual_steps;

pub use action_items::{
    MAX_ACTION_ITEMS, MAX_TASK_CHARS, TRUNCATED_TASK_CHARS, extract_action_items,
};
pub use deadline::extract_deadline;
pub use focus_sessions::{PLANNING_SESSION, REVIEW_SESSION, synthesize_focus_sessions};
pub use narration::compose_audio_script;
pub use priority::classify_priority;
pub use simplify::simplify_text;
pub use text::split_sentences;
use text::{char_len, is_blank};
pub use visual_steps::compose_visual_steps;

use crate::domain::{DomainError, ProcessedOutput, ValidationError};

/// Maximum accepted input length, in characters, before trimming.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Reject empty/whitespace-only input and input longer than [`MAX_INPUT_CHARS`].
pub fn validate_input(text: &str) -> Result<(), ValidationError> {
    if is_blank(text) {
        return Err(ValidationError::Empty);
    }
    if char_len(text) > MAX_INPUT_CHARS {
        return Err(ValidationError::TooLong {
            max: MAX_INPUT_CHARS,
        });
    }
    Ok(())
}

/// Run the heuristic pipeline on `text`. Total: any string yields a well-formed output.
pub fn generate_structure(text: &str) -> ProcessedOutput {
    let sentences = split_sentences(text);
    let lowered = text.to_lowercase();

    let deadline = extract_deadline(text);
    let priority = classify_priority(&lowered);
    let action_items = extract_action_items(&sentences, priority, &deadline);

    let simplified_text = simplify_text(&sentences);
    let audio_narration_script = compose_audio_script(&simplified_text, &deadline);
    let visual_task_steps = compose_visual_steps(&sentences);
    let guided_focus_sessions = synthesize_focus_sessions(&action_items);

    ProcessedOutput {
        simplified_text,
        audio_narration_script,
        visual_task_steps,
        action_items,
        guided_focus_sessions,
    }
}

/// Validate, then run the heuristic pipeline.
pub fn process(text: &str) -> Result<ProcessedOutput, DomainError> {
    validate_input(text)?;
    Ok(generate_structure(text))
}
