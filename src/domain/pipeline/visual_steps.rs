//! Numbered visual steps, one per meaningful sentence.

use super::text::char_len;

const MAX_SENTENCES: usize = 6;
const MIN_STEP_CHARS: usize = 10;

const FALLBACK_STEPS: [&str; 3] = [
    "Step 1: Read the information carefully",
    "Step 2: Identify what needs to be done",
    "Step 3: Complete each task one at a time",
];

/// Number the first sentences longer than 10 characters. Short ones are skipped and do not
/// consume a step number.
pub fn compose_visual_steps(sentences: &[String]) -> Vec<String> {
    let steps: Vec<String> = sentences
        .iter()
        .take(MAX_SENTENCES)
        .filter(|s| char_len(s) > MIN_STEP_CHARS)
        .enumerate()
        .map(|(i, s)| format!("Step {}: {}", i + 1, s))
        .collect();

    if steps.is_empty() {
        FALLBACK_STEPS.iter().map(|s| s.to_string()).collect()
    } else {
        steps
    }
}
