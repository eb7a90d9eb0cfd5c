//! Whole-text priority classification by keyword presence.

use crate::domain::Priority;

const HIGH_KEYWORDS: &[&str] = &["urgent", "asap", "immediately", "critical", "important"];
const LOW_KEYWORDS: &[&str] = &["when you can", "eventually", "optional", "if possible"];

/// Classify already-lowercased text. High wins over Low; Medium when neither set matches.
pub fn classify_priority(lowered: &str) -> Priority {
    if HIGH_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Priority::High
    } else if LOW_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Priority::Low
    } else {
        Priority::Medium
    }
}
