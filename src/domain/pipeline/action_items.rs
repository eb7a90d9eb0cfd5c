//! Action-item extraction: one item per sentence that contains an action verb.

use super::text::truncate_with_ellipsis;
use crate::domain::{ActionItem, DEFAULT_OWNER, Deadline, Priority};

/// Verbs scanned in this order; the first hit claims the sentence.
const ACTION_VERBS: &[&str] = &[
    "prepare", "create", "write", "send", "submit", "review", "complete", "update", "schedule",
    "call", "email", "meet", "present", "analyze",
];

pub const MAX_ACTION_ITEMS: usize = 5;
pub const MAX_TASK_CHARS: usize = 100;
pub const TRUNCATED_TASK_CHARS: usize = 97;
const FALLBACK_TASK: &str = "Complete the described work";

/// Extract action items from `sentences`. Never returns an empty list.
pub fn extract_action_items(
    sentences: &[String],
    priority: Priority,
    deadline: &Deadline,
) -> Vec<ActionItem> {
    let make_item = |task: String| ActionItem {
        task,
        owner: DEFAULT_OWNER.to_string(),
        priority,
        deadline: deadline.clone(),
    };

    let mut items: Vec<ActionItem> = sentences
        .iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            ACTION_VERBS.iter().any(|verb| lowered.contains(verb))
        })
        .map(|sentence| {
            make_item(truncate_with_ellipsis(
                sentence.trim(),
                MAX_TASK_CHARS,
                TRUNCATED_TASK_CHARS,
            ))
        })
        .collect();

    if items.is_empty() {
        let task = sentences
            .first()
            .map(|s| truncate_with_ellipsis(s, MAX_TASK_CHARS, TRUNCATED_TASK_CHARS))
            .unwrap_or_else(|| FALLBACK_TASK.to_string());
        items.push(make_item(task));
    }

    items.truncate(MAX_ACTION_ITEMS);
    items
}
