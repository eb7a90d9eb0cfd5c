//! Guided focus sessions: planning, up to three work sessions, review.

use super::text::truncate_with_ellipsis;
use crate::domain::{ActionItem, FocusSession, Priority};

pub const PLANNING_SESSION: &str = "Planning & Understanding";
pub const REVIEW_SESSION: &str = "Review & Wrap Up";

const MAX_WORK_SESSIONS: usize = 3;
const SESSION_TASK_CHARS: usize = 40;
const STANDARD_BREAK: u32 = 5;
const LONG_BREAK: u32 = 10;

const PLANNING_INSTRUCTIONS: [&str; 5] = [
    "Find a quiet, comfortable space",
    "Read through all the information",
    "Identify the main tasks",
    "Note any questions or concerns",
    "Decide which task to start with",
];

const WORK_INSTRUCTIONS: [&str; 4] = [
    "Gather any materials you need",
    "Work at a steady pace",
    "Don't worry about perfection",
    "Save your progress regularly",
];

const REVIEW_INSTRUCTIONS: [&str; 5] = [
    "Check what you completed",
    "Review for any errors or missing items",
    "Celebrate your progress",
    "Note anything left to do",
    "Plan your next steps if needed",
];

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// Build the session plan for `items`. Always 2 + min(3, items.len()) sessions.
pub fn synthesize_focus_sessions(items: &[ActionItem]) -> Vec<FocusSession> {
    let work_items = &items[..items.len().min(MAX_WORK_SESSIONS)];
    let mut sessions = Vec::with_capacity(work_items.len() + 2);

    sessions.push(FocusSession {
        session_name: PLANNING_SESSION.to_string(),
        duration_minutes: if items.len() <= 2 { 10 } else { 15 },
        instructions: owned(&PLANNING_INSTRUCTIONS),
        break_minutes: STANDARD_BREAK,
    });

    for (idx, item) in work_items.iter().enumerate() {
        let is_last = idx + 1 == work_items.len();
        let mut instructions = vec![format!("Focus only on: {}", item.task)];
        instructions.extend(owned(&WORK_INSTRUCTIONS));
        sessions.push(FocusSession {
            session_name: format!(
                "Work Session {}: {}",
                idx + 1,
                truncate_with_ellipsis(&item.task, SESSION_TASK_CHARS, SESSION_TASK_CHARS)
            ),
            duration_minutes: if item.priority == Priority::High { 20 } else { 15 },
            instructions,
            break_minutes: if is_last { STANDARD_BREAK } else { LONG_BREAK },
        });
    }

    sessions.push(FocusSession {
        session_name: REVIEW_SESSION.to_string(),
        duration_minutes: 10,
        instructions: owned(&REVIEW_INSTRUCTIONS),
        break_minutes: STANDARD_BREAK,
    });

    sessions
}
