//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here. Everything is built fresh per request and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner assigned to every heuristically extracted action item.
pub const DEFAULT_OWNER: &str = "User";

/// Urgency of the work described by one input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Lenient parse for model output ("high", "HIGH", "High" ...). Unknown values fall back to Medium.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized, human-readable due phrase ("By Friday", "In 2 days") or "Not specified".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(String);

impl Deadline {
    pub const NOT_SPECIFIED: &'static str = "Not specified";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn not_specified() -> Self {
        Self(Self::NOT_SPECIFIED.to_string())
    }

    pub fn is_specified(&self) -> bool {
        self.0 != Self::NOT_SPECIFIED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::not_specified()
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discrete task extracted from the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    pub priority: Priority,
    pub deadline: Deadline,
}

/// A bounded, timed unit of guided work, planning or review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    pub session_name: String,
    pub duration_minutes: u32,
    pub instructions: Vec<String>,
    pub break_minutes: u32,
}

/// Full structured breakdown returned for one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedOutput {
    pub simplified_text: String,
    pub audio_narration_script: String,
    pub visual_task_steps: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub guided_focus_sessions: Vec<FocusSession>,
}
