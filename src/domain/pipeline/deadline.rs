//! Deadline detection. Ordered pattern families over the lowercased text.
//!
//! The first family (in declaration order) that matches anywhere in the text wins, even when a
//! later family matches earlier in the text. "tomorrow by friday" resolves to "By Friday".

use super::text::capitalize;
use crate::domain::Deadline;
use regex::{Captures, Regex};
use std::sync::OnceLock;

type Formatter = fn(&Captures<'_>) -> String;

/// Pattern families in priority order.
const DEADLINE_PATTERNS: &[(&str, Formatter)] = &[
    (
        r"by\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
        by_weekday,
    ),
    (r"by\s+(\w+\s+\d+)", by_date),
    (r"(tomorrow|today|tonight)", relative_day),
    (r"in\s+(\d+)\s+(day|week|hour)", in_units),
    (r"(\d+)\s+(am|pm)", clock_time),
];

fn by_weekday(c: &Captures<'_>) -> String {
    format!("By {}", capitalize(&c[1]))
}

fn by_date(c: &Captures<'_>) -> String {
    format!("By {}", &c[1])
}

fn relative_day(c: &Captures<'_>) -> String {
    capitalize(&c[1])
}

fn in_units(c: &Captures<'_>) -> String {
    format!("In {} {}s", &c[1], &c[2])
}

fn clock_time(c: &Captures<'_>) -> String {
    format!("By {} {}", &c[1], c[2].to_uppercase())
}

fn compiled_patterns() -> &'static [(Regex, Formatter)] {
    static RE: OnceLock<Vec<(Regex, Formatter)>> = OnceLock::new();
    RE.get_or_init(|| {
        DEADLINE_PATTERNS
            .iter()
            .map(|(pattern, fmt)| {
                (
                    Regex::new(pattern).expect("deadline pattern is a valid regex"),
                    *fmt,
                )
            })
            .collect()
    })
}

/// Detect the deadline mentioned in `text`, or "Not specified".
pub fn extract_deadline(text: &str) -> Deadline {
    let lowered = text.to_lowercase();
    compiled_patterns()
        .iter()
        .find_map(|(re, fmt)| re.captures(&lowered).map(|caps| Deadline::new(fmt(&caps))))
        .unwrap_or_else(Deadline::not_specified)
}
