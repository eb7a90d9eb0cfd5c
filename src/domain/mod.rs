//! Core domain layer. No external I/O dependencies.
//!
//! Entities, errors and the heuristic extraction pipeline live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod pipeline;

pub use entities::{ActionItem, DEFAULT_OWNER, Deadline, FocusSession, Priority, ProcessedOutput};
pub use errors::{DomainError, ValidationError};
