//! AI adapter module. Implements StructurePort.
//!
//! Provides the deterministic heuristic adapter and an OpenAI-compatible adapter.

pub mod heuristic_adapter;
pub mod openai_adapter;

pub use heuristic_adapter::HeuristicAdapter;
pub use openai_adapter::OpenAiAdapter;
