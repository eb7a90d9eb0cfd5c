//! Application use cases. Orchestrate domain logic via ports.

pub mod assist_service;

pub use assist_service::AssistService;
