//! Infrastructure adapters. Implement outbound ports and expose the inbound HTTP surface.
//!
//! Structure generators, HTTP server. Map errors to DomainError.

pub mod ai;
pub mod http;
