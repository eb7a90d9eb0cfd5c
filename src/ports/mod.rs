//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure (structure generators)

pub mod outbound;

pub use outbound::StructurePort;
