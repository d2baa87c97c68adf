//! The network resource managed by the lifecycle core.
//!
//! Networks are tenant-owned connectivity resources exposed through the
//! REST surface. The module follows hexagonal architecture:
//!
//! - External model and typed filters in [`domain`]
//! - The datastore adapter, persisted schema, and transcription layer in
//!   [`adapters`]
//!
//! Orchestration itself is resource-agnostic and lives in
//! [`crate::lifecycle`]; [`NetworkLifecycleService`] pins it to the
//! network collection.

pub mod adapters;
pub mod domain;

#[cfg(test)]
mod tests;

/// Lifecycle orchestrator specialised to the network collection.
pub type NetworkLifecycleService<R, X> =
    crate::lifecycle::services::ResourceLifecycleService<domain::Network, R, X>;
