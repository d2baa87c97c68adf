//! Resource-agnostic lifecycle orchestration core.
//!
//! Implements the CRUD lifecycle shared by every REST-managed resource
//! collection: query/filter/paginate on read, provider-consensus-gated
//! mutation on write, and post-commit notification fan-out. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
