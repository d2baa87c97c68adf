//! Trellis: network resource lifecycle orchestration.
//!
//! This crate provides the core functionality for managing network
//! resources behind a REST surface: query-filtered, paginated reads,
//! provider-consensus-gated mutations, and transcription between the
//! external attribute-bag resource model and the internal persisted
//! schema.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (datastore, registries)
//!
//! # Modules
//!
//! - [`lifecycle`]: Resource-agnostic orchestration core (repository and
//!   extension-registry ports, consensus protocol, pagination, envelopes)
//! - [`network`]: The network resource: external model, typed filters,
//!   and the datastore adapter with its transcription layer

pub mod lifecycle;
pub mod network;
