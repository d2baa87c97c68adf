//! Adapter implementations for the network resource.
//!
//! The datastore adapter implements the repository port against a keyed
//! store holding the internal persisted schema, transcribing to and from
//! the external model at the boundary.

pub mod datastore;
