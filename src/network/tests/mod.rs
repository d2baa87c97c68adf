//! Unit tests for the network resource.
//!
//! Organised by layer: domain validation and filtering, transcription
//! round-trips, and full orchestration through the in-memory store.
