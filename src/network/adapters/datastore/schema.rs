//! Internal persisted schema for the network collection.
//!
//! The persisted schema diverges from the external model on purpose:
//! identifiers are wrapped in the [`Uid`] value type, there is no
//! absent/null split (an unset field is simply absent), and the store
//! keeps revision bookkeeping the external model never sees.

use crate::network::domain::NetworkStatus;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Identifier value type used throughout the persisted schema.
///
/// External identifiers travel as UUID-shaped strings; the schema wraps
/// them so malformed identifiers are rejected at the mapping boundary
/// instead of leaking into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid(Uuid);

impl Uid {
    /// Coerces an external identifier string into the value type.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedIdError`] when the string is not a UUID.
    pub fn parse(value: &str) -> Result<Self, MalformedIdError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| MalformedIdError(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error raised when an external identifier fails UUID coercion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed identifier: '{0}'")]
pub struct MalformedIdError(pub String);

/// Persisted form of a bandwidth limit rule.
///
/// Sub-records always carry their own identifier and owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandwidthLimitRecord {
    /// Rule identifier.
    pub uid: Uid,
    /// Owning tenant.
    pub tenant: Uid,
    /// Maximum sustained rate in kbps.
    pub max_kbps: Option<u64>,
    /// Maximum burst size in kbps.
    pub max_burst_kbps: Option<u64>,
}

/// Persisted form of a DSCP marking rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DscpMarkingRecord {
    /// Rule identifier.
    pub uid: Uid,
    /// Owning tenant.
    pub tenant: Uid,
    /// DSCP mark applied to egress traffic.
    pub dscp_mark: Option<u8>,
}

/// Persisted form of a network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkRecord {
    /// Record key. Optional so partial transcriptions can exist; the
    /// store itself refuses to persist a record without one.
    pub uid: Option<Uid>,
    /// Owning tenant.
    pub tenant: Option<Uid>,
    /// Human-readable name.
    pub name: Option<String>,
    /// Operational status.
    pub status: Option<NetworkStatus>,
    /// Administrative up/down flag.
    pub admin_state_up: Option<bool>,
    /// Shared-across-tenants flag.
    pub shared: Option<bool>,
    /// External-routing flag.
    pub router_external: Option<bool>,
    /// Provider network type.
    pub provider_network_type: Option<String>,
    /// Physical provider network name.
    pub provider_physical_network: Option<String>,
    /// Provider segmentation identifier.
    pub provider_segmentation_id: Option<u32>,
    /// Attached bandwidth limit rules; absent is not the same as empty.
    pub bandwidth_limit_rules: Option<Vec<BandwidthLimitRecord>>,
    /// Attached DSCP marking rules; absent is not the same as empty.
    pub dscp_marking_rules: Option<Vec<DscpMarkingRecord>>,
    /// Last revision timestamp, stamped by the store and never exported
    /// through transcription.
    pub revised_at: Option<DateTime<Utc>>,
}
