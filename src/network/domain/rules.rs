//! QoS rule sub-objects attached to a network.

use serde::{Deserialize, Serialize};

/// Bandwidth limit rule attached to a network.
///
/// Rules are sub-resources: each carries its own identifier and owning
/// tenant, and both must survive transcription to the persisted schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandwidthLimitRule {
    /// Rule identifier (UUID-shaped).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning tenant identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Maximum sustained rate in kbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_kbps: Option<u64>,
    /// Maximum burst size in kbps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_burst_kbps: Option<u64>,
}

/// DSCP marking rule attached to a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DscpMarkingRule {
    /// Rule identifier (UUID-shaped).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning tenant identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// DSCP mark applied to egress traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dscp_mark: Option<u8>,
}
