//! External attribute-bag model for the network resource.

use super::{BandwidthLimitRule, DscpMarkingRule, NetworkFilter, NetworkStatus};
use crate::lifecycle::domain::{Presence, Resource};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// External representation of a network.
///
/// A network is an attribute bag: apart from the identifier every
/// attribute is optional, and an attribute that was never mentioned
/// ([`Presence::Absent`]) is distinct from one explicitly set to null.
/// Partial instances are legal and are how update deltas travel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Stable unique identifier (UUID-shaped).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning tenant identifier.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub tenant_id: Presence<String>,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub name: Presence<String>,
    /// Operational status, owned by the backing system.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub status: Presence<NetworkStatus>,
    /// Administrative up/down flag.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub admin_state_up: Presence<bool>,
    /// Whether the network is shared across tenants.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub shared: Presence<bool>,
    /// Whether the network provides external routing.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub router_external: Presence<bool>,
    /// Provider network type (e.g. `vlan`, `vxlan`).
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub provider_network_type: Presence<String>,
    /// Physical provider network name.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub provider_physical_network: Presence<String>,
    /// Provider segmentation identifier.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub provider_segmentation_id: Presence<u32>,
    /// Attached bandwidth limit rules.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub bandwidth_limit_rules: Presence<Vec<BandwidthLimitRule>>,
    /// Attached DSCP marking rules.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub dscp_marking_rules: Presence<Vec<DscpMarkingRule>>,
}

impl Network {
    /// Attributes a client may never touch once the network exists.
    pub const IMMUTABLE_FIELDS: &'static [&'static str] = &["id", "tenant_id", "status"];

    /// Creates an empty network carrying only an identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Merges the client-supplied attributes of `delta` into this
    /// instance.
    ///
    /// Field-level, not replacement: a value overwrites, an explicit
    /// null clears, an absent attribute leaves the stored value
    /// untouched. The identifier is never merged.
    pub fn merge(&mut self, delta: Self) {
        delta.tenant_id.apply_to(&mut self.tenant_id);
        delta.name.apply_to(&mut self.name);
        delta.status.apply_to(&mut self.status);
        delta.admin_state_up.apply_to(&mut self.admin_state_up);
        delta.shared.apply_to(&mut self.shared);
        delta.router_external.apply_to(&mut self.router_external);
        delta
            .provider_network_type
            .apply_to(&mut self.provider_network_type);
        delta
            .provider_physical_network
            .apply_to(&mut self.provider_physical_network);
        delta
            .provider_segmentation_id
            .apply_to(&mut self.provider_segmentation_id);
        delta
            .bandwidth_limit_rules
            .apply_to(&mut self.bandwidth_limit_rules);
        delta
            .dscp_marking_rules
            .apply_to(&mut self.dscp_marking_rules);
    }
}

impl Resource for Network {
    type Filter = NetworkFilter;

    const COLLECTION: &'static str = "network";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn apply_defaults(&mut self) {
        if self.id.is_none() {
            self.id = Some(Uuid::new_v4().to_string());
        }
        self.status.default_to(NetworkStatus::Active);
        self.admin_state_up.default_to(true);
        self.shared.default_to(false);
        self.router_external.default_to(false);
    }

    fn matches(&self, filter: &NetworkFilter) -> bool {
        filter.matches(self)
    }

    fn project(&self, fields: &[String]) -> Self {
        let mut narrowed = Self {
            id: self.id.clone(),
            ..Self::default()
        };
        for field in fields {
            match field.as_str() {
                "tenant_id" => narrowed.tenant_id = self.tenant_id.clone(),
                "name" => narrowed.name = self.name.clone(),
                "status" => narrowed.status = self.status,
                "admin_state_up" => narrowed.admin_state_up = self.admin_state_up,
                "shared" => narrowed.shared = self.shared,
                "router_external" => narrowed.router_external = self.router_external,
                "provider_network_type" => {
                    narrowed.provider_network_type = self.provider_network_type.clone();
                }
                "provider_physical_network" => {
                    narrowed.provider_physical_network = self.provider_physical_network.clone();
                }
                "provider_segmentation_id" => {
                    narrowed.provider_segmentation_id = self.provider_segmentation_id;
                }
                "bandwidth_limit_rules" => {
                    narrowed.bandwidth_limit_rules = self.bandwidth_limit_rules.clone();
                }
                "dscp_marking_rules" => {
                    narrowed.dscp_marking_rules = self.dscp_marking_rules.clone();
                }
                _ => {}
            }
        }
        narrowed
    }

    fn has_field(&self, field: &str) -> bool {
        match field {
            "id" => self.id.is_some(),
            "tenant_id" => self.tenant_id.is_set(),
            "name" => self.name.is_set(),
            "status" => self.status.is_set(),
            "admin_state_up" => self.admin_state_up.is_set(),
            "shared" => self.shared.is_set(),
            "router_external" => self.router_external.is_set(),
            "provider_network_type" => self.provider_network_type.is_set(),
            "provider_physical_network" => self.provider_physical_network.is_set(),
            "provider_segmentation_id" => self.provider_segmentation_id.is_set(),
            "bandwidth_limit_rules" => self.bandwidth_limit_rules.is_set(),
            "dscp_marking_rules" => self.dscp_marking_rules.is_set(),
            _ => false,
        }
    }
}
