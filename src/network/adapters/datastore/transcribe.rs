//! Transcription between the external network model and the persisted
//! schema.
//!
//! The two models disagree on field sets and nullability: the external
//! model distinguishes absent from null, the persisted schema only has
//! unset, identifiers are wrapped in [`Uid`] internally, and the
//! revision timestamp exists only internally. Transcription copies
//! present fields and leaves the rest unset in both directions, so
//! partial and delta objects survive the boundary without clobbering
//! unrelated fields.

use super::schema::{
    BandwidthLimitRecord, DscpMarkingRecord, MalformedIdError, NetworkRecord, Uid,
};
use crate::network::domain::{BandwidthLimitRule, DscpMarkingRule, Network};
use thiserror::Error;
use tracing::warn;

/// Errors raised while mapping between the external and persisted
/// models.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranscribeError {
    /// An identifier failed UUID coercion.
    #[error("{field}: {source}")]
    MalformedId {
        /// Field carrying the identifier.
        field: &'static str,
        /// The coercion failure.
        source: MalformedIdError,
    },

    /// A rule sub-object lacks its identifier or owner.
    #[error("{rule} rule is missing required field '{field}'")]
    IncompleteRule {
        /// Rule kind.
        rule: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },
}

/// Maps an external network onto the persisted schema.
///
/// Present attributes are copied; absent or explicitly-null ones are
/// left unset. An absent network identifier is flagged rather than
/// failed, since delta objects legitimately omit it. Rule sub-objects
/// are transcribed element-wise and must each carry their identifier
/// and owner; an absent rule collection stays absent, never empty.
///
/// # Errors
///
/// Returns [`TranscribeError`] when an identifier fails UUID coercion
/// or a rule sub-object lacks its identifier or owner.
pub fn to_record(network: &Network) -> Result<NetworkRecord, TranscribeError> {
    let uid = match network.id.as_deref() {
        Some(id) => Some(parse_uid("id", id)?),
        None => {
            warn!("transcribing a network without an identifier");
            None
        }
    };
    let tenant = network
        .tenant_id
        .value()
        .map(|tenant| parse_uid("tenant_id", tenant))
        .transpose()?;
    let bandwidth_limit_rules = network
        .bandwidth_limit_rules
        .value()
        .map(|rules| {
            rules
                .iter()
                .map(bandwidth_rule_to_record)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    let dscp_marking_rules = network
        .dscp_marking_rules
        .value()
        .map(|rules| {
            rules
                .iter()
                .map(dscp_rule_to_record)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    Ok(NetworkRecord {
        uid,
        tenant,
        name: network.name.value().cloned(),
        status: network.status.value().copied(),
        admin_state_up: network.admin_state_up.value().copied(),
        shared: network.shared.value().copied(),
        router_external: network.router_external.value().copied(),
        provider_network_type: network.provider_network_type.value().cloned(),
        provider_physical_network: network.provider_physical_network.value().cloned(),
        provider_segmentation_id: network.provider_segmentation_id.value().copied(),
        bandwidth_limit_rules,
        dscp_marking_rules,
        revised_at: None,
    })
}

/// Maps a persisted record back to the external model.
///
/// Unset fields are skipped, never defaulted to a sentinel. The
/// revision timestamp is datastore bookkeeping and never exported.
#[must_use]
pub fn from_record(record: &NetworkRecord) -> Network {
    Network {
        id: record.uid.map(|uid| uid.to_string()),
        tenant_id: record.tenant.map(|tenant| tenant.to_string()).into(),
        name: record.name.clone().into(),
        status: record.status.into(),
        admin_state_up: record.admin_state_up.into(),
        shared: record.shared.into(),
        router_external: record.router_external.into(),
        provider_network_type: record.provider_network_type.clone().into(),
        provider_physical_network: record.provider_physical_network.clone().into(),
        provider_segmentation_id: record.provider_segmentation_id.into(),
        bandwidth_limit_rules: record
            .bandwidth_limit_rules
            .as_ref()
            .map(|rules| rules.iter().map(bandwidth_rule_from_record).collect())
            .into(),
        dscp_marking_rules: record
            .dscp_marking_rules
            .as_ref()
            .map(|rules| rules.iter().map(dscp_rule_from_record).collect())
            .into(),
    }
}

fn bandwidth_rule_to_record(
    rule: &BandwidthLimitRule,
) -> Result<BandwidthLimitRecord, TranscribeError> {
    Ok(BandwidthLimitRecord {
        uid: required_uid("bandwidth limit", "id", rule.id.as_deref())?,
        tenant: required_uid("bandwidth limit", "tenant_id", rule.tenant_id.as_deref())?,
        max_kbps: rule.max_kbps,
        max_burst_kbps: rule.max_burst_kbps,
    })
}

fn bandwidth_rule_from_record(record: &BandwidthLimitRecord) -> BandwidthLimitRule {
    BandwidthLimitRule {
        id: Some(record.uid.to_string()),
        tenant_id: Some(record.tenant.to_string()),
        max_kbps: record.max_kbps,
        max_burst_kbps: record.max_burst_kbps,
    }
}

fn dscp_rule_to_record(rule: &DscpMarkingRule) -> Result<DscpMarkingRecord, TranscribeError> {
    Ok(DscpMarkingRecord {
        uid: required_uid("DSCP marking", "id", rule.id.as_deref())?,
        tenant: required_uid("DSCP marking", "tenant_id", rule.tenant_id.as_deref())?,
        dscp_mark: rule.dscp_mark,
    })
}

fn dscp_rule_from_record(record: &DscpMarkingRecord) -> DscpMarkingRule {
    DscpMarkingRule {
        id: Some(record.uid.to_string()),
        tenant_id: Some(record.tenant.to_string()),
        dscp_mark: record.dscp_mark,
    }
}

fn required_uid(
    rule: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<Uid, TranscribeError> {
    let raw = value.ok_or(TranscribeError::IncompleteRule { rule, field })?;
    parse_uid(field, raw)
}

fn parse_uid(field: &'static str, value: &str) -> Result<Uid, TranscribeError> {
    Uid::parse(value).map_err(|source| TranscribeError::MalformedId { field, source })
}
