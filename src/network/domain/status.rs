//! Operational status of a network.

use super::ParseNetworkStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status reported for a network.
///
/// The status is owned by the backing system: clients may filter on it,
/// but the update path never accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkStatus {
    /// The network is provisioned and forwarding.
    Active,
    /// The network is administratively or operationally down.
    Down,
    /// The network is still being provisioned.
    Build,
    /// Provisioning failed.
    Error,
}

impl NetworkStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Down => "DOWN",
            Self::Build => "BUILD",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NetworkStatus {
    type Error = ParseNetworkStatusError;

    fn try_from(value: &str) -> Result<Self, ParseNetworkStatusError> {
        let normalized = value.trim().to_ascii_uppercase();
        // Spelled with the enum name: `Self::Error` is ambiguous here
        // against the `TryFrom::Error` associated type.
        match normalized.as_str() {
            "ACTIVE" => Ok(NetworkStatus::Active),
            "DOWN" => Ok(NetworkStatus::Down),
            "BUILD" => Ok(NetworkStatus::Build),
            "ERROR" => Ok(NetworkStatus::Error),
            _ => Err(ParseNetworkStatusError(value.to_owned())),
        }
    }
}
