//! Typed conjunctive filter for network list queries.

use super::{FilterParseError, Network, NetworkStatus};

/// Conjunctive equality filter over network attributes.
///
/// Every populated condition must match; conditions left unset never
/// constrain. Boolean- and status-valued parameters are parsed from
/// their query-string form before comparison, so filtering is typed
/// rather than stringly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkFilter {
    /// Match on identifier.
    pub id: Option<String>,
    /// Match on owning tenant.
    pub tenant_id: Option<String>,
    /// Match on name.
    pub name: Option<String>,
    /// Match on operational status.
    pub status: Option<NetworkStatus>,
    /// Match on administrative state.
    pub admin_state_up: Option<bool>,
    /// Match on the shared flag.
    pub shared: Option<bool>,
    /// Match on the external-routing flag.
    pub router_external: Option<bool>,
}

impl NetworkFilter {
    /// Builds a filter from raw query parameters.
    ///
    /// Unknown parameters never constrain and are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FilterParseError`] when a boolean or status parameter
    /// cannot be parsed from its string form.
    pub fn from_query<'a, I>(params: I) -> Result<Self, FilterParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();
        for (key, value) in params {
            match key {
                "id" => filter.id = Some(value.to_owned()),
                "tenant_id" => filter.tenant_id = Some(value.to_owned()),
                "name" => filter.name = Some(value.to_owned()),
                "status" => {
                    filter.status = Some(
                        NetworkStatus::try_from(value)
                            .map_err(|_| FilterParseError::new(key, value))?,
                    );
                }
                "admin_state_up" => filter.admin_state_up = Some(parse_bool(key, value)?),
                "shared" => filter.shared = Some(parse_bool(key, value)?),
                "router_external" => filter.router_external = Some(parse_bool(key, value)?),
                _ => {}
            }
        }
        Ok(filter)
    }

    /// Reports whether `network` satisfies every populated condition.
    #[must_use]
    pub fn matches(&self, network: &Network) -> bool {
        satisfied(self.id.as_ref(), network.id.as_ref())
            && satisfied(self.tenant_id.as_ref(), network.tenant_id.value())
            && satisfied(self.name.as_ref(), network.name.value())
            && satisfied(self.status.as_ref(), network.status.value())
            && satisfied(self.admin_state_up.as_ref(), network.admin_state_up.value())
            && satisfied(self.shared.as_ref(), network.shared.value())
            && satisfied(self.router_external.as_ref(), network.router_external.value())
    }
}

fn satisfied<T: PartialEq>(wanted: Option<&T>, actual: Option<&T>) -> bool {
    wanted.is_none_or(|value| actual == Some(value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, FilterParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FilterParseError::new(key, value)),
    }
}
