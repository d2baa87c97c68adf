//! Extension registry port and the provider capability interface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Status code returned by a provider approval hook.
///
/// Codes inside the inclusive `[200, 299]` range approve the transition;
/// anything else is an authoritative veto the orchestrator propagates
/// verbatim to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookStatus(u16);

impl HookStatus {
    /// Generic approval.
    pub const OK: Self = Self(200);

    /// Creates a status from a raw transport-style code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Reports whether the code approves the transition.
    #[must_use]
    pub const fn is_success(self) -> bool {
        200 <= self.0 && self.0 <= 299
    }
}

impl fmt::Display for HookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate-and-observe hooks contributed by an extension module for one
/// resource type.
///
/// Approval hooks default to approving and notifications to no-ops, so a
/// provider implements only the transitions it cares about. Notification
/// hooks run after the mutation has committed; they return nothing and
/// cannot veto.
#[async_trait]
pub trait LifecycleExtension<T: Sync>: Send + Sync {
    /// Approves or vetoes creation of `candidate`.
    async fn can_create(&self, candidate: &T) -> HookStatus {
        let _ = candidate;
        HookStatus::OK
    }

    /// Approves or vetoes applying `delta` to the stored `current`.
    async fn can_update(&self, delta: &T, current: &T) -> HookStatus {
        let _ = (delta, current);
        HookStatus::OK
    }

    /// Approves or vetoes removal of `current`.
    async fn can_delete(&self, current: &T) -> HookStatus {
        let _ = current;
        HookStatus::OK
    }

    /// Observes a committed creation.
    async fn created(&self, resource: &T) {
        let _ = resource;
    }

    /// Observes a committed update, receiving the post-update resource.
    async fn updated(&self, resource: &T) {
        let _ = resource;
    }

    /// Observes a committed deletion, receiving the pre-delete snapshot.
    async fn deleted(&self, resource: &T) {
        let _ = resource;
    }
}

/// Call-time discovery of the providers registered for one resource type.
///
/// `None` means the discovery mechanism itself is unreachable;
/// `Some` carries the providers in registration order, possibly empty.
/// The two are distinct failure signals and must never be collapsed. The
/// set is re-discovered on every call and not assumed stable between
/// calls.
pub trait ExtensionRegistry<T: Sync>: Send + Sync {
    /// Returns the providers currently registered for `T`.
    fn lookup(&self) -> Option<Vec<Arc<dyn LifecycleExtension<T>>>>;
}
