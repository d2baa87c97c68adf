//! In-process extension registry adapter.

use crate::lifecycle::ports::{ExtensionRegistry, LifecycleExtension};
use std::sync::{Arc, RwLock};

/// Thread-safe in-process provider registry for one resource type.
///
/// Providers are returned in registration order. A registry can be
/// detached to model the discovery mechanism itself being unreachable,
/// which lookups report as `None` rather than an empty provider list.
pub struct StaticExtensionRegistry<T> {
    state: Arc<RwLock<RegistryState<T>>>,
}

enum RegistryState<T> {
    Reachable(Vec<Arc<dyn LifecycleExtension<T>>>),
    Unreachable,
}

impl<T: Sync> StaticExtensionRegistry<T> {
    /// Creates an empty, reachable registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState::Reachable(Vec::new()))),
        }
    }

    /// Creates a registry whose lookups report discovery as unreachable.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState::Unreachable)),
        }
    }

    /// Appends a provider to the registration order.
    ///
    /// Registering against a detached registry re-attaches it.
    pub fn register(&self, provider: Arc<dyn LifecycleExtension<T>>) {
        if let Ok(mut state) = self.state.write() {
            match &mut *state {
                RegistryState::Reachable(providers) => providers.push(provider),
                RegistryState::Unreachable => *state = RegistryState::Reachable(vec![provider]),
            }
        }
    }

    /// Detaches the registry, making subsequent lookups fail.
    pub fn detach(&self) {
        if let Ok(mut state) = self.state.write() {
            *state = RegistryState::Unreachable;
        }
    }
}

impl<T: Sync> Default for StaticExtensionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StaticExtensionRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Sync> ExtensionRegistry<T> for StaticExtensionRegistry<T> {
    fn lookup(&self) -> Option<Vec<Arc<dyn LifecycleExtension<T>>>> {
        // A poisoned lock means discovery is unreachable, not empty.
        let state = self.state.read().ok()?;
        match &*state {
            RegistryState::Reachable(providers) => Some(providers.clone()),
            RegistryState::Unreachable => None,
        }
    }
}
