//! In-memory keyed store implementing the repository port for networks.

use super::schema::{NetworkRecord, Uid};
use super::transcribe;
use crate::lifecycle::ports::{RepositoryError, RepositoryResult, ResourceRepository};
use crate::network::domain::Network;
use async_trait::async_trait;
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Thread-safe in-memory network store.
///
/// Records are held in the persisted schema and transcribed at the port
/// boundary. Inserts are atomic under the store's write lock, so the
/// duplicate-key guarantee holds even when orchestrator pre-checks race.
/// The in-use ledger stands in for the subsystem that references
/// networks and blocks their deletion.
pub struct InMemoryNetworkStore<C> {
    state: Arc<RwLock<StoreState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct StoreState {
    records: HashMap<Uid, NetworkRecord>,
    in_use: HashSet<Uid>,
}

/// A record reached the store without its key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot persist a network without an identifier")]
struct MissingKey;

impl<C> Clone for InMemoryNetworkStore<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock> InMemoryNetworkStore<C> {
    /// Creates an empty store stamping record revisions with `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }

    /// Marks a record as referenced by another subsystem, blocking its
    /// deletion until released.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no record carries the
    /// identifier.
    pub fn mark_in_use(&self, id: &str) -> RepositoryResult<()> {
        let key = parse_key(id)?;
        let mut state = self.write_state()?;
        if !state.records.contains_key(&key) {
            return Err(RepositoryError::NotFound(id.to_owned()));
        }
        state.in_use.insert(key);
        Ok(())
    }

    /// Releases a reference previously taken with [`Self::mark_in_use`].
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the identifier is malformed or
    /// the store is unavailable.
    pub fn release(&self, id: &str) -> RepositoryResult<()> {
        let key = parse_key(id)?;
        let mut state = self.write_state()?;
        state.in_use.remove(&key);
        Ok(())
    }

    fn read_state(&self) -> RepositoryResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))
    }

    fn write_state(&self) -> RepositoryResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> ResourceRepository<Network> for InMemoryNetworkStore<C> {
    async fn get_all(&self) -> RepositoryResult<Vec<Network>> {
        let state = self.read_state()?;
        Ok(state.records.values().map(transcribe::from_record).collect())
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<Network>> {
        let key = parse_key(id)?;
        let state = self.read_state()?;
        Ok(state.records.get(&key).map(transcribe::from_record))
    }

    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        let key = parse_key(id)?;
        let state = self.read_state()?;
        Ok(state.records.contains_key(&key))
    }

    async fn in_use(&self, id: &str) -> RepositoryResult<bool> {
        let key = parse_key(id)?;
        let state = self.read_state()?;
        Ok(state.in_use.contains(&key))
    }

    async fn insert(&self, resource: Network) -> RepositoryResult<()> {
        let mut record =
            transcribe::to_record(&resource).map_err(RepositoryError::invalid_data)?;
        let Some(uid) = record.uid else {
            return Err(RepositoryError::invalid_data(MissingKey));
        };
        record.revised_at = Some(self.clock.utc());
        let mut state = self.write_state()?;
        match state.records.entry(uid) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(uid.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn update(&self, id: &str, delta: Network) -> RepositoryResult<Network> {
        let key = parse_key(id)?;
        let mut state = self.write_state()?;
        let record = state
            .records
            .get(&key)
            .ok_or_else(|| RepositoryError::NotFound(id.to_owned()))?;
        let mut merged = transcribe::from_record(record);
        merged.merge(delta);
        let mut next = transcribe::to_record(&merged).map_err(RepositoryError::invalid_data)?;
        next.revised_at = Some(self.clock.utc());
        state.records.insert(key, next);
        Ok(merged)
    }

    async fn remove(&self, id: &str) -> RepositoryResult<()> {
        let key = parse_key(id)?;
        let mut state = self.write_state()?;
        state
            .records
            .remove(&key)
            .ok_or_else(|| RepositoryError::NotFound(id.to_owned()))?;
        state.in_use.remove(&key);
        Ok(())
    }
}

fn parse_key(id: &str) -> RepositoryResult<Uid> {
    Uid::parse(id).map_err(RepositoryError::invalid_data)
}
