//! Service layer orchestrating the CRUD lifecycle of one resource
//! collection.

use crate::lifecycle::{
    domain::{Page, PageRequest, Resource, ResourceEnvelope, paginate},
    ports::{
        ExtensionRegistry, HookStatus, LifecycleExtension, RepositoryError, ResourceRepository,
    },
};
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Read-side query for a resource collection.
#[derive(Debug, Clone, Default)]
pub struct ListQuery<F> {
    /// Conjunctive filter conditions; the empty filter matches all.
    pub filter: F,
    /// Field names to project each record to; empty means full records.
    pub fields: Vec<String>,
    /// Optional pagination request.
    pub page: Option<PageRequest>,
}

/// Errors surfaced by the resource lifecycle orchestrator.
///
/// None of these are recovered locally and no operation is retried; each
/// is surfaced directly to the caller.
#[derive(Debug, Clone, Error)]
pub enum LifecycleError {
    /// The store or the extension registry cannot be reached, or no
    /// provider is registered to approve mutations.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The target identifier does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate identifier on create, or an in-use resource on delete.
    #[error("{0}")]
    Conflict(String),

    /// Malformed request shape, unknown pagination marker, or an attempt
    /// to edit an immutable field.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A registered provider vetoed the transition; the status is
    /// propagated verbatim, never wrapped.
    #[error("provider veto with status {0}")]
    Veto(HookStatus),

    /// Residual repository failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl LifecycleError {
    /// Transport status code for this failure kind.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ServiceUnavailable(_) => 503,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::BadRequest(_) => 400,
            Self::Veto(status) => status.code(),
            Self::Repository(_) => 500,
        }
    }
}

impl From<RepositoryError> for LifecycleError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(id) => Self::Conflict(format!("{id} already exists")),
            RepositoryError::NotFound(id) => Self::NotFound(format!("{id} does not exist")),
            RepositoryError::Unavailable(message) => Self::ServiceUnavailable(message),
            RepositoryError::InvalidData(source) => Self::BadRequest(source.to_string()),
            other @ RepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for orchestrator operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// CRUD lifecycle orchestrator for one resource collection.
///
/// Reads are filtered, projected, and paginated in memory. Every
/// mutation requires consensus among the providers discovered through
/// the extension registry at call time: the hooks run sequentially in
/// registration order, the first non-2xx status aborts the operation
/// with that exact status, and at least one provider must exist. Commits
/// are followed by a fire-and-forget notification fan-out that cannot
/// veto.
///
/// The orchestrator never serialises concurrent calls; the repository
/// port's atomic insert-if-absent is the authoritative uniqueness check.
pub struct ResourceLifecycleService<T, R, X>
where
    T: Resource,
    R: ResourceRepository<T>,
    X: ExtensionRegistry<T>,
{
    repository: Arc<R>,
    extensions: Arc<X>,
    immutable_fields: &'static [&'static str],
    _resource: PhantomData<fn() -> T>,
}

impl<T, R, X> Clone for ResourceLifecycleService<T, R, X>
where
    T: Resource,
    R: ResourceRepository<T>,
    X: ExtensionRegistry<T>,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            extensions: Arc::clone(&self.extensions),
            immutable_fields: self.immutable_fields,
            _resource: PhantomData,
        }
    }
}

impl<T, R, X> ResourceLifecycleService<T, R, X>
where
    T: Resource,
    R: ResourceRepository<T>,
    X: ExtensionRegistry<T>,
{
    /// Creates an orchestrator for one resource collection.
    ///
    /// `immutable_fields` names the attributes a client may never touch
    /// on update; the set is resource-specific configuration, not
    /// orchestrator policy.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        extensions: Arc<X>,
        immutable_fields: &'static [&'static str],
    ) -> Self {
        Self {
            repository,
            extensions,
            immutable_fields,
            _resource: PhantomData,
        }
    }

    /// Lists the collection, applying filters, projection, and
    /// pagination.
    ///
    /// Pagination only applies when the request carries a positive page
    /// size and the filtered result has more than one entry; otherwise
    /// the full filtered set is returned as a single page.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::ServiceUnavailable`] when the store is
    /// unobtainable and [`LifecycleError::BadRequest`] when the
    /// pagination marker names no element of the result set.
    pub async fn list(&self, query: ListQuery<T::Filter>) -> LifecycleResult<Page<T>> {
        let all = self.repository.get_all().await?;
        let matched: Vec<T> = all
            .into_iter()
            .filter(|resource| resource.matches(&query.filter))
            .collect();
        let narrowed: Vec<T> = if query.fields.is_empty() {
            matched
        } else {
            matched
                .iter()
                .map(|resource| resource.project(&query.fields))
                .collect()
        };
        match query.page {
            Some(page) if page.limit > 0 && narrowed.len() > 1 => paginate(narrowed, &page)
                .map_err(|err| LifecycleError::BadRequest(err.to_string())),
            _ => Ok(Page::single(narrowed)),
        }
    }

    /// Fetches one resource, optionally projected to a field subset.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::NotFound`] when the identifier does not
    /// exist and [`LifecycleError::ServiceUnavailable`] when the store is
    /// unobtainable.
    pub async fn get(&self, id: &str, fields: &[String]) -> LifecycleResult<T> {
        let found = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        if fields.is_empty() {
            Ok(found)
        } else {
            Ok(found.project(fields))
        }
    }

    /// Creates one resource or an all-or-nothing bulk batch.
    ///
    /// Every item must pass identifier-uniqueness checks (against the
    /// store and against its batch siblings) and full provider consensus
    /// before anything is persisted; a rejected batch leaves no side
    /// effects. Post-commit `created` notifications cannot veto. The
    /// response mirrors the envelope shape of the request.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Conflict`] on duplicate identifiers,
    /// [`LifecycleError::Veto`] with the provider's status on veto, and
    /// [`LifecycleError::ServiceUnavailable`] when the registry is
    /// unreachable or no provider is registered.
    pub async fn create(
        &self,
        envelope: ResourceEnvelope<T>,
    ) -> LifecycleResult<ResourceEnvelope<T>> {
        match envelope {
            ResourceEnvelope::Single(item) => self
                .create_single(item)
                .await
                .map(ResourceEnvelope::Single),
            ResourceEnvelope::Bulk(items) => {
                self.create_bulk(items).await.map(ResourceEnvelope::Bulk)
            }
        }
    }

    async fn create_single(&self, mut item: T) -> LifecycleResult<T> {
        if let Some(id) = item.id() {
            if self.repository.exists(id).await? {
                return Err(Self::already_exists(id));
            }
        }
        let providers = self.providers()?;
        for provider in &providers {
            let status = provider.can_create(&item).await;
            if !status.is_success() {
                return Err(LifecycleError::Veto(status));
            }
        }
        item.apply_defaults();
        self.repository.insert(item.clone()).await?;
        debug!(collection = T::COLLECTION, id = ?item.id(), "resource created");
        for provider in &providers {
            provider.created(&item).await;
        }
        Ok(item)
    }

    async fn create_bulk(&self, items: Vec<T>) -> LifecycleResult<Vec<T>> {
        let providers = self.providers()?;
        let mut batch_ids: HashSet<String> = HashSet::new();
        for item in &items {
            if let Some(id) = item.id() {
                if self.repository.exists(id).await? {
                    return Err(Self::already_exists(id));
                }
                if !batch_ids.insert(id.to_owned()) {
                    return Err(Self::already_exists(id));
                }
            }
            for provider in &providers {
                let status = provider.can_create(item).await;
                if !status.is_success() {
                    return Err(LifecycleError::Veto(status));
                }
            }
        }

        // Every item passed; only now touch the store.
        let mut created = Vec::with_capacity(items.len());
        for mut item in items {
            item.apply_defaults();
            self.repository.insert(item.clone()).await?;
            debug!(collection = T::COLLECTION, id = ?item.id(), "resource created");
            for provider in &providers {
                provider.created(&item).await;
            }
            created.push(item);
        }
        Ok(created)
    }

    /// Applies a singleton delta to the stored resource and returns the
    /// full post-update result.
    ///
    /// The delta is merged field-by-field, never substituted wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::BadRequest`] for a bulk-shaped envelope
    /// or a delta touching an immutable field,
    /// [`LifecycleError::NotFound`] for an unknown identifier, and
    /// [`LifecycleError::Veto`] with the provider's status on veto.
    pub async fn update(&self, id: &str, envelope: ResourceEnvelope<T>) -> LifecycleResult<T> {
        let Some(delta) = envelope.into_single() else {
            return Err(LifecycleError::BadRequest(
                "only singleton edits are supported".to_owned(),
            ));
        };
        let current = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(field) = self
            .immutable_fields
            .iter()
            .copied()
            .find(|field| delta.has_field(field))
        {
            return Err(LifecycleError::BadRequest(format!(
                "attribute '{field}' cannot be edited"
            )));
        }
        let providers = self.providers()?;
        for provider in &providers {
            let status = provider.can_update(&delta, &current).await;
            if !status.is_success() {
                return Err(LifecycleError::Veto(status));
            }
        }
        let updated = self.repository.update(id, delta).await?;
        debug!(collection = T::COLLECTION, id, "resource updated");
        for provider in &providers {
            provider.updated(&updated).await;
        }
        Ok(updated)
    }

    /// Removes a resource and returns the pre-delete snapshot.
    ///
    /// The snapshot is captured before removal so the `deleted`
    /// notification payloads remain meaningful afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::NotFound`] for an unknown identifier,
    /// [`LifecycleError::Conflict`] when the resource is still in use,
    /// and [`LifecycleError::Veto`] with the provider's status on veto.
    pub async fn delete(&self, id: &str) -> LifecycleResult<T> {
        let snapshot = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        if self.repository.in_use(id).await? {
            return Err(LifecycleError::Conflict(format!(
                "{} {id} is in use",
                T::COLLECTION
            )));
        }
        let providers = self.providers()?;
        for provider in &providers {
            let status = provider.can_delete(&snapshot).await;
            if !status.is_success() {
                return Err(LifecycleError::Veto(status));
            }
        }
        self.repository.remove(id).await?;
        debug!(collection = T::COLLECTION, id, "resource removed");
        for provider in &providers {
            provider.deleted(&snapshot).await;
        }
        Ok(snapshot)
    }

    /// Discovers the providers that must approve a mutation.
    ///
    /// An unreachable registry and an empty provider list are distinct
    /// failures: every mutation requires at least one provider to exist
    /// and approve.
    fn providers(&self) -> LifecycleResult<Vec<Arc<dyn LifecycleExtension<T>>>> {
        match self.extensions.lookup() {
            None => Err(LifecycleError::ServiceUnavailable(format!(
                "could not obtain the {} provider list, try again later",
                T::COLLECTION
            ))),
            Some(providers) if providers.is_empty() => {
                Err(LifecycleError::ServiceUnavailable(format!(
                    "no {} providers registered, try again later",
                    T::COLLECTION
                )))
            }
            Some(providers) => Ok(providers),
        }
    }

    fn not_found(id: &str) -> LifecycleError {
        LifecycleError::NotFound(format!("{} {id} does not exist", T::COLLECTION))
    }

    fn already_exists(id: &str) -> LifecycleError {
        LifecycleError::Conflict(format!("{} {id} already exists", T::COLLECTION))
    }
}
