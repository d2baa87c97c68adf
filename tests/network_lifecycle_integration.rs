//! Behavioural integration tests for the network lifecycle stack.
//!
//! These tests wire the public pieces together the way a transport
//! layer would: the generic orchestrator over the in-memory datastore
//! adapter and the in-process extension registry, driven end to end
//! through realistic create/list/update/delete flows.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use async_trait::async_trait;
use mockable::DefaultClock;
use std::sync::{Arc, Mutex};
use trellis::lifecycle::adapters::memory::StaticExtensionRegistry;
use trellis::lifecycle::domain::{PageRequest, Presence, ResourceEnvelope};
use trellis::lifecycle::ports::{HookStatus, LifecycleExtension};
use trellis::lifecycle::services::{LifecycleError, ListQuery};
use trellis::network::NetworkLifecycleService;
use trellis::network::adapters::datastore::InMemoryNetworkStore;
use trellis::network::domain::{Network, NetworkFilter, NetworkStatus};

const TENANT: &str = "0aa67f10-3a7f-4b8e-9c6d-2e1f5a4b3c2d";

/// Quota-style provider: approves creations until the collection holds
/// `limit` networks, then vetoes with 403.
struct QuotaExtension {
    limit: usize,
    seen: Mutex<usize>,
}

impl QuotaExtension {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: Mutex::new(0),
        }
    }
}

#[async_trait]
impl LifecycleExtension<Network> for QuotaExtension {
    async fn can_create(&self, _candidate: &Network) -> HookStatus {
        let seen = self.seen.lock().map(|count| *count).unwrap_or(usize::MAX);
        if seen < self.limit {
            HookStatus::OK
        } else {
            HookStatus::new(403)
        }
    }

    async fn created(&self, _resource: &Network) {
        if let Ok(mut count) = self.seen.lock() {
            *count += 1;
        }
    }

    async fn deleted(&self, _resource: &Network) {
        if let Ok(mut count) = self.seen.lock() {
            *count = count.saturating_sub(1);
        }
    }
}

fn service_with_quota(
    limit: usize,
) -> (
    NetworkLifecycleService<InMemoryNetworkStore<DefaultClock>, StaticExtensionRegistry<Network>>,
    InMemoryNetworkStore<DefaultClock>,
) {
    let store = InMemoryNetworkStore::new(Arc::new(DefaultClock));
    let registry = StaticExtensionRegistry::new();
    registry.register(Arc::new(QuotaExtension::new(limit)));
    let service = NetworkLifecycleService::new(
        Arc::new(store.clone()),
        Arc::new(registry),
        Network::IMMUTABLE_FIELDS,
    );
    (service, store)
}

fn named(name: &str) -> Network {
    Network {
        tenant_id: Presence::Value(TENANT.to_owned()),
        name: Presence::Value(name.to_owned()),
        ..Network::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_flow() {
    let (service, store) = service_with_quota(10);

    // Create three networks, ids generated server-side.
    let mut ids = Vec::new();
    for name in ["core", "edge", "dmz"] {
        let created = service
            .create(ResourceEnvelope::Single(named(name)))
            .await
            .expect("creation should succeed")
            .into_single()
            .expect("singleton response");
        assert_eq!(created.status, Presence::Value(NetworkStatus::Active));
        ids.push(created.id.expect("generated identifier"));
    }

    // Page through the collection one entry at a time.
    let first = service
        .list(ListQuery {
            page: Some(PageRequest::first(1, "/v2/networks")),
            ..ListQuery::default()
        })
        .await
        .expect("paginated listing");
    assert_eq!(first.items.len(), 1);
    let next = first.links.first().expect("a next link");
    assert!(next.href.starts_with("/v2/networks?limit=1&marker="));

    let second = service
        .list(ListQuery {
            page: Some(PageRequest {
                limit: 1,
                marker: Some(next.marker.clone()),
                reverse: false,
                base: "/v2/networks".to_owned(),
            }),
            ..ListQuery::default()
        })
        .await
        .expect("second page");
    assert_eq!(second.items.len(), 1);
    assert_ne!(second.items, first.items);

    // Rename one network and flip its admin state through the update path.
    let target = ids.first().expect("at least one network");
    let delta = Network {
        name: Presence::Value("core-renamed".to_owned()),
        admin_state_up: Presence::Value(false),
        ..Network::default()
    };
    let updated = service
        .update(target, ResourceEnvelope::Single(delta))
        .await
        .expect("update should succeed");
    assert_eq!(updated.name, Presence::Value("core-renamed".to_owned()));
    assert_eq!(updated.admin_state_up, Presence::Value(false));

    // The typed filter finds it by its new attributes.
    let filter = NetworkFilter::from_query([("name", "core-renamed"), ("admin_state_up", "false")])
        .expect("valid query");
    let found = service
        .list(ListQuery {
            filter,
            ..ListQuery::default()
        })
        .await
        .expect("filtered listing");
    assert_eq!(found.items.len(), 1);

    // An in-use network refuses deletion until released.
    store.mark_in_use(target).expect("record exists");
    assert!(matches!(
        service.delete(target).await,
        Err(LifecycleError::Conflict(_))
    ));
    store.release(target).expect("release succeeds");
    service.delete(target).await.expect("deletion succeeds");
    assert!(matches!(
        service.get(target, &[]).await,
        Err(LifecycleError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn quota_provider_vetoes_beyond_its_limit() {
    let (service, _store) = service_with_quota(2);

    for name in ["one", "two"] {
        service
            .create(ResourceEnvelope::Single(named(name)))
            .await
            .expect("within quota");
    }

    let rejected = service.create(ResourceEnvelope::Single(named("three"))).await;
    let err = rejected.expect_err("quota exhausted");
    assert!(matches!(err, LifecycleError::Veto(status) if status.code() == 403));
    assert_eq!(err.status_code(), 403);

    // Deleting frees quota again.
    let listing = service
        .list(ListQuery::default())
        .await
        .expect("listing succeeds");
    let id = listing
        .items
        .first()
        .and_then(|network| network.id.clone())
        .expect("an identifier");
    service.delete(&id).await.expect("deletion succeeds");
    service
        .create(ResourceEnvelope::Single(named("three")))
        .await
        .expect("quota freed");
}

#[tokio::test(flavor = "multi_thread")]
async fn bulk_batches_commit_or_reject_atomically() {
    let (service, _store) = service_with_quota(10);

    let committed = service
        .create(ResourceEnvelope::Bulk(vec![named("a"), named("b")]))
        .await
        .expect("bulk creation succeeds");
    let duplicate = committed
        .items()
        .first()
        .and_then(|network| network.id.clone())
        .expect("an identifier");

    // One duplicate poisons the whole batch.
    let mut fresh = named("c");
    fresh.id = None;
    let poisoned = service
        .create(ResourceEnvelope::Bulk(vec![
            fresh,
            Network {
                id: Some(duplicate),
                ..named("dup")
            },
        ]))
        .await;
    assert!(matches!(poisoned, Err(LifecycleError::Conflict(_))));

    let listing = service
        .list(ListQuery::default())
        .await
        .expect("listing succeeds");
    assert_eq!(listing.items.len(), 2, "the rejected batch left no trace");
}
