//! In-memory gateway stub for behavioural tests.
//!
//! Stands in for the REST backend: records live in a shared vector, ids are
//! assigned sequentially, and each operation can be toggled to fail so error
//! paths are exercisable without a network.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use mediateca_model::{CatalogResource, EntityId};

use crate::gateway::Gateway;

/// Which gateway operations the stub has been asked to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCall {
    List,
    Create,
    Update,
    Delete,
}

type Materialize<T> =
    Arc<dyn Fn(EntityId, &<T as CatalogResource>::Draft) -> T + Send + Sync>;

/// Test double for [`Gateway`].
///
/// `materialize` plays the backend's role of turning a draft plus an assigned
/// id into a full entity (timestamps included).
pub struct StubGateway<T: CatalogResource> {
    inner: Arc<RwLock<InnerState<T>>>,
    materialize: Materialize<T>,
}

#[derive(Debug)]
struct InnerState<T> {
    records: Vec<T>,
    next_id: u64,
    calls: Vec<GatewayCall>,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,
}

impl<T: CatalogResource> StubGateway<T> {
    pub fn new<F>(materialize: F) -> Self
    where
        F: Fn(EntityId, &T::Draft) -> T + Send + Sync + 'static,
    {
        Self::seeded(Vec::new(), materialize)
    }

    pub fn seeded<F>(records: Vec<T>, materialize: F) -> Self
    where
        F: Fn(EntityId, &T::Draft) -> T + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(RwLock::new(InnerState {
                records,
                next_id: 0,
                calls: Vec::new(),
                fail_list: false,
                fail_create: false,
                fail_update: false,
                fail_delete: false,
            })),
            materialize: Arc::new(materialize),
        }
    }

    pub fn push_record(&self, record: T) {
        if let Ok(mut guard) = self.inner.write() {
            guard.records.push(record);
        }
    }

    pub fn set_fail_list(&self, value: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_list = value;
        }
    }

    pub fn set_fail_create(&self, value: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_create = value;
        }
    }

    pub fn set_fail_update(&self, value: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_update = value;
        }
    }

    pub fn set_fail_delete(&self, value: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fail_delete = value;
        }
    }

    /// Snapshot of the stub's record store.
    pub fn records(&self) -> Vec<T> {
        self.inner.read().expect("stub state poisoned").records.clone()
    }

    /// Every operation issued against the stub so far.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.inner.read().expect("stub state poisoned").calls.clone()
    }
}

impl<T: CatalogResource> Clone for StubGateway<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            materialize: Arc::clone(&self.materialize),
        }
    }
}

impl<T: CatalogResource> std::fmt::Debug for StubGateway<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.inner.read().expect("stub state poisoned");
        f.debug_struct("StubGateway")
            .field("kind", &T::KIND)
            .field("records", &guard.records.len())
            .field("calls", &guard.calls.len())
            .finish()
    }
}

#[async_trait]
impl<T: CatalogResource> Gateway<T> for StubGateway<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        guard.calls.push(GatewayCall::List);
        if guard.fail_list {
            anyhow::bail!("stub: list rejected");
        }
        Ok(guard.records.clone())
    }

    async fn create(&self, draft: &T::Draft) -> Result<T> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        guard.calls.push(GatewayCall::Create);
        if guard.fail_create {
            anyhow::bail!("stub: create rejected");
        }
        guard.next_id += 1;
        let id = EntityId::from_wire(format!("stub-{:04}", guard.next_id));
        let record = (self.materialize)(id, draft);
        guard.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &EntityId, draft: &T::Draft) -> Result<T> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        guard.calls.push(GatewayCall::Update);
        if guard.fail_update {
            anyhow::bail!("stub: update rejected");
        }
        let record = (self.materialize)(id.clone(), draft);
        if let Some(slot) = guard.records.iter_mut().find(|r| r.id() == id) {
            *slot = record.clone();
        }
        Ok(record)
    }

    async fn delete(&self, id: &EntityId) -> Result<()> {
        let mut guard = self.inner.write().expect("stub state poisoned");
        guard.calls.push(GatewayCall::Delete);
        if guard.fail_delete {
            anyhow::bail!("stub: delete rejected");
        }
        guard.records.retain(|r| r.id() != id);
        Ok(())
    }
}
