use std::marker::PhantomData;

use anyhow::Result;
use async_trait::async_trait;
use mediateca_model::{CatalogResource, EntityId};

use crate::api_client::ApiClient;

/// Network-facing collaborator of the CRUD controller.
///
/// One implementation per transport: [`RestGateway`] against the real
/// backend, [`crate::testing::StubGateway`] for behavioural tests. Errors
/// stay `anyhow` at this layer; the controller maps them into its taxonomy.
#[async_trait]
pub trait Gateway<T: CatalogResource>: Send + Sync {
    /// Fetch the full remote collection.
    async fn list(&self) -> Result<Vec<T>>;

    /// Create a record from the draft; the backend echoes the created entity
    /// with its assigned id and timestamps.
    async fn create(&self, draft: &T::Draft) -> Result<T>;

    /// Update the record with `id`; the backend echoes the updated entity.
    async fn update(&self, id: &EntityId, draft: &T::Draft) -> Result<T>;

    /// Delete the record with `id`.
    async fn delete(&self, id: &EntityId) -> Result<()>;
}

/// REST implementation of [`Gateway`] over [`ApiClient`], routed by
/// [`CatalogResource::ROUTE`].
#[derive(Clone, Debug)]
pub struct RestGateway<T> {
    client: ApiClient,
    _kind: PhantomData<fn() -> T>,
}

impl<T> RestGateway<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<T: CatalogResource> Gateway<T> for RestGateway<T> {
    async fn list(&self) -> Result<Vec<T>> {
        self.client.get(T::ROUTE).await
    }

    async fn create(&self, draft: &T::Draft) -> Result<T> {
        self.client.post(T::ROUTE, draft).await
    }

    async fn update(&self, id: &EntityId, draft: &T::Draft) -> Result<T> {
        self.client.put(&item_path::<T>(id), draft).await
    }

    async fn delete(&self, id: &EntityId) -> Result<()> {
        self.client.delete(&item_path::<T>(id)).await
    }
}

fn item_path<T: CatalogResource>(id: &EntityId) -> String {
    format!("{}/{}", T::ROUTE, urlencoding::encode(id.as_str()))
}
