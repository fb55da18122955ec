//! Dependent-options resolver for the media form.
//!
//! The media form's four reference dropdowns need the referenced kinds'
//! current collections. They are fetched concurrently, once, before the form
//! is usable, and held as read-only id-to-name option lists. Failure of any
//! one fetch does not block the others; that selector just degrades to
//! "no options".

use std::sync::Arc;

use anyhow::Result;
use mediateca_model::{CatalogResource, Director, EntityId, Genre, MediaType, Producer};

use crate::api_client::ApiClient;
use crate::gateway::{Gateway, RestGateway};

/// One selectable reference target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub id: EntityId,
    pub name: String,
}

/// Read-only option lists for the four kinds the media form references.
#[derive(Debug, Clone, Default)]
pub struct ReferenceOptions {
    pub producers: Vec<OptionEntry>,
    pub types: Vec<OptionEntry>,
    pub directors: Vec<OptionEntry>,
    pub genres: Vec<OptionEntry>,
}

impl ReferenceOptions {
    pub fn producer_name(&self, id: &EntityId) -> Option<&str> {
        name_in(&self.producers, id)
    }

    pub fn type_name(&self, id: &EntityId) -> Option<&str> {
        name_in(&self.types, id)
    }

    pub fn director_name(&self, id: &EntityId) -> Option<&str> {
        name_in(&self.directors, id)
    }

    pub fn genre_name(&self, id: &EntityId) -> Option<&str> {
        name_in(&self.genres, id)
    }
}

fn name_in<'a>(entries: &'a [OptionEntry], id: &EntityId) -> Option<&'a str> {
    entries.iter().find(|e| &e.id == id).map(|e| e.name.as_str())
}

/// Fetches the four referenced collections and reduces them to option lists.
pub struct OptionsResolver {
    producers: Arc<dyn Gateway<Producer>>,
    types: Arc<dyn Gateway<MediaType>>,
    directors: Arc<dyn Gateway<Director>>,
    genres: Arc<dyn Gateway<Genre>>,
}

impl OptionsResolver {
    /// Resolver backed by the real REST gateways.
    pub fn new(client: &ApiClient) -> Self {
        Self {
            producers: Arc::new(RestGateway::<Producer>::new(client.clone())),
            types: Arc::new(RestGateway::<MediaType>::new(client.clone())),
            directors: Arc::new(RestGateway::<Director>::new(client.clone())),
            genres: Arc::new(RestGateway::<Genre>::new(client.clone())),
        }
    }

    /// Resolver over arbitrary gateways; used by tests.
    pub fn with_gateways(
        producers: Arc<dyn Gateway<Producer>>,
        types: Arc<dyn Gateway<MediaType>>,
        directors: Arc<dyn Gateway<Director>>,
        genres: Arc<dyn Gateway<Genre>>,
    ) -> Self {
        Self {
            producers,
            types,
            directors,
            genres,
        }
    }

    /// Fire the four list calls concurrently and collect whatever succeeded.
    pub async fn load(&self) -> ReferenceOptions {
        let (producers, types, directors, genres) = futures::join!(
            self.producers.list(),
            self.types.list(),
            self.directors.list(),
            self.genres.list(),
        );

        ReferenceOptions {
            producers: collect_options::<Producer>(producers),
            types: collect_options::<MediaType>(types),
            directors: collect_options::<Director>(directors),
            genres: collect_options::<Genre>(genres),
        }
    }
}

impl std::fmt::Debug for OptionsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsResolver").finish_non_exhaustive()
    }
}

fn collect_options<T: CatalogResource>(result: Result<Vec<T>>) -> Vec<OptionEntry> {
    match result {
        Ok(records) => records
            .iter()
            .map(|record| OptionEntry {
                id: record.id().clone(),
                name: record.display_name().to_string(),
            })
            .collect(),
        Err(err) => {
            log::error!("Error fetching {} options: {err:#}", T::KIND);
            Vec::new()
        }
    }
}
