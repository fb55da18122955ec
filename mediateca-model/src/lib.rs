//! Catalog record definitions shared across Mediateca crates.
#![allow(missing_docs)]

pub mod director;
pub mod error;
pub mod genre;
pub mod ids;
pub mod media;
pub mod media_type;
pub mod prelude;
pub mod producer;
pub mod resource;

// Intentionally curated re-exports for downstream consumers.
pub use director::{Director, DirectorDraft};
pub use error::{ModelError, Result as ModelResult};
pub use genre::{Genre, GenreDraft};
pub use ids::EntityId;
pub use media::{Media, MediaDraft};
pub use media_type::{MediaType, MediaTypeDraft};
pub use producer::{Producer, ProducerDraft};
pub use resource::CatalogResource;
