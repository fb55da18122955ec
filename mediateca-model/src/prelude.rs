//! Convenience re-exports for downstream crates.

pub use crate::director::{Director, DirectorDraft};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::genre::{Genre, GenreDraft};
pub use crate::ids::EntityId;
pub use crate::media::{Media, MediaDraft};
pub use crate::media_type::{MediaType, MediaTypeDraft};
pub use crate::producer::{Producer, ProducerDraft};
pub use crate::resource::CatalogResource;
