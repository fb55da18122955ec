use crate::ids::EntityId;
use crate::resource::CatalogResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A media classification ("Movie", "Series", ...). A catalog record, not an
/// enum: operators manage the set of types at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaType {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a [`MediaType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTypeDraft {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl CatalogResource for MediaType {
    type Draft = MediaTypeDraft;

    const ROUTE: &'static str = "types";
    const KIND: &'static str = "type";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> MediaTypeDraft {
        MediaTypeDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            active: self.active,
        }
    }

    fn default_draft() -> MediaTypeDraft {
        MediaTypeDraft::default()
    }
}
