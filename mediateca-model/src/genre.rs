use crate::ids::EntityId;
use crate::resource::CatalogResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog genre ("Drama", "Documentary", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a [`Genre`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreDraft {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl CatalogResource for Genre {
    type Draft = GenreDraft;

    const ROUTE: &'static str = "genres";
    const KIND: &'static str = "genre";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> GenreDraft {
        GenreDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            active: self.active,
        }
    }

    fn default_draft() -> GenreDraft {
        GenreDraft::default()
    }
}
