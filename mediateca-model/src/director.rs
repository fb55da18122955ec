use crate::ids::EntityId;
use crate::resource::CatalogResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A film or series director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a [`Director`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorDraft {
    pub name: String,
    pub active: bool,
}

impl CatalogResource for Director {
    type Draft = DirectorDraft;

    const ROUTE: &'static str = "directors";
    const KIND: &'static str = "director";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> DirectorDraft {
        DirectorDraft {
            name: self.name.clone(),
            active: self.active,
        }
    }

    fn default_draft() -> DirectorDraft {
        DirectorDraft::default()
    }
}
