use crate::ids::EntityId;
use crate::resource::CatalogResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A production company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub slogan: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a [`Producer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerDraft {
    pub name: String,
    pub slogan: String,
    pub description: String,
}

impl CatalogResource for Producer {
    type Draft = ProducerDraft;

    const ROUTE: &'static str = "producers";
    const KIND: &'static str = "producer";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> ProducerDraft {
        ProducerDraft {
            name: self.name.clone(),
            slogan: self.slogan.clone(),
            description: self.description.clone(),
        }
    }

    fn default_draft() -> ProducerDraft {
        ProducerDraft::default()
    }
}
