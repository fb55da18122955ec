use crate::ids::EntityId;
use crate::resource::CatalogResource;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A catalog media item (a movie or series entry).
///
/// The `producer`, `media_type`, `director` and `genre` fields are foreign-key
/// ids into the other four kinds. Referential integrity is the backend's
/// concern; the client only offers the referenced kind's current collection as
/// selectable options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub serial: String,
    pub title: String,
    pub synopsis: String,
    pub producer: EntityId,
    #[serde(rename = "type")]
    pub media_type: EntityId,
    pub director: EntityId,
    pub genre: EntityId,
    pub image: Option<String>,
    pub movie_url: String,
    /// Full date on the wire; rendered truncated to its year component.
    #[serde(rename = "releaseYear")]
    pub released_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Media {
    /// Year component of the release date, as shown in listings.
    pub fn release_year(&self) -> i32 {
        self.released_at.year()
    }
}

/// Editable fields of a [`Media`] item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDraft {
    pub serial: String,
    pub title: String,
    pub synopsis: String,
    pub producer: EntityId,
    #[serde(rename = "type")]
    pub media_type: EntityId,
    pub director: EntityId,
    pub genre: EntityId,
    pub image: Option<String>,
    pub movie_url: String,
    #[serde(rename = "releaseYear")]
    pub released_at: DateTime<Utc>,
}

impl Default for MediaDraft {
    fn default() -> Self {
        Self {
            serial: String::new(),
            title: String::new(),
            synopsis: String::new(),
            producer: EntityId::default(),
            media_type: EntityId::default(),
            director: EntityId::default(),
            genre: EntityId::default(),
            image: None,
            movie_url: String::new(),
            // Date fields default to today, matching the create form.
            released_at: Utc::now(),
        }
    }
}

impl CatalogResource for Media {
    type Draft = MediaDraft;

    const ROUTE: &'static str = "media";
    const KIND: &'static str = "media";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn to_draft(&self) -> MediaDraft {
        MediaDraft {
            serial: self.serial.clone(),
            title: self.title.clone(),
            synopsis: self.synopsis.clone(),
            producer: self.producer.clone(),
            media_type: self.media_type.clone(),
            director: self.director.clone(),
            genre: self.genre.clone(),
            image: self.image.clone(),
            movie_url: self.movie_url.clone(),
            released_at: self.released_at,
        }
    }

    fn default_draft() -> MediaDraft {
        MediaDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let raw = r#"{
            "_id": "66f2a1c9e4b0d8a1b2c3d4e5",
            "serial": "MX-0001",
            "title": "La Jetee",
            "synopsis": "A man travels through time.",
            "producer": "66f2a1c9e4b0d8a1b2c3d401",
            "type": "66f2a1c9e4b0d8a1b2c3d402",
            "director": "66f2a1c9e4b0d8a1b2c3d403",
            "genre": "66f2a1c9e4b0d8a1b2c3d404",
            "image": null,
            "movieUrl": "https://example.com/la-jetee",
            "releaseYear": "1962-02-16T00:00:00Z",
            "createdAt": "2024-09-24T10:00:00Z",
            "updatedAt": "2024-09-24T10:00:00Z"
        }"#;

        let media: Media = serde_json::from_str(raw).expect("wire media parses");
        assert_eq!(media.id.as_str(), "66f2a1c9e4b0d8a1b2c3d4e5");
        assert_eq!(media.media_type.as_str(), "66f2a1c9e4b0d8a1b2c3d402");
        assert_eq!(media.image, None);
        assert_eq!(media.release_year(), 1962);
    }

    #[test]
    fn draft_serializes_without_id_or_timestamps() {
        let draft = Media::default_draft();
        let value = serde_json::to_value(&draft).expect("draft serializes");
        let object = value.as_object().expect("draft is an object");
        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("createdAt"));
        assert!(object.contains_key("releaseYear"));
        assert_eq!(object["type"], serde_json::json!(""));
    }

    #[test]
    fn round_trips_editable_fields_through_draft() {
        let raw = r#"{
            "_id": "a1",
            "serial": "S",
            "title": "T",
            "synopsis": "",
            "producer": "p1",
            "type": "t1",
            "director": "d1",
            "genre": "g1",
            "image": "poster.png",
            "movieUrl": "",
            "releaseYear": "2001-01-01T00:00:00Z",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let media: Media = serde_json::from_str(raw).expect("parses");
        let draft = media.to_draft();
        assert_eq!(draft.title, media.title);
        assert_eq!(draft.image.as_deref(), Some("poster.png"));
        assert_eq!(draft.released_at, media.released_at);
    }
}
