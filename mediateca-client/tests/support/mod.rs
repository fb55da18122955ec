//! Shared fixtures for the behavioural tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use mediateca_client::testing::StubGateway;
use mediateca_model::prelude::*;

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 24, 10, 0, 0).single().expect("valid timestamp")
}

pub fn genre(id: &str, name: &str) -> Genre {
    let now = fixed_instant();
    Genre {
        id: EntityId::from_wire(id),
        name: name.to_string(),
        description: format!("{name} films"),
        active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn materialize_genre(id: EntityId, draft: &GenreDraft) -> Genre {
    let now = Utc::now();
    Genre {
        id,
        name: draft.name.clone(),
        description: draft.description.clone(),
        active: draft.active,
        created_at: now,
        updated_at: now,
    }
}

pub fn genre_gateway(seed: Vec<Genre>) -> StubGateway<Genre> {
    StubGateway::seeded(seed, materialize_genre)
}

pub fn producer(id: &str, name: &str) -> Producer {
    let now = fixed_instant();
    Producer {
        id: EntityId::from_wire(id),
        name: name.to_string(),
        slogan: String::new(),
        description: String::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn materialize_producer(id: EntityId, draft: &ProducerDraft) -> Producer {
    let now = Utc::now();
    Producer {
        id,
        name: draft.name.clone(),
        slogan: draft.slogan.clone(),
        description: draft.description.clone(),
        created_at: now,
        updated_at: now,
    }
}

pub fn director(id: &str, name: &str) -> Director {
    let now = fixed_instant();
    Director {
        id: EntityId::from_wire(id),
        name: name.to_string(),
        active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn materialize_director(id: EntityId, draft: &DirectorDraft) -> Director {
    let now = Utc::now();
    Director {
        id,
        name: draft.name.clone(),
        active: draft.active,
        created_at: now,
        updated_at: now,
    }
}

pub fn media_type(id: &str, name: &str) -> MediaType {
    let now = fixed_instant();
    MediaType {
        id: EntityId::from_wire(id),
        name: name.to_string(),
        description: String::new(),
        active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn materialize_media_type(id: EntityId, draft: &MediaTypeDraft) -> MediaType {
    let now = Utc::now();
    MediaType {
        id,
        name: draft.name.clone(),
        description: draft.description.clone(),
        active: draft.active,
        created_at: now,
        updated_at: now,
    }
}
