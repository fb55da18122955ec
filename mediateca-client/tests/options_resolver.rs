//! Tests for the media form's dependent-options resolver.

mod support;

use std::sync::Arc;

use mediateca_client::OptionsResolver;
use mediateca_client::testing::StubGateway;
use mediateca_model::prelude::*;

use support::{
    director, genre, materialize_director, materialize_genre, materialize_media_type,
    materialize_producer, media_type, producer,
};

struct Stubs {
    producers: StubGateway<Producer>,
    types: StubGateway<MediaType>,
    directors: StubGateway<Director>,
    genres: StubGateway<Genre>,
}

fn seeded_stubs() -> Stubs {
    Stubs {
        producers: StubGateway::seeded(
            vec![producer("p1", "Mosfilm"), producer("p2", "Studio Canal")],
            materialize_producer,
        ),
        types: StubGateway::seeded(vec![media_type("t1", "Movie")], materialize_media_type),
        directors: StubGateway::seeded(vec![director("d1", "Marker")], materialize_director),
        genres: StubGateway::seeded(vec![genre("g1", "Drama")], materialize_genre),
    }
}

fn resolver_over(stubs: &Stubs) -> OptionsResolver {
    OptionsResolver::with_gateways(
        Arc::new(stubs.producers.clone()),
        Arc::new(stubs.types.clone()),
        Arc::new(stubs.directors.clone()),
        Arc::new(stubs.genres.clone()),
    )
}

#[tokio::test]
async fn loads_all_four_option_lists() {
    let stubs = seeded_stubs();
    let options = resolver_over(&stubs).load().await;

    assert_eq!(options.producers.len(), 2);
    assert_eq!(options.types.len(), 1);
    assert_eq!(options.directors.len(), 1);
    assert_eq!(options.genres.len(), 1);

    let id = EntityId::from_wire("p2");
    assert_eq!(options.producer_name(&id), Some("Studio Canal"));
    assert_eq!(options.type_name(&EntityId::from_wire("t1")), Some("Movie"));
}

#[tokio::test]
async fn one_failed_fetch_degrades_only_that_selector() {
    let stubs = seeded_stubs();
    stubs.directors.set_fail_list(true);

    let options = resolver_over(&stubs).load().await;

    assert!(options.directors.is_empty());
    assert_eq!(options.producers.len(), 2);
    assert_eq!(options.types.len(), 1);
    assert_eq!(options.genres.len(), 1);
    assert_eq!(options.director_name(&EntityId::from_wire("d1")), None);
}

#[tokio::test]
async fn unknown_reference_ids_resolve_to_no_name() {
    let stubs = seeded_stubs();
    let options = resolver_over(&stubs).load().await;

    assert_eq!(options.genre_name(&EntityId::from_wire("missing")), None);
    assert_eq!(options.genre_name(&EntityId::from_wire("")), None);
}
