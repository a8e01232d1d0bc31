//! MongoDB-backed repository tests.
//!
//! Container tests need Docker: `cargo test -p domain_proteins -- --ignored`

use database::mongodb::{client_from_config, MongoConfig};
use domain_proteins::{
    MongoProteinRepository, ProteinError, ProteinRepository, ProteinService,
};
use mongodb::bson::{doc, Document};
use std::time::Duration;
use test_utils::{TestDataBuilder, TestMongo};

async fn unreachable_repository() -> MongoProteinRepository {
    let config = MongoConfig::with_database("mongodb://127.0.0.1:1/?directConnection=true", "protein")
        .with_server_selection_timeout(Duration::from_millis(200));
    let client = client_from_config(&config).await.unwrap();
    MongoProteinRepository::new(&client.database(config.database()))
}

#[tokio::test]
async fn test_unreachable_store_surfaces_store_error() {
    let repository = unreachable_repository().await;

    let by_id = repository.find_by_id("P12345").await.unwrap_err();
    let by_organism = repository.find_by_organism("Homo sapiens").await.unwrap_err();
    let ratings = repository.find_ratings().await.unwrap_err();
    let by_ids = repository.find_by_ids(&["P12345".to_string()]).await.unwrap_err();

    for err in [by_id, by_organism, ratings, by_ids] {
        match err {
            ProteinError::Store(msg) => assert!(!msg.is_empty()),
            other => panic!("expected store error, got {:?}", other),
        }
    }
}

fn stored(builder: &TestDataBuilder, index: usize, organism: &str, ratings: &[i32]) -> Document {
    let reviews: Vec<Document> = ratings
        .iter()
        .map(|&rating| doc! { "reviewer": "curator", "comment": "checked", "rating": rating })
        .collect();

    doc! {
        "protein_id": builder.protein_id(index),
        "name": format!("Protein {}", index),
        "sequence": "MKTAYIAKQR",
        "length": 10_i32,
        "organism": organism,
        "function": "Unknown",
        "reviews": reviews,
    }
}

async fn seeded(mongo: &TestMongo, builder: &TestDataBuilder, docs: Vec<Document>) -> MongoProteinRepository {
    let db = mongo.database(&builder.name("db", "proteins"));
    let collection = db.collection::<Document>("protein_info");
    if !docs.is_empty() {
        collection.insert_many(docs).await.unwrap();
    }
    MongoProteinRepository::new(&db)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_and_organism() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_find_by_id_and_organism");

    let mut without_reviews = stored(&builder, 2, "Mus musculus", &[]);
    without_reviews.remove("reviews");

    let repository = seeded(
        &mongo,
        &builder,
        vec![
            stored(&builder, 1, "Homo sapiens", &[4]),
            without_reviews,
            stored(&builder, 3, "Homo sapiens", &[]),
        ],
    )
    .await;

    let found = repository.find_by_id(&builder.protein_id(1)).await.unwrap().unwrap();
    assert_eq!(found.organism, "Homo sapiens");
    assert_eq!(found.reviews[0].rating, 4);

    let missing_reviews = repository.find_by_id(&builder.protein_id(2)).await.unwrap().unwrap();
    assert!(missing_reviews.reviews.is_empty());

    assert!(repository.find_by_id("absent").await.unwrap().is_none());

    let human = repository.find_by_organism("Homo sapiens").await.unwrap();
    let ids: Vec<_> = human.iter().map(|p| p.protein_id.clone()).collect();
    assert_eq!(ids, [builder.protein_id(1), builder.protein_id(3)]);

    assert!(repository.find_by_organism("Danio rerio").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_top_rated_against_store() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_top_rated_against_store");

    let repository = seeded(
        &mongo,
        &builder,
        vec![
            stored(&builder, 1, "Homo sapiens", &[5]),
            stored(&builder, 2, "Homo sapiens", &[]),
            stored(&builder, 3, "Mus musculus", &[3, 5]),
        ],
    )
    .await;
    let service = ProteinService::new(repository);

    let ranked = service.top_rated(2).await.unwrap();

    let ids: Vec<_> = ranked.iter().map(|p| p.protein_id.clone()).collect();
    assert_eq!(ids, [builder.protein_id(1), builder.protein_id(3)]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_top_rated_on_empty_collection() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_top_rated_on_empty_collection");

    let repository = seeded(&mongo, &builder, Vec::new()).await;
    let service = ProteinService::new(repository);

    assert!(service.top_rated(5).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ratings_projection_and_fetch_by_ids() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_ratings_projection_and_fetch_by_ids");

    let mut null_reviews = stored(&builder, 2, "Mus musculus", &[]);
    null_reviews.insert("reviews", mongodb::bson::Bson::Null);

    let repository = seeded(
        &mongo,
        &builder,
        vec![stored(&builder, 1, "Homo sapiens", &[4, 2]), null_reviews],
    )
    .await;

    let ratings = repository.find_ratings().await.unwrap();
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0].protein_id, builder.protein_id(1));
    let values: Vec<i64> = ratings[0].reviews.iter().map(|r| r.rating).collect();
    assert_eq!(values, [4, 2]);
    assert!(ratings[1].reviews.is_empty());

    let fetched = repository
        .find_by_ids(&[builder.protein_id(2), "absent".to_string()])
        .await
        .unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].protein_id, builder.protein_id(2));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_malformed_documents_surface_store_error() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_malformed_documents_surface_store_error");

    let mut bad_length = stored(&builder, 1, "Homo sapiens", &[5]);
    bad_length.insert("length", "abc");
    let mut nameless = stored(&builder, 2, "Homo sapiens", &[3]);
    nameless.remove("name");

    let repository = seeded(&mongo, &builder, vec![bad_length, nameless]).await;

    let by_id = repository.find_by_id(&builder.protein_id(1)).await.unwrap_err();
    let by_organism = repository.find_by_organism("Homo sapiens").await.unwrap_err();
    let by_ids = repository
        .find_by_ids(&[builder.protein_id(2)])
        .await
        .unwrap_err();

    for err in [by_id, by_organism, by_ids] {
        assert!(matches!(err, ProteinError::Store(ref msg) if !msg.is_empty()), "{:?}", err);
    }

    // Ranking reads only ids and ratings, so the top-rated read fails at the record fetch.
    let service = ProteinService::new(repository);
    assert!(matches!(service.top_rated(2).await, Err(ProteinError::Store(_))));
}
