//! MongoDB implementation of ProteinRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};
use tracing::instrument;

use crate::error::ProteinResult;
use crate::models::{Protein, ProteinRatings};
use crate::repository::ProteinRepository;

pub const DEFAULT_COLLECTION: &str = "protein_info";

pub struct MongoProteinRepository {
    collection: Collection<Protein>,
    ratings: Collection<ProteinRatings>,
}

impl MongoProteinRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Protein>(collection_name);
        let ratings = collection.clone_with_type::<ProteinRatings>();
        Self {
            collection,
            ratings,
        }
    }
}

#[async_trait]
impl ProteinRepository for MongoProteinRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, protein_id: &str) -> ProteinResult<Option<Protein>> {
        let protein = self
            .collection
            .find_one(doc! { "protein_id": protein_id })
            .await?;
        Ok(protein)
    }

    #[instrument(skip(self))]
    async fn find_by_organism(&self, organism: &str) -> ProteinResult<Vec<Protein>> {
        let cursor = self.collection.find(doc! { "organism": organism }).await?;
        let proteins: Vec<Protein> = cursor.try_collect().await?;
        tracing::debug!(count = proteins.len(), "Fetched proteins by organism");
        Ok(proteins)
    }

    #[instrument(skip(self))]
    async fn find_ratings(&self) -> ProteinResult<Vec<ProteinRatings>> {
        let cursor = self
            .ratings
            .find(doc! {})
            .projection(doc! { "_id": 0, "protein_id": 1, "reviews.rating": 1 })
            .await?;
        let ratings: Vec<ProteinRatings> = cursor.try_collect().await?;
        tracing::debug!(count = ratings.len(), "Fetched protein ratings");
        Ok(ratings)
    }

    #[instrument(skip(self, protein_ids), fields(count = protein_ids.len()))]
    async fn find_by_ids(&self, protein_ids: &[String]) -> ProteinResult<Vec<Protein>> {
        let cursor = self
            .collection
            .find(doc! { "protein_id": { "$in": protein_ids.to_vec() } })
            .await?;
        let proteins: Vec<Protein> = cursor.try_collect().await?;
        Ok(proteins)
    }
}
