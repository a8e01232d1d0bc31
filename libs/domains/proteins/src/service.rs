//! Protein service: lookups and top-rated ranking over a repository

use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProteinError, ProteinResult};
use crate::models::Protein;
use crate::ranking::rank_top_rated;
use crate::repository::ProteinRepository;

pub struct ProteinService<R: ProteinRepository> {
    repository: Arc<R>,
}

impl<R: ProteinRepository> ProteinService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a protein by its `protein_id`
    #[instrument(skip(self))]
    pub async fn get_protein(&self, protein_id: &str) -> ProteinResult<Protein> {
        self.repository
            .find_by_id(protein_id)
            .await?
            .ok_or_else(ProteinError::protein_not_found)
    }

    /// All proteins for an organism, in store order. May be empty.
    #[instrument(skip(self))]
    pub async fn list_by_organism(&self, organism: &str) -> ProteinResult<Vec<Protein>> {
        self.repository.find_by_organism(organism).await
    }

    /// Up to `limit` proteins ordered by average review rating, highest first.
    ///
    /// Proteins without reviews come after every reviewed one. `limit` must be
    /// positive and is checked before the store is touched. Ranking reads only
    /// ids and ratings; full records are fetched for the winners alone.
    #[instrument(skip(self))]
    pub async fn top_rated(&self, limit: i64) -> ProteinResult<Vec<Protein>> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|&l| l > 0)
            .ok_or_else(|| {
                ProteinError::InvalidArgument("limit must be greater than 0".to_string())
            })?;

        let ratings = self.repository.find_ratings().await?;
        let total = ratings.len();
        let ranked_ids: Vec<String> = rank_top_rated(ratings, limit)
            .into_iter()
            .map(|r| r.protein_id)
            .collect();
        if ranked_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<String, Protein> = self
            .repository
            .find_by_ids(&ranked_ids)
            .await?
            .into_iter()
            .map(|p| (p.protein_id.clone(), p))
            .collect();
        // Records deleted between the two reads are skipped.
        let ranked: Vec<Protein> = ranked_ids.iter().filter_map(|id| by_id.remove(id)).collect();

        tracing::debug!(total, returned = ranked.len(), "Ranked proteins");
        Ok(ranked)
    }
}
