use async_trait::async_trait;

use crate::error::ProteinResult;
use crate::models::{Protein, ProteinRatings};

/// Read-only access to protein records.
///
/// Store failures surface as `ProteinError::Store`; nothing is retried or masked.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProteinRepository: Send + Sync {
    /// Exact match on `protein_id`
    async fn find_by_id(&self, protein_id: &str) -> ProteinResult<Option<Protein>>;

    /// Exact match on `organism`, in store order. Empty when nothing matches.
    async fn find_by_organism(&self, organism: &str) -> ProteinResult<Vec<Protein>>;

    /// Id and review ratings of every record, in store order
    async fn find_ratings(&self) -> ProteinResult<Vec<ProteinRatings>>;

    /// Full records whose `protein_id` is in `protein_ids`. Order is unspecified.
    async fn find_by_ids(&self, protein_ids: &[String]) -> ProteinResult<Vec<Protein>>;
}
