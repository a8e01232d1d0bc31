use axum::Router;
use domain_proteins::{handlers, MongoProteinRepository, ProteinService};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = MongoProteinRepository::with_collection(&state.db, &state.config.collection);
    let service = ProteinService::new(repository);
    handlers::router(service)
}
