//! HTTP handlers for the protein API

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    ErrorResponse, ValidatedQuery,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};
use validator::Validate;

use crate::error::{ProteinError, ProteinResult};
use crate::models::{Protein, Review};
use crate::repository::ProteinRepository;
use crate::service::ProteinService;

/// OpenAPI documentation for the protein endpoints
#[derive(OpenApi)]
#[openapi(
    paths(get_protein, list_by_organism, top_rated),
    components(
        schemas(Protein, Review, ErrorResponse),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Proteins", description = "Read-only protein records and review rankings")
    )
)]
pub struct ApiDoc;

/// Query parameters for the top-rated listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopRatedQuery {
    /// Maximum number of proteins to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be greater than 0"))]
    #[param(minimum = 1, default = 10, example = 10)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Router with the three protein endpoints mounted at their full paths
pub fn router<R: ProteinRepository + 'static>(service: ProteinService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/protein/{protein_id}", get(get_protein::<R>))
        .route("/proteins/organism/{organism}", get(list_by_organism::<R>))
        .route("/proteins/top-rated", get(top_rated::<R>))
        .with_state(shared_service)
}

/// Get a protein by its identifier
#[utoipa::path(
    get,
    path = "/protein/{protein_id}",
    tag = "Proteins",
    params(
        ("protein_id" = String, Path, description = "Unique protein identifier", example = "P12345")
    ),
    responses(
        (status = 200, description = "Protein found", body = Protein),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_protein<R: ProteinRepository>(
    State(service): State<Arc<ProteinService<R>>>,
    Path(protein_id): Path<String>,
) -> ProteinResult<Json<Protein>> {
    let protein = service.get_protein(&protein_id).await?;
    Ok(Json(protein))
}

/// List proteins belonging to an organism
#[utoipa::path(
    get,
    path = "/proteins/organism/{organism}",
    tag = "Proteins",
    params(
        ("organism" = String, Path, description = "Exact organism name", example = "Homo sapiens")
    ),
    responses(
        (status = 200, description = "Proteins for the organism, in stored order", body = Vec<Protein>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_by_organism<R: ProteinRepository>(
    State(service): State<Arc<ProteinService<R>>>,
    Path(organism): Path<String>,
) -> ProteinResult<Json<Vec<Protein>>> {
    let proteins = service.list_by_organism(&organism).await?;
    non_empty(proteins).map(Json)
}

/// Top-rated proteins by average review rating
///
/// Proteins without reviews are ranked after all reviewed ones.
#[utoipa::path(
    get,
    path = "/proteins/top-rated",
    tag = "Proteins",
    params(TopRatedQuery),
    responses(
        (status = 200, description = "At most `limit` proteins, highest average first", body = Vec<Protein>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn top_rated<R: ProteinRepository>(
    State(service): State<Arc<ProteinService<R>>>,
    ValidatedQuery(query): ValidatedQuery<TopRatedQuery>,
) -> ProteinResult<Json<Vec<Protein>>> {
    let proteins = service.top_rated(query.limit).await?;
    non_empty(proteins).map(Json)
}

/// List endpoints answer 404 instead of an empty array.
fn non_empty(proteins: Vec<Protein>) -> ProteinResult<Vec<Protein>> {
    if proteins.is_empty() {
        Err(ProteinError::proteins_not_found())
    } else {
        Ok(proteins)
    }
}
