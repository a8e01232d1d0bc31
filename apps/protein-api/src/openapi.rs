use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        axum_helpers::server::health::health_handler,
        crate::api::health::ready_handler,
    ),
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)),
    info(
        title = "Protein Information API",
        version = "0.1.0",
        description = "Read-only access to protein records and their reviews"
    ),
    tags((name = "health", description = "Liveness and readiness checks"))
)]
struct ServiceDoc;

/// Service endpoints merged with every domain's documentation
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_proteins::ApiDoc::openapi());
        doc
    }
}
