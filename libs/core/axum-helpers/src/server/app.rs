use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::Environment;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Combine the API routes with documentation UIs and cross-cutting layers.
///
/// `apis` is merged at the root, so its paths are served exactly as
/// declared. On top of it this adds:
/// - `/api-docs/openapi.json` with Swagger UI (`/swagger-ui`), `/redoc`,
///   `/rapidoc` and `/scalar`
/// - a `{"detail": "Not Found"}` fallback
/// - request tracing, security headers, CORS and response compression
///
/// Fails when CORS cannot be configured (see [`cors_layer_from_env`]).
pub fn create_router<T>(apis: Router, environment: &Environment) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = cors_layer_from_env(environment)?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` with coordinated shutdown.
///
/// On Ctrl+C/SIGTERM the listener stops accepting, in-flight requests
/// drain, then `cleanup` runs with at most `shutdown_timeout` to finish.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[utoipa::path(get, path = "/ping", responses((status = 200, body = String)))]
    async fn ping() -> &'static str {
        "pong"
    }

    #[derive(OpenApi)]
    #[openapi(paths(ping))]
    struct TestDoc;

    fn router() -> Router {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<TestDoc>(
                Router::new().route("/ping", get(ping)),
                &Environment::Development,
            )
            .unwrap()
        })
    }

    async fn get_uri(uri: &str) -> axum::response::Response {
        router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_served_at_root() {
        let response = get_uri("/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_paths() {
        let response = get_uri("/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc["paths"].get("/ping").is_some());
    }

    #[tokio::test]
    async fn test_unknown_path_uses_detail_fallback() {
        let response = get_uri("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"detail":"Not Found"}"#);
    }

    #[test]
    fn test_production_without_cors_origin_fails() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let result = create_router::<TestDoc>(Router::new(), &Environment::Production);
            assert!(result.is_err());
        });
    }
}
