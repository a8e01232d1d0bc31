use axum::http::{HeaderValue, Method, header};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// CORS layer for a read-only API: `GET`/`HEAD`/`OPTIONS` only, no credentials.
///
/// Origins come from a comma-separated list such as
/// `http://localhost:3000,https://example.com`.
pub fn create_cors_layer(allowed_origins: &str) -> io::Result<CorsLayer> {
    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<_, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600)))
}

/// Allows any origin. Development only.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Resolve the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// When the variable is unset, development falls back to a permissive
/// layer and production refuses to start.
pub fn cors_layer_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origins) => {
            let layer = create_cors_layer(&origins)?;
            info!("CORS configured with allowed origins: {}", origins);
            Ok(layer)
        }
        Err(_) if environment.is_production() => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required in production",
        )),
        Err(_) => {
            warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
            Ok(create_permissive_cors_layer())
        }
    }
}
