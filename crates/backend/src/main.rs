use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use axum::{response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

/// Serve the SPA shell. Page routes all return the same document; the
/// frontend router resolves the station from the URL.
async fn serve_index(index_path: PathBuf) -> Html<String> {
    match std::fs::read_to_string(&index_path) {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Metroline Guide</title></head>
<body>
<h1>Metroline Guide</h1>
<p>Frontend not built yet. Run the frontend build and point DIST_DIR at its output.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}

/// Build the full application router over one frontend build directory.
///
/// `/` and `/station/{id}` serve the SPA shell so deep links survive a page
/// load. Hashed bundles under `/assets` cache forever; everything else in the
/// build directory revalidates daily.
fn build_app(dist_dir: &Path) -> Router {
    let index_for_root = dist_dir.join("index.html");
    let index_for_station = index_for_root.clone();

    Router::new()
        .route("/", get(move || serve_index(index_for_root.clone())))
        .route(
            "/station/{id}",
            get(move || serve_index(index_for_station.clone())),
        )
        .nest(
            "/assets",
            cached_static_router(&dist_dir.join("assets"), CACHE_IMMUTABLE),
        )
        .fallback_service(cached_static_router(dist_dir, CACHE_1DAY))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dist_dir = PathBuf::from(std::env::var("DIST_DIR").unwrap_or_else(|_| "dist".to_string()));
    let app = build_app(&dist_dir);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!(dist_dir = %dist_dir.display(), "Serving frontend build");
    tracing::info!("Server running at http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
