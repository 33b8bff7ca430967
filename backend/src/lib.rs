use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;

pub use config::{ConfigError, SiteConfig};

async fn health_check() -> &'static str {
    "OK"
}

/// Serves the built landing page. Unknown paths get `index.html`, so a
/// reload on any anchor still lands on the page.
pub fn app(config: &SiteConfig) -> Router {
    let site = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));
    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
