use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use backend::SiteConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = SiteConfig::from_env().context("invalid site configuration")?;
    if !config.index_file().exists() {
        tracing::warn!(
            "{} not found, build the frontend with `trunk build` first",
            config.index_file().display()
        );
    }
    let app = backend::app(&config);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!(
        "Serving {} on port {}",
        config.static_dir.display(),
        config.port
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
