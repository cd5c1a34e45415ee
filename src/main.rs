use building_data::building::handlers::router;
use building_data::building::layout::SheetLayout;
use building_data::building::service::BuildingService;
use building_data::config::Config;
use building_data::sheets::fetcher::GoogleSheetsFetcher;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Config::from_env()?;

    tracing::info!(
        "Reading spreadsheet {} with {} layout",
        cfg.sheets.spreadsheet_id,
        cfg.layout.name()
    );
    match &cfg.layout {
        SheetLayout::SentinelRow { range } => {
            tracing::warn!(
                "Sentinel layout: the last row of {} is always treated as the gallery row. \
                 If the sheet has no trailing gallery row its last apartment will be dropped",
                range
            );
        }
        SheetLayout::SplitRanges { apartments, gallery } => {
            tracing::info!("Apartments from {}, gallery link from {}", apartments, gallery);
        }
    }
    if let Some(origin) = &cfg.cors_origin {
        tracing::info!("Allowing cross-origin GET requests from {:?}", origin);
    }

    // 1. Upstream fetcher:
    let fetcher = Arc::new(GoogleSheetsFetcher::new(&cfg.sheets)?);

    // 2. Normalizer:
    let service = BuildingService::new(fetcher, cfg.layout.clone());

    // 3. HTTP Router:
    let app = router(service, cfg.cors_origin.clone());

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on http://{}", cfg.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
