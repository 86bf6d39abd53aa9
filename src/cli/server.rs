use std::{sync::Arc, time::Duration};

use anyhow::Result;
use sufra::{config::Config, routes::AppState};
use sufra_nutrition::{Disabled, NutritionLookup, Spoonacular};
use sufra_shared::State;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

fn nutrition_lookup(config: &Config) -> Result<Arc<dyn NutritionLookup>> {
    if config.nutrition.api_key.is_empty() {
        tracing::warn!("nutrition api key not set, nutrition lookups disabled");
        return Ok(Arc::new(Disabled));
    }

    let client = Spoonacular::new(
        config.nutrition.api_key.to_owned(),
        config.nutrition.base_url.to_owned(),
        Duration::from_secs(config.nutrition.timeout_secs),
    )?;

    Ok(Arc::new(client))
}

pub async fn serve(config: Config, host_override: Option<String>, port_override: Option<u16>) -> Result<()> {
    tracing::info!("Starting sufra server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // One writer, many readers
    let write_pool = sufra::db::create_write_pool(&config.database.url).await?;
    let read_pool = sufra::db::create_read_pool(&config.database.url, config.database.max_connections).await?;

    let state = State {
        read_db: read_pool.clone(),
        write_db: write_pool.clone(),
    };

    let nutrition = nutrition_lookup(&config)?;
    let app = sufra::routes::router(AppState::new(config, state, nutrition))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pools...");
    read_pool.close().await;
    write_pool.close().await;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
