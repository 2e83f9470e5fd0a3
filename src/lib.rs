//! Hotel search service.
//!
//! Serves the read side of a hotel booking site over HTTP:
//!
//! - `GET /api/hotels/search` filters, sorts and paginates hotels from the
//!   query string (`destination`, `adultCount`, `childCount`, `facilities`,
//!   `types`, `stars`, `maxPrice`, `sortOption`, `page`)
//! - `GET /api/hotels` lists every hotel, most recently updated first
//! - `GET /api/hotels/:id` fetches one hotel
//!
//! Hotels live behind the [`store::HotelStore`] trait. The binary runs with
//! an in-memory store seeded from `HOTELS_SEED_PATH`.
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod search;
pub mod store;

use config::Config;
use routes::AppState;
use store::{HotelStore, MemoryStore};

/// Router with CORS and request tracing applied
pub fn app(state: AppState, config: &Config) -> Result<Router> {
    Ok(routes::router(state)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Ok(match &config.frontend_url {
        Some(origin) => cors
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid frontend origin {origin:?}"))?,
            )
            .allow_credentials(true),
        None => cors.allow_origin(Any),
    })
}

async fn load_store(config: &Config) -> Result<Arc<dyn HotelStore>> {
    let store = match &config.seed_path {
        Some(path) => MemoryStore::load(path)
            .await
            .with_context(|| format!("Failed to load hotels from {}", path.display()))?,
        None => {
            warn!("No seed path configured, starting with an empty hotel store");
            MemoryStore::new()
        }
    };

    if store.is_empty().await {
        warn!("Hotel store is empty, searches will return no results");
    } else {
        info!("Hotel store ready with {} hotels", store.len().await);
    }

    Ok(Arc::new(store))
}

pub async fn start_server(config: Config) -> Result<()> {
    info!("Initializing state...");
    let state = AppState::new(load_store(&config).await?);
    let app = app(state, &config)?;

    let address = config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
