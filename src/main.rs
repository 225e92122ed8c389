use gift_card_service::repositories::{GiftCardRepository, GiftCardStore, MemoryGiftCardStore};
use gift_card_service::{AppState, Config, StoreBackend, create_router};
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the configuration
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    config.log_info();

    // Store -> service/state -> router
    let (store, pool) = build_store(&config).await?;
    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Teardown in reverse order
    if let Some(pool) = pool {
        info!("Closing database pool");
        pool.close().await;
    }
    info!("Server stopped");

    Ok(())
}

/// Builds the configured store, returning the pool too when there is one to close
async fn build_store(
    config: &Config,
) -> Result<(Arc<dyn GiftCardStore>, Option<MySqlPool>), Box<dyn std::error::Error>> {
    match (config.store_backend, &config.database_url) {
        (StoreBackend::MySql, Some(url)) => {
            let pool = MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
                .connect(url)
                .await?;
            info!("Connected to the database");
            let store: Arc<dyn GiftCardStore> = Arc::new(GiftCardRepository::new(pool.clone()));
            Ok((store, Some(pool)))
        }
        (StoreBackend::MySql, None) => {
            Err("DATABASE_URL must be set when STORE_BACKEND is mysql".into())
        }
        (StoreBackend::Memory, _) => {
            let store: Arc<dyn GiftCardStore> = Arc::new(MemoryGiftCardStore::new());
            Ok((store, None))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_memory_store() {
        let config = Config::from_lookup(|key| match key {
            "STORE_BACKEND" => Some("memory".to_string()),
            _ => None,
        })
        .unwrap();

        let (_store, pool) = build_store(&config).await.unwrap();
        assert!(pool.is_none());
    }
}
