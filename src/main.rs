// src/main.rs
mod config;
mod database;
mod docs;
mod dtos;
mod error;
mod handlers;
mod models;
mod repositories;
mod routes;
mod state;
mod validation;


use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::repositories::PgProductRepository;

/// Extra ports tried after `PORT` when it is already in use.
const PORT_ATTEMPTS: u16 = 20;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("online_retail_api=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Create database pool
    let db_pool = match database::create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create database pool");
            return ExitCode::FAILURE;
        }
    };

    // Create application state
    let app_state = state::AppState::new(Arc::new(PgProductRepository::new(db_pool)));
    let app = routes::build_app(app_state);

    let Some((listener, addr)) = bind_first_free(&config).await else {
        tracing::error!(
            host = %config.host,
            port = config.port,
            "Failed to bind to any port in range"
        );
        return ExitCode::FAILURE;
    };
    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/api-docs", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error=%e, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Server stopped");
    ExitCode::SUCCESS
}

/// Binds the first free port in `PORT..=PORT+PORT_ATTEMPTS`.
async fn bind_first_free(config: &Config) -> Option<(TcpListener, SocketAddr)> {
    for offset in 0..=PORT_ATTEMPTS {
        let addr = SocketAddr::from((config.host, config.port.saturating_add(offset)));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Some((listener, addr)),
            Err(e) if offset == 0 => {
                tracing::warn!(%addr, error = %e, "Port in use, trying next");
            }
            Err(_) => {}
        }
    }
    None
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for_port(port: u16) -> Config {
        let port = port.to_string();
        Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/retail".to_string()),
            "PORT" => Some(port.clone()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn busy_port_falls_through_to_a_later_one() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy_port = taken.local_addr().unwrap().port();

        let (_listener, addr) = bind_first_free(&config_for_port(busy_port)).await.unwrap();

        assert_ne!(addr.port(), busy_port);
        assert!(addr.port() > busy_port && addr.port() <= busy_port.saturating_add(PORT_ATTEMPTS));
    }
}
