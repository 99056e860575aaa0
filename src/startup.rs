//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{UserService, UserServiceImpl};
use crate::config::{Settings, StoreBackend};
use crate::domain::UserRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryUserRepository, PgUserRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire a user service on top of the given store.
    pub fn with_repository<R>(repo: Arc<R>, settings: Settings) -> Self
    where
        R: UserRepository + 'static,
    {
        Self {
            users: Arc::new(UserServiceImpl::new(repo)),
            settings: Arc::new(settings),
        }
    }
}

/// Open the store selected in the settings.
async fn build_state(settings: &Settings) -> Result<AppState> {
    let state = match settings.store.backend {
        StoreBackend::Memory => {
            AppState::with_repository(Arc::new(InMemoryUserRepository::new()), settings.clone())
        }
        StoreBackend::Postgres => {
            let pool = database::create_pool(&settings.database)
                .await
                .context("Failed to create database pool")?;
            tracing::info!("Database connection pool created");
            AppState::with_repository(Arc::new(PgUserRepository::new(pool)), settings.clone())
        }
    };

    tracing::info!(backend = %settings.store.backend, "User store ready");
    Ok(state)
}

/// Full router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(create_trace_layer())
            .layer(cors),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let addr: SocketAddr = settings
            .server
            .socket_addr()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;

        let state = build_state(&settings).await?;
        let router = build_router(state);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until Ctrl-C or SIGTERM
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
