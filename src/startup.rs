//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::domain::DomainRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PgDomainRepository;
use crate::presentation::http::routes;
use crate::presentation::middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub domain_repository: Arc<dyn DomainRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build state over an arbitrary repository implementation.
    ///
    /// Production wiring uses `PgDomainRepository`; tests substitute a fake.
    pub fn new(db: PgPool, domain_repository: Arc<dyn DomainRepository>, settings: Settings) -> Self {
        Self {
            db,
            domain_repository,
            settings: Arc::new(settings),
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        // Apply pending migrations
        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        let domain_repository = Arc::new(PgDomainRepository::new(db.clone()));

        // Create app state
        let state = AppState::new(db, domain_repository, settings.clone());

        // Build router with middleware
        let router = routes::create_router(state).layer(middleware::create_trace_layer());

        // Bind to address
        let addr: SocketAddr = settings.server_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
