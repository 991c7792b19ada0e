//! Service lifecycle shared by both binaries: connect, migrate, serve
//! the router, drain on shutdown and close the pool.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::{AppConfig, LoggingConfig};
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, SeaOrmRepositoryProvider};
use crate::interfaces::http::{create_api_router, AppState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};
use crate::shared::MessageTable;

pub struct ServerOptions {
    pub config: AppConfig,
    /// Apply pending migrations before serving
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

/// A running service.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use parkar::server::{ServerHandle, ServerOptions};
///
/// let handle = ServerHandle::start(ServerOptions::default()).await?;
/// handle.install_signal_handler();
/// handle.shutdown_signal().wait().await;
/// handle.wait().await;
/// # Ok(())
/// # }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,
    /// Bound address, resolved when `server.port` is 0
    pub local_addr: std::net::SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        let db_config = app_cfg.database_config();
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            let pending = Migrator::get_pending_migrations(&db).await?.len();
            Migrator::up(&db, None).await?;
            info!(applied = pending, "Schema up to date");
        }

        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(
            db.clone(),
            db_config.timeouts,
        ));
        let state = AppState::new(
            db.clone(),
            repos.clone(),
            app_cfg.auth_settings(),
            Arc::new(MessageTable::default()),
        );

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, docs = "/swagger-ui/", "Parkar listening");

        let serve = axum::serve(listener, create_api_router(state))
            .with_graceful_shutdown(async move { shutdown_signal.wait().await });
        let api_task = tokio::spawn(async move {
            if let Err(e) = serve.await {
                error!(error = %e, "HTTP server failed");
            }
        });

        Ok(Self {
            repos,
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Trigger shutdown on SIGTERM or Ctrl+C
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Block until shutdown is triggered, then drain in-flight requests
    /// for at most `server.shutdown_timeout` seconds.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            api_task,
            ..
        } = self;

        let drained = shutdown
            .shutdown_with_cleanup(|| async move {
                if let Err(e) = api_task.await {
                    error!(error = %e, "HTTP server task panicked");
                }
            })
            .await;
        if !drained {
            warn!("In-flight requests were cut off");
        }

        if let Err(e) = db.close().await {
            warn!(error = %e, "Closing database pool failed");
        }
        info!("Parkar stopped");
    }

    pub async fn shutdown(self) {
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`.
pub fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    match config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ServerOptions {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = 0;
        config.server.shutdown_timeout = 5;
        // A second pooled connection would open a separate empty database.
        config.database.url = "sqlite::memory:".into();
        config.database.max_connections = 1;
        ServerOptions {
            config,
            auto_migrate: true,
        }
    }

    #[tokio::test]
    async fn serves_health_until_shutdown() {
        let handle = ServerHandle::start(options()).await.unwrap();
        assert!(handle.is_running());

        let mut stream = tokio::net::TcpStream::connect(handle.local_addr).await.unwrap();
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn rejects_invalid_config() {
        let mut opts = options();
        opts.config.logging.format = "yaml".into();
        assert!(ServerHandle::start(opts).await.is_err());
    }
}
