//! `parkar` command line entrypoint
//!
//! ```sh
//! parkar                                   # ~/.config/parkar/config.toml
//! parkar -c /etc/parkar/config.toml --port 9090
//! parkar --database-url sqlite://parkar.db?mode=rwc
//! parkar --check                           # validate and print the effective config
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use parkar::config::AppConfig;
use parkar::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "parkar",
    version,
    about = "Parking lot reservation backend",
    long_about = "Serves the Parkar REST API: parking lots, blocks, slots, time frames, \
                  vehicles, favorites and ticket booking."
)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "PARKAR_CONFIG")]
    config: Option<PathBuf>,

    /// Listen host
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite or PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `parkar=debug,sqlx=warn`
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,

    /// Do not apply pending migrations on startup
    #[arg(long)]
    no_migrate: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(parkar::default_config_path);

    let mut config = match AppConfig::load(&path) {
        Ok(config) => config,
        Err(e) if cli.check => {
            eprintln!("{}: {}", path.display(), e);
            return Err(e.into());
        }
        Err(e) => {
            eprintln!("Ignoring {}: {}", path.display(), e);
            AppConfig::default()
        }
    };
    cli.apply(&mut config);

    if cli.check {
        config.validate()?;
        println!("{} OK", path.display());
        println!("  listen    {}", config.server.address());
        println!("  database  {}", config.database.connection_url());
        println!("  logging   {} ({})", config.logging.level, config.logging.format);
        return Ok(());
    }

    init_tracing(&config.logging);
    info!(config = %path.display(), "Configuration loaded");
    if cli.no_migrate {
        warn!("Skipping migrations");
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;
    handle.install_signal_handler();

    handle.shutdown_signal().wait().await;
    handle.wait().await;
    Ok(())
}
