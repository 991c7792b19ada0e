//! Parkar REST service without command-line flags.
//!
//! Configuration comes from `$PARKAR_CONFIG` or
//! `~/.config/parkar/config.toml`; the `parkar` CLI adds overrides.

use parkar::server::{init_tracing, ServerHandle, ServerOptions};
use parkar::{default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = default_config_path();
    let loaded = AppConfig::load(&path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(&config.logging);
    if let Err(e) = loaded {
        tracing::error!(config = %path.display(), error = %e, "Falling back to default configuration");
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: true,
    })
    .await?;
    handle.install_signal_handler();
    handle.shutdown_signal().wait().await;
    handle.wait().await;
    Ok(())
}
