//! Blaze probe - opens one authenticated gateway connection and reports the outcome.

use std::path::PathBuf;

use clap::Parser;
use futures_util::SinkExt;
use tokio_tungstenite::tungstenite::Message;

use blaze_client::config::{Config, DEFAULT_ENVIRONMENT};
use blaze_client::{connect_blaze, logging};
use blaze_common::{BLAZE_SUBPROTOCOL, BLAZE_URL};

#[derive(Parser)]
#[command(
    name = "blaze-probe",
    version,
    about = "Open an authenticated connection to the Blaze gateway"
)]
struct Cli {
    /// Environment whose configuration file is layered over config.toml
    #[arg(long, env = "BLAZE_ENV", default_value = DEFAULT_ENVIRONMENT)]
    env: String,

    /// Directory containing config.toml and config.<env>.toml
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config_dir, &cli.env).map_err(|e| {
        format!(
            "Failed to load configuration: {}. \
             Make sure config.toml exists or set BLAZE__MIXIN__APP_ID, \
             BLAZE__MIXIN__SESSION_ID and BLAZE__MIXIN__PRIVATE_KEY environment variables.",
            e
        )
    })?;

    logging::init(&config.logging.level);
    tracing::info!(
        "Connecting to {} as {} ({})",
        BLAZE_URL,
        config.mixin.app_id,
        config.environment
    );

    let mut connection = match connect_blaze(&config.identity()).await {
        Ok(connection) => connection,
        Err(e) => {
            tracing::error!(
                kind = e.kind(),
                retryable = e.is_retryable(),
                "Gateway connection failed: {}",
                e
            );
            return Err(e.into());
        }
    };
    tracing::info!("Connected to gateway ({})", BLAZE_SUBPROTOCOL);

    if let Err(e) = connection.send(Message::Close(None)).await {
        tracing::warn!("Failed to close gateway connection cleanly: {}", e);
    }

    Ok(())
}
