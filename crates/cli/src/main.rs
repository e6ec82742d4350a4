//! Hookcord entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse configuration**: flags and environment variables via `clap`
//!    (see [`config::CliConfig`]).
//! 2. **Wire observability**: configure `tracing-subscriber` with a JSON (or
//!    pretty) layer and, when `OTEL_EXPORTER_OTLP_ENDPOINT` is set, an
//!    OpenTelemetry OTLP exporter.
//! 3. **Construct infrastructure**: build the [`discord::DiscordWebhookClient`]
//!    and inject it into the [`listener`] as its
//!    [`translation::NotificationSink`].
//! 4. **Serve**: run the webhook listener until Ctrl-C or `SIGTERM`, letting
//!    in-flight requests finish.

mod config;
mod telemetry;

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser as _;
use discord::DiscordWebhookClient;
use tracing::{error, info, warn};
use translation::NotificationSink;

use crate::config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    let telemetry = telemetry::init(config.log_format);

    let result = run(config).await;
    if let Err(e) = &result {
        error!(error = format!("{e:#}"), "Hookcord stopped with an error");
    }

    telemetry.shutdown();
    result
}

async fn run(config: CliConfig) -> anyhow::Result<()> {
    let discord = config
        .discord_config()
        .context("Invalid Discord webhook configuration")?;
    info!(webhook = %discord.redacted_url(), "Discord delivery configured");

    let sink: Arc<dyn NotificationSink> =
        Arc::new(DiscordWebhookClient::new(discord).context("Failed to build Discord client")?);

    listener::serve(config.listener_config(), sink, shutdown_signal())
        .await
        .context("Webhook listener failed")?;

    Ok(())
}

/// Resolves on Ctrl-C, or `SIGTERM` on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl-C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
