//! Process configuration.
//!
//! Every option can be given as a flag or through the environment variable
//! named next to it; flags win.

use std::net::IpAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use discord::{ConfigError, DiscordConfig};
use listener::config::{DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
use listener::ListenerConfig;

/// Output format of the log stream on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Multi-line, human-readable output for local runs.
    Pretty,
}

/// Relays GitHub webhook events to a Discord channel webhook.
#[derive(Debug, Parser)]
#[command(name = "hookcord", version)]
pub struct CliConfig {
    /// Discord webhook URL messages are posted to.
    #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub discord_webhook_url: String,

    /// Address the webhook listener binds to.
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: IpAddr,

    /// Port the webhook listener binds to.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Display name override for posted messages.
    #[arg(long, env = "DISCORD_USERNAME")]
    pub discord_username: Option<String>,

    /// Avatar URL override for posted messages.
    #[arg(long, env = "DISCORD_AVATAR_URL")]
    pub discord_avatar_url: Option<String>,

    /// Seconds allowed for one delivery request to Discord.
    #[arg(
        long,
        env = "DELIVERY_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub delivery_timeout_secs: u64,

    /// Largest accepted webhook body, in bytes.
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn listener_config(&self) -> ListenerConfig {
        ListenerConfig {
            bind_address: self.bind_address,
            port: self.port,
            max_body_bytes: self.max_body_bytes,
        }
    }

    /// Validates the webhook URL and assembles the delivery settings.
    pub fn discord_config(&self) -> Result<DiscordConfig, ConfigError> {
        Ok(DiscordConfig::new(&self.discord_webhook_url)?
            .with_username(self.discord_username.clone())
            .with_avatar_url(self.discord_avatar_url.clone())
            .with_timeout(Duration::from_secs(self.delivery_timeout_secs)))
    }
}
