use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};
use translation::{DeliveryError, NotificationSink, OutboundMessage};

use crate::config::{ConfigError, DiscordConfig};
use crate::limits;

/// Longest error response body kept in a [`DeliveryError::Rejected`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Request body of Discord's "Execute Webhook" endpoint.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'a str>,
    embeds: [&'a OutboundMessage; 1],
}

/// Posts translated messages to one Discord channel webhook.
///
/// Cheap to share: the inner `reqwest::Client` pools connections, and the
/// listener keeps a single instance behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DiscordWebhookClient {
    http: reqwest::Client,
    config: DiscordConfig,
}

impl DiscordWebhookClient {
    pub fn new(config: DiscordConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("hookcord/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl NotificationSink for DiscordWebhookClient {
    #[instrument(
        name = "discord.deliver",
        skip_all,
        fields(webhook = %self.config.redacted_url(), title = %message.title)
    )]
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        let embed = limits::clamp(message);
        let payload = WebhookPayload {
            username: self.config.username.as_deref(),
            avatar_url: self.config.avatar_url.as_deref(),
            embeds: [&embed],
        };

        let response = self
            .http
            .post(self.config.webhook_url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport {
                // Drop the URL from reqwest's message; it carries the webhook token.
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Discord accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        })
    }
}
