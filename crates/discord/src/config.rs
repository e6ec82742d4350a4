use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Default time allowed for one delivery request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Problems with the Discord adapter's configuration. Raised at startup only.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Discord webhook URL is not a valid URL: {reason}")]
    InvalidWebhookUrl { reason: String },

    #[error("Discord webhook URL must use http or https, got '{scheme}'")]
    UnsupportedScheme { scheme: String },

    #[error("HTTP client could not be built: {reason}")]
    HttpClient { reason: String },
}

/// Settings for [`crate::DiscordWebhookClient`].
///
/// The webhook URL embeds Discord's webhook token; treat it as a secret and
/// log [`DiscordConfig::redacted_url`] instead.
#[derive(Clone)]
pub struct DiscordConfig {
    pub webhook_url: Url,
    /// Overrides the webhook's default display name.
    pub username: Option<String>,
    /// Overrides the webhook's default avatar.
    pub avatar_url: Option<String>,
    pub timeout: Duration,
}

impl DiscordConfig {
    /// Validates `webhook_url` and builds a config with default settings.
    pub fn new(webhook_url: &str) -> Result<Self, ConfigError> {
        let webhook_url = Url::parse(webhook_url).map_err(|e| ConfigError::InvalidWebhookUrl {
            reason: e.to_string(),
        })?;

        match webhook_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_owned(),
                })
            }
        }

        Ok(Self {
            webhook_url,
            username: None,
            avatar_url: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username.filter(|u| !u.is_empty());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url.filter(|u| !u.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Scheme and host of the webhook URL, safe to log.
    pub fn redacted_url(&self) -> String {
        format!(
            "{}://{}/…",
            self.webhook_url.scheme(),
            self.webhook_url.host_str().unwrap_or("?")
        )
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("webhook_url", &self.redacted_url())
            .field("username", &self.username)
            .field("avatar_url", &self.avatar_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
