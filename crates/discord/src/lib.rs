//! Hookcord Discord delivery adapter.
//!
//! Implements the [`translation::NotificationSink`] port over Discord's
//! channel webhook API: each [`translation::OutboundMessage`] is posted as a
//! single embed to the configured webhook URL.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, request formatting, and Discord's embed
//! size limits live here. The [`translation`] crate sees only
//! [`translation::NotificationSink`].
//!
//! ## Delivery semantics
//!
//! - One attempt per message. Hookcord never retries.
//! - Any `2xx` is success. Discord answers `204 No Content` by default.
//! - Any other status, or a transport failure, becomes a
//!   [`translation::DeliveryError`] for the caller to log.

pub mod client;
pub mod config;
pub mod limits;

pub use client::DiscordWebhookClient;
pub use config::{ConfigError, DiscordConfig};
