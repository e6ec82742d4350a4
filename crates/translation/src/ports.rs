//! Port traits implemented by infrastructure crates.

use async_trait::async_trait;

use crate::{DeliveryError, OutboundMessage};

/// Destination for translated messages.
///
/// Implemented by the `discord` crate over Discord's webhook API. The listener
/// holds one `Arc<dyn NotificationSink>` for the lifetime of the process and
/// calls it from concurrent request tasks.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers one message.
    ///
    /// Implementations make a single attempt; retrying is the caller's
    /// decision and Hookcord never retries.
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;
}
