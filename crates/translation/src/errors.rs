//! Error types for the Hookcord translation domain.
//!
//! Only two things can go wrong around translation, and neither happens inside
//! a translation rule:
//!
//! - [`InputError`]: the inbound request could not be turned into an
//!   [`crate::InboundEvent`] at all. The caller rejects the request.
//! - [`DeliveryError`]: a [`crate::NotificationSink`] could not hand the
//!   translated message to the destination. The caller logs it and still
//!   acknowledges the inbound request.
//!
//! Missing payload fields and unrecognized event types are not errors; they
//! resolve to defaults and the fallback rule respectively.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Inbound errors
// ---------------------------------------------------------------------------

/// The inbound request does not describe a translatable event.
#[derive(Debug, Error)]
pub enum InputError {
    /// No event type tag was supplied (GitHub sends it in `X-GitHub-Event`).
    #[error("Missing event type")]
    MissingEventType,

    /// The request body is not valid JSON.
    #[error("Malformed payload: {source}")]
    MalformedPayload {
        /// Underlying parser error.
        #[from]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Delivery errors
// ---------------------------------------------------------------------------

/// A translated message could not be delivered to the destination.
///
/// Delivery is never retried by Hookcord; the listener logs the failure and
/// moves on.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request never produced an HTTP response (DNS, TLS, connect,
    /// timeout, ...).
    #[error("Delivery transport failed: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The destination answered with a non-success status.
    #[error("Destination rejected the message with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the destination.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
}
