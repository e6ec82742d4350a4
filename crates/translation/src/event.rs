//! The inbound unit of work.

use serde_json::Value;

use crate::{classify, EventKind, InputError};

/// A GitHub webhook delivery: the event type tag plus its raw JSON payload.
///
/// The payload is kept as an untyped tree; each translation rule reads the
/// fields it needs through the lenient views in [`crate::payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    event_type: String,
    payload: Value,
}

impl InboundEvent {
    /// Creates an event from an already-parsed payload.
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }

    /// Builds an event from a request's type tag and raw body.
    ///
    /// # Errors
    ///
    /// - [`InputError::MissingEventType`] if `event_type` is absent or blank.
    /// - [`InputError::MalformedPayload`] if `body` is not valid JSON.
    pub fn parse(event_type: Option<&str>, body: &[u8]) -> Result<Self, InputError> {
        let event_type = event_type
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .ok_or(InputError::MissingEventType)?;
        let payload = serde_json::from_slice(body)?;
        Ok(Self::new(event_type, payload))
    }

    /// The event type tag as received.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Classifies this event; see [`classify`].
    pub fn kind(&self) -> EventKind {
        classify(&self.event_type)
    }
}
