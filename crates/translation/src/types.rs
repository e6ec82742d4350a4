//! Outbound message types.
//!
//! An [`OutboundMessage`] is one Discord embed. Its serde representation is the
//! embed object of Discord's webhook schema; delivery adapters wrap it in the
//! surrounding `{"embeds": [...]}` envelope.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// An RGB color packed into a single integer (`0xRRGGBB`), as Discord expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmbedColor(u32);

impl EmbedColor {
    /// Connection checks (ping).
    pub const INFORMATIONAL: Self = Self(0x58B9FF);
    /// Pushes, unrecognized events, and pull request actions with no color of
    /// their own.
    pub const NEUTRAL: Self = Self(0x7289DA);
    /// Opened items and published releases.
    pub const GREEN: Self = Self(0x2ECC71);
    /// Closed items.
    pub const RED: Self = Self(0xE74C3C);
    /// Merged pull requests.
    pub const PURPLE: Self = Self(0x9013FE);
    /// Reopened items.
    pub const YELLOW: Self = Self(0xFFFF00);

    /// Returns the packed `0xRRGGBB` value.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EmbedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Serialized as ISO-8601 with millisecond precision and a literal `Z` suffix
/// (e.g. `"2026-10-19T08:15:00.000Z"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Embeds
// ---------------------------------------------------------------------------

/// One `{name, value, inline}` entry of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body (Discord markdown).
    pub value: String,
    /// Whether Discord may render this field side by side with its neighbours.
    pub inline: bool,
}

impl EmbedField {
    /// A field Discord may place next to other inline fields.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    /// A field that always takes a full row.
    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// A single Discord embed produced from one GitHub event.
///
/// The order of [`fields`](Self::fields) is significant; Discord renders them
/// positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub title: String,

    /// May be empty; an empty description is left out of the serialized embed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub color: EmbedColor,

    /// Permalink for the event, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,

    /// Moment of translation, not a time taken from the event.
    pub timestamp: Timestamp,
}

impl OutboundMessage {
    /// Starts a message with no description, URL, or fields.
    pub fn new(title: impl Into<String>, color: EmbedColor, timestamp: Timestamp) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            color,
            url: None,
            fields: Vec::new(),
            timestamp,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the permalink. Empty strings are treated as "no URL".
    pub fn with_url(mut self, url: Option<&str>) -> Self {
        self.url = url.filter(|u| !u.is_empty()).map(str::to_owned);
        self
    }

    /// Appends a field after the existing ones.
    pub fn with_field(mut self, field: EmbedField) -> Self {
        self.fields.push(field);
        self
    }
}

// ---------------------------------------------------------------------------
// Translation outcome
// ---------------------------------------------------------------------------

/// Outcome of translating one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// The event produced a message to deliver.
    Message(OutboundMessage),
    /// The event is valid but deliberately produces no message (e.g. a push
    /// without commits, a release that was only edited).
    Suppressed,
}

impl TranslationResult {
    /// Returns `true` if no message should be delivered.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }

    /// Borrows the message, if any.
    pub fn message(&self) -> Option<&OutboundMessage> {
        match self {
            Self::Message(message) => Some(message),
            Self::Suppressed => None,
        }
    }
}

impl From<OutboundMessage> for TranslationResult {
    fn from(message: OutboundMessage) -> Self {
        Self::Message(message)
    }
}
