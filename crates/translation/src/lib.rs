//! Core translation domain for Hookcord.
//!
//! This crate turns GitHub webhook deliveries into Discord embeds. It contains
//! the inbound event model, the event classifier, one translation rule per
//! supported event type, the outbound message types, and the
//! [`NotificationSink`] port that delivery adapters implement.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! Translation is synchronous, stateless, and safe to call from any number of
//! request tasks at once. Transport and delivery live in the `listener` and
//! `discord` crates.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`event`] | [`InboundEvent`]: type tag plus raw JSON payload |
//! | [`classifier`] | [`EventKind`] and [`classify`] |
//! | [`payload`] | Lenient, all-optional views over GitHub payloads |
//! | [`translator`] | [`translate`] and the per-event rules |
//! | [`identifiers`] | Newtype identifiers (`CommitSha`, `BranchName`, ...) |
//! | [`types`] | Outbound message types (`OutboundMessage`, `EmbedColor`, ...) |
//! | [`errors`] | [`InputError`] and [`DeliveryError`] |
//! | [`ports`] | [`NotificationSink`] |

pub mod classifier;
pub mod errors;
pub mod event;
pub mod identifiers;
pub mod payload;
pub mod ports;
pub mod translator;
pub mod types;

mod text;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use classifier::{classify, EventKind};
pub use errors::{DeliveryError, InputError};
pub use event::InboundEvent;
pub use identifiers::{BranchName, CommitSha};
pub use ports::NotificationSink;
pub use translator::{translate, translate_at};
pub use types::{EmbedColor, EmbedField, OutboundMessage, Timestamp, TranslationResult};
