//! Hookcord inbound transport.
//!
//! Binds an HTTP server that receives GitHub webhook deliveries, translates
//! each one with [`translation::translate`], and hands any resulting message to
//! a [`translation::NotificationSink`].
//!
//! ## Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `POST` | `/`, `/webhook` | GitHub webhook delivery |
//! | `GET` | `/`, `/health` | Liveness check |
//!
//! ## Responses to GitHub
//!
//! | Situation | Status | Body |
//! |-----------|--------|------|
//! | Missing `X-GitHub-Event` or invalid JSON | `400` | `{"error": "..."}` |
//! | Event suppressed | `200` | `{"status": "ignored"}` |
//! | Message delivered | `200` | `{"status": "delivered"}` |
//! | Delivery failed | `200` | `{"status": "undelivered"}` |
//! | Body over the configured limit | `413` | none |
//!
//! A failed delivery is logged and still acknowledged: GitHub redelivering the
//! event would not make Discord accept it.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Header handling, body limits, and response codes live
//! here. Request signature verification is not performed.

pub mod config;
pub mod health;
pub mod server;

pub use config::ListenerConfig;
pub use server::{router, serve, serve_on, AppState, ServeError};
