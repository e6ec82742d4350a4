use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};
use translation::{translate, InboundEvent, NotificationSink, TranslationResult};
use uuid::Uuid;

use crate::config::ListenerConfig;
use crate::health::health_handler;

const GITHUB_EVENT_HEADER: &str = "x-github-event";
const GITHUB_DELIVERY_HEADER: &str = "x-github-delivery";

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Server(#[from] std::io::Error),
}

/// Shared request-handler state.
#[derive(Clone)]
pub struct AppState {
    sink: Arc<dyn NotificationSink>,
    pub(crate) started_at: Instant,
}

impl AppState {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            sink,
            started_at: Instant::now(),
        }
    }
}

/// What happened to a webhook request that carried a valid event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome {
    Ignored,
    Delivered,
    Undelivered,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Delivered => "delivered",
            Self::Undelivered => "undelivered",
        }
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: Outcome,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Builds the application router.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health_handler).post(handle_webhook))
        .route("/webhook", post(handle_webhook))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Binds `config`'s address and serves until `shutdown` resolves.
pub async fn serve<F>(
    config: ListenerConfig,
    sink: Arc<dyn NotificationSink>,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    serve_on(listener, config.max_body_bytes, sink, shutdown).await
}

/// Serves on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve_on<F>(
    listener: TcpListener,
    max_body_bytes: usize,
    sink: Arc<dyn NotificationSink>,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(AppState::new(sink), max_body_bytes);

    info!(addr = %listener.local_addr()?, "GitHub webhook listener ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("GitHub webhook listener stopped");
    Ok(())
}

#[instrument(
    name = "github.webhook",
    skip_all,
    fields(
        event = tracing::field::Empty,
        delivery = tracing::field::Empty,
        outcome = tracing::field::Empty,
    )
)]
async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let span = tracing::Span::current();

    let delivery = header_str(&headers, GITHUB_DELIVERY_HEADER)
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    span.record("delivery", delivery.as_str());

    let event = match InboundEvent::parse(header_str(&headers, GITHUB_EVENT_HEADER), &body) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Rejected GitHub webhook request");
            span.record("outcome", "rejected");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };
    span.record("event", event.event_type());

    let outcome = match translate(&event) {
        TranslationResult::Suppressed => {
            info!("GitHub event produces no notification");
            Outcome::Ignored
        }
        TranslationResult::Message(message) => match state.sink.deliver(&message).await {
            Ok(()) => {
                info!("Delivered notification");
                Outcome::Delivered
            }
            Err(e) => {
                warn!(error = %e, "Failed to deliver notification");
                Outcome::Undelivered
            }
        },
    };
    span.record("outcome", outcome.as_str());

    (StatusCode::OK, Json(StatusBody { status: outcome })).into_response()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
