//! Observability wiring.
//!
//! Logs go to stderr through `tracing-subscriber`, filtered by `RUST_LOG`
//! (default `info`). When `OTEL_EXPORTER_OTLP_ENDPOINT` is set, spans are also
//! exported over OTLP/HTTP; if the exporter can't be built the process keeps
//! running with local logging only.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::SpanExporter;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LogFormat;

const OTEL_SERVICE_NAME: &str = "hookcord";
const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Handle to the installed telemetry; flush it before the process exits.
pub struct Telemetry {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Telemetry {
    pub fn shutdown(self) {
        let Some(provider) = self.tracer_provider else {
            return;
        };
        tracing::info!("Shutting down OpenTelemetry tracer provider");
        if let Err(e) = provider.force_flush() {
            eprintln!("Failed to flush tracer provider: {e}");
        }
        if let Err(e) = provider.shutdown() {
            eprintln!("Failed to shutdown tracer provider: {e}");
        }
    }
}

/// Installs the global `tracing` subscriber.
pub fn init(format: LogFormat) -> Telemetry {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty()
            .boxed(),
    };

    let otel = if std::env::var_os(OTLP_ENDPOINT_ENV).is_some() {
        Some(init_tracer_provider())
    } else {
        None
    };

    match otel {
        Some(Ok(provider)) => {
            opentelemetry::global::set_tracer_provider(provider.clone());
            let otel_layer =
                tracing_opentelemetry::layer().with_tracer(provider.tracer(OTEL_SERVICE_NAME));

            tracing_subscriber::registry()
                .with(fmt_layer)
                .with(otel_layer)
                .with(env_filter)
                .init();

            tracing::info!("Logger initialized with OpenTelemetry");
            Telemetry {
                tracer_provider: Some(provider),
            }
        }
        Some(Err(e)) => {
            tracing_subscriber::registry()
                .with(fmt_layer)
                .with(env_filter)
                .init();

            tracing::warn!(error = %e, "Logger initialized without OpenTelemetry (init failed)");
            Telemetry {
                tracer_provider: None,
            }
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt_layer)
                .with(env_filter)
                .init();

            Telemetry {
                tracer_provider: None,
            }
        }
    }
}

fn init_tracer_provider() -> Result<SdkTracerProvider, Box<dyn std::error::Error + Send + Sync>> {
    let exporter = SpanExporter::builder().with_http().build()?;

    let resource = Resource::builder()
        .with_service_name(OTEL_SERVICE_NAME)
        .build();

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build())
}
