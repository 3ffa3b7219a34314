//! Application-wide structured logging implementation.
//!
//! This module provides the tracing subscriber used by the server:
//! - Structured JSON logs to stdout (Bunyan format) for observability
//! - Environment-based log level filtering via `RUST_LOG`
//! - Redirection of `log` records into tracing

use tracing::{Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

/// Compose the tracing subscriber for the application.
///
/// # Parameters
/// - `name`: service name stamped on every log record
/// - `env_filter`: default filter directive used when `RUST_LOG` is unset
/// - `sink`: where formatted logs are written (stdout in production,
///   `std::io::sink` in tests)
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer) // stores span data for bunyan to show full context
        .with(formatting_layer)
}

/// Register a subscriber as the global default.
///
/// Also installs [`LogTracer`] so records emitted through the `log` facade
/// (by actix and reqwest internals) flow into the same pipeline. Should only
/// be called once per process.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("failed to set logger");
    set_global_default(subscriber).expect("failed to set tracing subscriber");
}
