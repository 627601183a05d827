/*!
 * Tracing Setup
 * Structured logging for the fsinfo binary using the tracing crate
 */

use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that switches log output to JSON
pub const TRACE_JSON_ENV: &str = "FSINFO_TRACE_JSON";

/// Whether JSON log output was requested through the environment
pub fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

/// Initialize structured tracing
///
/// Logs go to stderr so that listing output on stdout stays clean.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - FSINFO_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .compact(),
            )
            .try_init()
    };

    // A subscriber installed earlier (e.g. by a test harness) stays in place
    if result.is_ok() {
        info!(json = json_requested(), "Structured tracing initialized");
    }
}

/// Span covering the inspection of one path
pub fn span_path(path: &str) -> Span {
    info_span!("path", path = %path)
}
