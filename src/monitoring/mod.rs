/*!
 * Monitoring
 * Tracing subscriber setup and span helpers
 */

mod tracer;

pub use tracer::{init_tracing, json_requested, span_path, TRACE_JSON_ENV};
