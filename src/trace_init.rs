#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "shobdo-trace.jsonl";
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "shobdo_core=debug,shobdo_engine=debug";

/// Write conversion spans as JSON lines to [`TRACE_FILE`] under `log_dir`.
/// Only the first call installs the subscriber.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The host process owns the library for its whole lifetime.
        std::mem::forget(guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
