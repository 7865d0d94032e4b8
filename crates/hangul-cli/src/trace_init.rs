#[cfg(feature = "trace")]
use std::path::Path;

/// Keeps the background log writer alive; buffered events are flushed when
/// it is dropped.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _writer: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the tracing subscriber.
///
/// With a log directory, spans and events go to `hangultool-trace.jsonl`
/// there; otherwise they are printed to stderr. `RUST_LOG` overrides the
/// default `hangul_core=debug` filter. A second call leaves the first
/// subscriber in place.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hangul_core=debug"));
    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "hangultool-trace.jsonl");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .try_init();
            TraceGuard {
                _writer: Some(guard),
            }
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .try_init();
            TraceGuard { _writer: None }
        }
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) -> TraceGuard {
    TraceGuard {}
}
