use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` (for example `RUST_LOG=debug` or
/// `RUST_LOG=blog_api=debug,diesel=warn`). Without it the filter falls back to
/// `info`, with Diesel held at `warn` so query noise stays out of the log.
///
/// Call once, at the start of `main`. A second call is a no-op, which keeps
/// tests that build the app more than once from panicking.
pub fn init_logging() {
    let _ = tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "info,diesel=warn,tower_http=info".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
