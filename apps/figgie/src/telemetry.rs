use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber for binaries.
///
/// Filtering follows `RUST_LOG`, falling back to `default_filter`. `json`
/// selects machine-readable output.
pub fn init_tracing(default_filter: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(fmt_layer.with_ansi(false).json()).try_init().ok();
    } else {
        registry.with(fmt_layer).try_init().ok();
    }
}
