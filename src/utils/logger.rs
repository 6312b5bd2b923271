use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects JSON log lines instead of the compact format.
pub const LOG_FORMAT_VAR: &str = "VERIDION_LOG_FORMAT";

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("veridion=warn"))
}

// All diagnostics go to stderr; stdout carries only the banner.
pub fn init_cli_logger() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// Picks the logger from `VERIDION_LOG_FORMAT` (`json`, anything else is compact).
pub fn init_from_env() {
    match std::env::var(LOG_FORMAT_VAR) {
        Ok(format) if format.eq_ignore_ascii_case("json") => init_json_logger(),
        _ => init_cli_logger(),
    }
}
