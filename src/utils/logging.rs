//! Diagnostics go to stderr through `tracing`; stdout stays reserved for reports.

#[cfg(test)]
use std::sync::LazyLock;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TAKT_LOG";

/// Filter from `TAKT_LOG`, then `RUST_LOG`, then `warn`.
pub fn enable_logging(log_level: Option<LevelFilter>) {
    let value = log_level.map(|v| v.to_string()).unwrap_or_else(|| {
        std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".into())
    });

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directives(&value)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}

/// A bare level (`debug`) is scoped to this crate; anything else
/// (`takt=debug`, `info,hyper=warn`) is used as written.
fn filter_directives(value: &str) -> String {
    let value = value.trim();
    match value.parse::<LevelFilter>() {
        Ok(level) => format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level.to_string().to_lowercase()
        ),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
});
