use tracing_subscriber::{filter::Directive, fmt::time::ChronoLocal, EnvFilter};

use crate::config::LOG_LEVEL_ENV_VAR;

/// Transport crates that are too chatty below `warn`
const QUIET_TARGETS: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "tokio",
    "tokio_util",
    "tokio_rustls",
    "rustls",
    "rustls_pemfile",
    "tower",
    "tracing",
    "tracing_subscriber",
];

/// Set up the global tracing subscriber.
///
/// Writes to stderr so stdout stays reserved for the rendered response.
/// Calling it more than once is harmless.
pub fn init_tracing_subscriber() {
    let filter = QUIET_TARGETS
        .iter()
        .filter_map(|target| format!("{target}=warn").parse::<Directive>().ok())
        .fold(EnvFilter::from_env(LOG_LEVEL_ENV_VAR), |filter, directive| {
            filter.add_directive(directive)
        });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_subscriber_should_initialize_logging_without_panic() {
        init_tracing_subscriber();
        // second call must not panic on the already-set global subscriber
        init_tracing_subscriber();
    }
}
