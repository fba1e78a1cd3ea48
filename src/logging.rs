use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber. Log lines go to stderr so that stdout only
/// carries the report.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .compact()
        .finish();

    // A second call (e.g. from tests) keeps the first subscriber.
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Logging already initialized");
    }
}
