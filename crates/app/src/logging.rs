use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `level` is an `EnvFilter` directive such as `info` or `services=debug`;
/// an unparsable directive falls back to `info`. Output goes to stderr so the
/// terminal drill keeps stdout for the learner.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
