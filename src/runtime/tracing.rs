/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate, with verbosity controlled by
/// the `RUST_LOG` environment variable:
/// - `RUST_LOG=info` - lifecycle events and created/updated records
/// - `RUST_LOG=debug` - full request payloads and message bodies
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
