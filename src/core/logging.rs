//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable, e.g.
/// `RUST_LOG=pinscreen=trace` to see dropped out-of-bounds points.
/// Calling it again after a logger is installed leaves that logger in place.
///
/// # Example
/// ```
/// pinscreen::core::logging::init();
/// log::info!("ingest started");
/// ```
pub fn init() {
    if let Err(err) = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init() {
        log::debug!("logging already initialized: {err}");
    }
}
