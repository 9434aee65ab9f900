use tracing::Level;

/// Initializes a global tracing subscriber printing debug-level events
///
/// Safe to call more than once; only the first call installs a subscriber.
/// The client itself only emits events and works with any subscriber the
/// embedding application installs instead.
pub fn setup_logger() {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .try_init();
}
