//! Installs the process-wide logger for binaries.
//!
//! Library code only emits through the `log` facade. Verbosity is read
//! from `RUST_LOG`, which may come from a `.env` file:
//! ```bash
//! RUST_LOG=ride_packages=debug
//! ```

/// Initialises logging using a `tracing_subscriber` registry when built
/// with the `tracing` feature (log records are forwarded into it), else
/// `env_logger`. Without either feature, records are dropped.
/// Calling this more than once is a no-op.
#[cfg(feature = "tracing")]
pub fn init() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(all(feature = "env_logger", not(feature = "tracing")))]
pub fn init() {
    let _ = env_logger::try_init();
}

#[cfg(not(any(feature = "env_logger", feature = "tracing")))]
pub fn init() {}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_repeatable() {
        super::init();
        super::init();
        log::info!("logger installed");
    }
}
