//! Tracing bootstrap for host applications and tests
//!
//! The engine only emits `tracing` events; installing a subscriber is the
//! host's decision. This helper installs the same fmt subscriber the rest of
//! our services use: `RUST_LOG` filter, `info` by default, no targets.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// Safe to call repeatedly; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::info!("tracing initialised twice");
    }
}
