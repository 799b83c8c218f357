//! Tracing setup. Logs go to stderr so stdout carries only chorus lines.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive variable.
pub const ENV_LOG: &str = "CHORUS_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        tracing::info!("still alive");
    }
}
