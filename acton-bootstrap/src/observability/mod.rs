//! Logging setup
//!
//! The helpers emit `tracing` events (frame and scope push/pop at `trace`,
//! parts closed automatically at `debug`). Applications that do not already
//! install a subscriber can call [`init`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset
#[must_use]
pub const fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,acton_bootstrap=trace"
    } else {
        "info"
    }
}

/// Initialize structured logging
///
/// Pretty output in debug builds, JSON in release builds, filtered by
/// `RUST_LOG` when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use acton_bootstrap::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Rendering started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}
