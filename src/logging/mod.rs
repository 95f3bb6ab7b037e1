use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use tracing_subscriber::filter::EnvFilter;

use crate::Result;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

const DEFAULT_LEVEL: &str = "warn";

/// Initialize the tracing subscriber for the process.
///
/// Diagnostics go to stderr so stdout stays a clean manifest stream. The
/// level defaults to `warn` and follows `RUST_LOG` when set. Errors when
/// invoked more than once per process invocation.
pub fn init() -> Result<()> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    Ok(())
}
