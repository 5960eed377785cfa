use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route diagnostics to stderr, filtered by `RUST_LOG` and `warn` otherwise. Leaves any
/// subscriber the host process already installed alone.
pub fn init() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .try_init();
    });
}
