//! Opt-in log output.
//!
//! The runtime only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber. `init_tracing` is the stock one.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `JSR_LOG=jsr_runtime=trace`.
pub const LOG_ENV_VAR: &str = "JSR_LOG";

/// Install a hierarchical stderr subscriber filtered by `JSR_LOG`.
///
/// Does nothing when `JSR_LOG` is unset or unparsable. Safe to call
/// multiple times; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) else {
            return;
        };
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);
        // Another subscriber may already be installed by the host.
        if let Err(err) = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
        {
            tracing::debug!(%err, "subscriber already installed");
        }
    });
}
