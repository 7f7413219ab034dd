//! ## Logging Configuration
//!
//! This module sets up the crate's own diagnostics at program startup using the `ctor` crate.
//! Logging behavior is controlled by the `DEBUG_LOGICIAN` environment variable:
//!
//! - **Disabled** (default): If the variable is unset, empty, or explicitly set to `"0"` or `"false"`,
//!   no logging will be initialized.
//! - **Enabled**: Any other value installs a global subscriber with a maximum log level of `DEBUG`,
//!   so level resolution performed by the configurators becomes visible.
//!
//! ### Usage Example
//!
//! ```sh
//! export DEBUG_LOGICIAN=true
//! ```

use crate::settings::DEBUG_ENV_VAR;
use ctor::ctor;
use tracing::Level;

/// Returns true if the given value of `DEBUG_LOGICIAN` asks for diagnostics.
pub(crate) fn debug_enabled(value: Option<&str>) -> bool {
    !value.map_or(true, |v| v == "0" || v == "false" || v.is_empty())
}

#[ctor]
fn set_debug_level() {
    if debug_enabled(std::env::var(DEBUG_ENV_VAR).ok().as_deref()) {
        if let Err(err) = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .try_init()
        {
            tracing::debug!(%err, "diagnostics subscriber not installed");
        }
    }
}
