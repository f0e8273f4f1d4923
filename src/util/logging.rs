//! Browser console logging setup.

use crate::state::settings::LogLevel;

/// Install the panic hook and console logger. Later calls are no-ops.
pub fn init(level: LogLevel) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Once;

        static INIT: Once = Once::new();
        INIT.call_once(|| {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(level.to_log_level());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = level;
    }
}
