//! Browser logging.
//!
//! The core logs through `tracing`. No tracing subscriber runs in the browser;
//! with `tracing`'s `log` feature every event is re-emitted as a `log` record,
//! which `console_log` prints to the devtools console.

/// Install the panic hook and the console logger. Safe to call twice.
#[cfg(feature = "csr")]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;
