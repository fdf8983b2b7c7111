//! Browser wall clock.

use linkbio::clock::Clock;

/// `Date.now()` in the browser; the system clock in native test builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "csr"))]
        {
            linkbio::clock::SystemClock.now_millis()
        }
    }
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;
