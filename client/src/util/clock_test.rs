#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn browser_clock_tracks_wall_time_in_native_tests() {
    let clock = BrowserClock;
    let a = clock.now_millis();
    let b = clock.now_millis();
    assert!(a > 1_600_000_000_000);
    assert!(b >= a);
}
