//! Shared factories for the integration suite.

use std::sync::Arc;

use thoteca::backend::Memory;
use thoteca::{FixedClock, Thoteca};

/// 2024-01-01 00:00:00 UTC
pub const START_MILLIS: i64 = 1704067200000;

/// Instance over a fresh in-memory backend with a controllable clock.
pub fn test_instance() -> (Thoteca, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(START_MILLIS));
    let instance = Thoteca::open_with_clock(Box::new(Memory::new()), clock.clone());
    (instance, clock)
}

/// Instance with `reader1` already registered and logged in.
pub fn logged_in_instance() -> (Thoteca, Arc<FixedClock>) {
    let (instance, clock) = test_instance();
    instance
        .login("reader1", "secret1")
        .expect("first login should register");
    (instance, clock)
}
