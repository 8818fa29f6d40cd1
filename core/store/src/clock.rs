//! FILENAME: core/store/src/clock.rs
//! PURPOSE: Time source for entry ids.

use chrono::Utc;

/// Millisecond time source. Ids are the decimal rendering of this value, so
/// two creates inside the same millisecond produce the same id.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock in UTC milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}
