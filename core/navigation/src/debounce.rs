//! FILENAME: core/navigation/src/debounce.rs
//! PURPOSE: Trailing-edge debounce for bursts of file-change events.
//! CONTEXT: Each event takes a ticket and waits out the window; only the
//! holder of the newest ticket acts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug)]
pub struct Debouncer {
    generation: AtomicU64,
    window: Duration,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            generation: AtomicU64::new(0),
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Register an event and return its ticket.
    pub fn schedule(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True if no event arrived after the one holding `ticket`.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_fires() {
        let d = Debouncer::new(Duration::from_millis(150));
        let first = d.schedule();
        let second = d.schedule();
        let third = d.schedule();

        assert!(!d.is_current(first));
        assert!(!d.is_current(second));
        assert!(d.is_current(third));
        assert_eq!(d.window(), Duration::from_millis(150));
    }

    #[test]
    fn test_separate_bursts_each_fire() {
        let d = Debouncer::new(Duration::from_millis(150));
        let a = d.schedule();
        assert!(d.is_current(a));
        let b = d.schedule();
        assert!(d.is_current(b));
    }
}
