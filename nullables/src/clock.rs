//! Nullable clock — deterministic time for testing.

use instinct_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only moves when the test says so, and always as a [`Timestamp`],
/// so eligibility predicates can be driven across a poll's end time
/// without touching the system clock.
pub struct NullClock {
    current: Cell<Timestamp>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self::at(Timestamp::new(initial_secs))
    }

    pub fn at(start: Timestamp) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        self.current.get()
    }

    /// Advance time by `secs` and return the new instant.
    pub fn advance(&self, secs: u64) -> Timestamp {
        let next = Timestamp::new(self.now().as_secs() + secs);
        self.current.set(next);
        next
    }

    /// Jump to a specific instant (forwards or backwards).
    pub fn set(&self, to: Timestamp) {
        self.current.set(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_jumps() {
        let clock = NullClock::new(100);
        assert_eq!(clock.now(), Timestamp::new(100));
        assert_eq!(clock.advance(50), Timestamp::new(150));
        assert_eq!(clock.now(), Timestamp::new(150));
        clock.set(Timestamp::new(10));
        assert_eq!(clock.now(), Timestamp::new(10));
    }
}
