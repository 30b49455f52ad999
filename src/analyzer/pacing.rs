//! Blocking delay capability.
//!
//! Both the retry backoff and the pacing delay between chunks go through a
//! `Sleeper`, so tests can swap in `RecordingSleeper` and assert the
//! requested durations without waiting on the wall clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Something that can block the current thread for a duration.
pub trait Sleeper: Send + Sync {
    /// Block for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Real delays via `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested delays instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    requested: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All delays requested so far, in order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Sum of all requested delays.
    pub fn total(&self) -> Duration {
        self.requested().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for Arc<S> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
