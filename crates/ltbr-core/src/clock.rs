//! Wall-clock capability used by reading-time accounting.

use chrono::{DateTime, Utc};

#[cfg(any(test, feature = "test-util"))]
pub use manual::ManualClock;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test-util"))]
mod manual {
    use std::sync::Mutex;

    use chrono::{DateTime, TimeDelta, Utc};

    use super::Clock;

    /// A clock that only moves when told to.
    #[derive(Debug)]
    pub struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        pub fn advance(&self, delta: TimeDelta) {
            let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
            *now += delta;
        }

        pub fn advance_secs(&self, secs: i64) {
            self.advance(TimeDelta::seconds(secs));
        }
    }

    impl Default for ManualClock {
        fn default() -> Self {
            Self::new(DateTime::<Utc>::UNIX_EPOCH)
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap_or_else(|e| e.into_inner())
        }
    }
}
