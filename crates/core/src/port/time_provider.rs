// Time Provider Port (for testability)

/// Time provider interface (allows mocking in tests)
pub trait TimeProvider: Send + Sync {
    /// Current time in milliseconds since epoch
    fn now_millis(&self) -> i64;

    /// Current local hour of day, 0..24 (posting-window checks)
    fn hour_of_day(&self) -> u32;
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn hour_of_day(&self) -> u32 {
        use chrono::Timelike;
        chrono::Local::now().hour()
    }
}

pub mod mocks {
    use super::TimeProvider;
    use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// `now_millis` auto-increments by 1 per call so ids derived from it
    /// stay unique within a test.
    pub struct FixedTimeProvider {
        millis: AtomicI64,
        hour: AtomicU32,
    }

    impl FixedTimeProvider {
        pub fn new(millis: i64, hour: u32) -> Self {
            Self {
                millis: AtomicI64::new(millis),
                hour: AtomicU32::new(hour),
            }
        }

        pub fn set_hour(&self, hour: u32) {
            self.hour.store(hour, Ordering::SeqCst);
        }

        pub fn advance(&self, by_millis: i64) {
            self.millis.fetch_add(by_millis, Ordering::SeqCst);
        }
    }

    impl TimeProvider for FixedTimeProvider {
        fn now_millis(&self) -> i64 {
            self.millis.fetch_add(1, Ordering::SeqCst)
        }

        fn hour_of_day(&self) -> u32 {
            self.hour.load(Ordering::SeqCst)
        }
    }
}
