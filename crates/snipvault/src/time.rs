use chrono::{DateTime, Utc};

/// A trait for time sources that return the current wall-clock instant.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. Identifier generation only reads calendar components
/// (year, month, day) and milliseconds since midnight, so millisecond
/// precision is all an implementation needs to provide.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, TimeZone, Utc};
/// use snipvault::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now(&self) -> DateTime<Utc> {
///         Utc.with_ymd_and_hms(2024, 6, 15, 12, 34, 56).unwrap()
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.now().timestamp(), 1718454896);
/// ```
pub trait TimeSource {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// A [`TimeSource`] that reads the system wall clock.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
