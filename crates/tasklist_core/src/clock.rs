use time::{OffsetDateTime, UtcOffset};

/// Provides the locale-style creation timestamps stamped onto new tasks.
///
/// Injected into `TaskStore` so tests can pin the calendar.
pub trait Clock {
    /// Calendar date like `"11/9/2025"` (month/day/year, no zero padding).
    fn today(&self) -> String;

    /// Clock time like `"10:45 AM"`.
    fn now(&self) -> String;
}

/// Wall clock in the local UTC offset, falling back to UTC when the local
/// offset cannot be determined.
pub struct SystemClock;

impl SystemClock {
    fn local_now() -> OffsetDateTime {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        OffsetDateTime::now_utc().to_offset(offset)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> String {
        let date = Self::local_now().date();
        format!("{}/{}/{}", date.month() as u8, date.day(), date.year())
    }

    fn now(&self) -> String {
        let time = Self::local_now().time();
        let (hour, period) = match time.hour() {
            0 => (12, "AM"),
            hour @ 1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            hour => (hour - 12, "PM"),
        };
        format!("{}:{:02} {}", hour, time.minute(), period)
    }
}
