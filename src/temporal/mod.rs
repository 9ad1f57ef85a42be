//! Date and time-of-day catalogs.
//!
//! Temporal values are reached through two capability traits instead of
//! runtime type inspection: [`DateBearing`] for calendar-aware values and
//! [`HasLocalTime`] for anything with a time of day. "Now" comes from a
//! [`Clock`] read on every invocation.
//!
//! Requires the `chrono` feature.

pub mod date;
pub mod time;

use std::fmt;

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Offset used to derive local (naive) dates and times from [`now`](Clock::now).
    fn offset(&self) -> FixedOffset;

    /// The current local date and time.
    fn local_now(&self) -> NaiveDateTime {
        self.now().with_timezone(&self.offset()).naive_local()
    }
}

/// The system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        Local::now().offset().fix()
    }
}

/// A clock frozen at one instant.
///
/// # Example
/// ```
/// use chrono::{NaiveDate, Utc, TimeZone};
/// use fluent_rules::temporal::{Clock, FixedClock};
///
/// let clock = FixedClock::utc(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
/// assert_eq!(clock.local_now().date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self {
            instant: instant.fixed_offset(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }

    fn offset(&self) -> FixedOffset {
        *self.instant.offset()
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// A value that falls on a calendar date and can be compared with "now".
pub trait DateBearing: PartialOrd + Clone + fmt::Display + Send + Sync + 'static {
    /// The calendar date of this value, in its own zone.
    fn calendar_date(&self) -> NaiveDate;

    /// The current value of this type according to `clock`.
    fn now(clock: &dyn Clock) -> Self;
}

impl DateBearing for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }

    fn now(clock: &dyn Clock) -> Self {
        clock.local_now().date()
    }
}

impl DateBearing for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }

    fn now(clock: &dyn Clock) -> Self {
        clock.local_now()
    }
}

impl DateBearing for DateTime<Utc> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn now(clock: &dyn Clock) -> Self {
        clock.now()
    }
}

impl DateBearing for DateTime<FixedOffset> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn now(clock: &dyn Clock) -> Self {
        clock.now().with_timezone(&clock.offset())
    }
}

impl DateBearing for DateTime<Local> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn now(clock: &dyn Clock) -> Self {
        clock.now().with_timezone(&Local)
    }
}

/// A time of day paired with a UTC offset, without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    pub time: NaiveTime,
    pub offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

/// A value with a local time of day, and possibly a UTC offset.
pub trait HasLocalTime {
    /// The time of day in the value's own zone.
    fn local_time(&self) -> NaiveTime;

    /// The UTC offset, or `None` for zone-less values.
    fn offset(&self) -> Option<FixedOffset> {
        None
    }
}

impl HasLocalTime for NaiveTime {
    fn local_time(&self) -> NaiveTime {
        *self
    }
}

impl HasLocalTime for NaiveDateTime {
    fn local_time(&self) -> NaiveTime {
        self.time()
    }
}

impl HasLocalTime for OffsetTime {
    fn local_time(&self) -> NaiveTime {
        self.time
    }

    fn offset(&self) -> Option<FixedOffset> {
        Some(self.offset)
    }
}

impl<Tz: TimeZone> HasLocalTime for DateTime<Tz> {
    fn local_time(&self) -> NaiveTime {
        self.time()
    }

    fn offset(&self) -> Option<FixedOffset> {
        Some(DateTime::offset(self).fix())
    }
}
