//! Human readable datetimes.

use core::cmp::Ordering;
use core::fmt::Display;
use core::str::FromStr;

use log::debug;

use crate::*;

/// A date and time of day in UTC, in the proleptic Gregorian calendar.
///
/// As with [`CalendarDate`], the fields are stored as given and may not name
/// a real moment. Check [`CalendarDateTime::is_valid`] or use the `try_`
/// methods when that matters.
///
/// Datetimes are ordered by the moment they name, including moments outside
/// of the [`EpochTime`] range. Datetimes with invalid fields sort as the epoch
/// and are ordered among themselves field by field.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct CalendarDateTime {
    fields: CivilFields,
}

impl CalendarDateTime {
    /// `1970-01-01T00:00:00Z`, the datetime of [`EpochTime::EPOCH`].
    pub const EPOCH: CalendarDateTime = CalendarDateTime {
        fields: CivilFields::EPOCH,
    };

    pub const fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        nanosecond: i32,
    ) -> Self {
        Self {
            fields: CivilFields::new(year, month, day, hour, minute, second, nanosecond),
        }
    }

    pub const fn from_fields(fields: CivilFields) -> Self {
        Self { fields }
    }

    /// Return the current UTC datetime.
    pub fn now_utc() -> Self {
        Self::now_utc_with(&SystemClock)
    }

    /// Return the current UTC datetime as reported by the provided clock.
    pub fn now_utc_with<C: WallClock + ?Sized>(clock: &C) -> Self {
        Self::from_epoch_utc(clock.now())
    }

    /// Parse a datetime, falling back to `1970-01-01T00:00:00Z` when the text
    /// is malformed or a field is out of its coarse range. Whether the date
    /// exists is not checked.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`, optionally
    /// followed by fractional seconds and a trailing `Z`.
    pub fn parse(text: &str) -> Self {
        Self {
            fields: codec::parse_datetime(text),
        }
    }

    /// Parse a datetime and require that the date exists.
    pub fn try_parse(text: &str) -> Result<Self, Error> {
        let fields = codec::try_parse_datetime(text)?;
        calendar::check_fields(&fields)?;
        Ok(Self { fields })
    }

    pub const fn year(&self) -> i32 {
        self.fields.year
    }

    pub const fn month(&self) -> i32 {
        self.fields.month
    }

    pub const fn day(&self) -> i32 {
        self.fields.day
    }

    pub const fn hour(&self) -> i32 {
        self.fields.hour
    }

    pub const fn minute(&self) -> i32 {
        self.fields.minute
    }

    pub const fn second(&self) -> i32 {
        self.fields.second
    }

    pub const fn nanosecond(&self) -> i32 {
        self.fields.nanosecond
    }

    pub const fn fields(&self) -> CivilFields {
        self.fields
    }

    /// The date portion.
    pub const fn date(&self) -> CalendarDate {
        CalendarDate::new(self.fields.year, self.fields.month, self.fields.day)
    }

    /// Returns true if the date exists and each time-of-day field is in range.
    ///
    /// This is stricter than [`CalendarDate::is_valid`], which only checks the
    /// date: `2026-02-07T25:00:00` has a real date but is not valid.
    pub fn is_valid(&self) -> bool {
        calendar::is_valid_fields(&self.fields)
    }

    /// The moment this datetime names, or the epoch if it is invalid or
    /// outside of the representable range.
    pub fn to_epoch_utc(&self) -> EpochTime {
        self.try_to_epoch_utc().unwrap_or_else(|e| {
            debug!("failed to convert {} to an epoch time: {e}, using the epoch", self);
            EpochTime::EPOCH
        })
    }

    pub fn try_to_epoch_utc(&self) -> Result<EpochTime, Error> {
        calendar::try_fields_to_epoch(self.fields)
    }

    pub fn from_epoch_utc(time: EpochTime) -> Self {
        Self {
            fields: calendar::epoch_to_fields(time),
        }
    }

    /// Print with a non-canonical [`Printer`].
    pub fn to_string_with(&self, printer: &Printer) -> String {
        printer.format(&self.fields)
    }
}

impl Display for CalendarDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Printer::default().write(f, &self.fields)
    }
}

impl FromStr for CalendarDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl From<EpochTime> for CalendarDateTime {
    fn from(other: EpochTime) -> Self {
        Self::from_epoch_utc(other)
    }
}

impl From<CalendarDate> for CalendarDateTime {
    fn from(other: CalendarDate) -> Self {
        Self {
            fields: other.fields(),
        }
    }
}

impl Ord for CalendarDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = calendar::timeline_key(&self.fields);
        let rhs = calendar::timeline_key(&other.fields);
        lhs.cmp(&rhs).then_with(|| self.fields.cmp(&other.fields))
    }
}

impl PartialOrd for CalendarDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
