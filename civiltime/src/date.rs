use core::cmp::Ordering;
use core::fmt::Display;
use core::str::FromStr;

use log::debug;

use crate::calendar::{civil_from_days, is_valid_date};
use crate::*;

/// A date in the proleptic Gregorian calendar.
///
/// The fields are stored as given and are not validated on construction, so a
/// `CalendarDate` may name a day that does not exist. Check
/// [`CalendarDate::is_valid`] before trusting one built from untrusted
/// input, or use the `try_` methods.
///
/// Dates are ordered by the moment their day starts, which for real dates is
/// the order of `(year, month, day)` across the whole i32 year range. Dates
/// that do not exist sort as the epoch and are ordered among themselves field
/// by field.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct CalendarDate {
    year: i32,
    month: i32,
    day: i32,
}

impl CalendarDate {
    /// `1970-01-01`, the date of [`EpochTime::EPOCH`].
    pub const EPOCH: CalendarDate = CalendarDate {
        year: 1970,
        month: 1,
        day: 1,
    };

    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Return the current UTC date.
    pub fn today() -> Self {
        Self::today_with(&SystemClock)
    }

    /// Same as [`CalendarDate::today`].
    pub fn now() -> Self {
        Self::today()
    }

    /// Return the current UTC date as reported by the provided clock.
    pub fn today_with<C: WallClock + ?Sized>(clock: &C) -> Self {
        Self::from_epoch_utc(clock.now())
    }

    /// Parse `YYYY-MM-DD`, falling back to `1970-01-01` when the text is
    /// malformed. The calendar validity of the result is not checked.
    pub fn parse(text: &str) -> Self {
        match codec::try_parse_date(text) {
            Ok((year, month, day)) => Self::new(year, month, day),
            Err(e) => {
                debug!("failed to parse date {text:?}: {e}, using the epoch");
                Self::EPOCH
            }
        }
    }

    /// Parse `YYYY-MM-DD` and require that the date exists.
    pub fn try_parse(text: &str) -> Result<Self, Error> {
        let (year, month, day) = codec::try_parse_date(text)?;
        let date = Self::new(year, month, day);
        date.check()?;
        Ok(date)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Returns true if this date exists in the proleptic Gregorian calendar.
    pub const fn is_valid(&self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }

    /// The start of this day in UTC, or the epoch if the date does not exist
    /// or is outside of the representable range.
    pub fn to_epoch_utc(&self) -> EpochTime {
        self.try_to_epoch_utc().unwrap_or_else(|e| {
            debug!("failed to convert {} to an epoch time: {e}, using the epoch", self);
            EpochTime::EPOCH
        })
    }

    /// The start of this day in UTC.
    pub fn try_to_epoch_utc(&self) -> Result<EpochTime, Error> {
        calendar::try_fields_to_epoch(self.fields())
    }

    /// The UTC date containing the provided moment.
    pub fn from_epoch_utc(time: EpochTime) -> Self {
        let (year, month, day) = civil_from_days(time.ns.div_euclid(NANOS_PER_DAY));
        Self { year, month, day }
    }

    /// Combine this date with a time of day. No fields are validated.
    pub const fn at(
        &self,
        hour: i32,
        minute: i32,
        second: i32,
        nanosecond: i32,
    ) -> CalendarDateTime {
        CalendarDateTime::new(
            self.year,
            self.month,
            self.day,
            hour,
            minute,
            second,
            nanosecond,
        )
    }

    pub const fn fields(&self) -> CivilFields {
        CivilFields::from_date(self.year, self.month, self.day)
    }

    fn check(&self) -> Result<(), Error> {
        if !self.is_valid() {
            return Err(Error::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&codec::format_date(self.year, self.month, self.day))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl From<EpochTime> for CalendarDate {
    fn from(other: EpochTime) -> Self {
        Self::from_epoch_utc(other)
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = calendar::timeline_key(&self.fields());
        let rhs = calendar::timeline_key(&other.fields());
        lhs.cmp(&rhs).then_with(|| {
            (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
        })
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
