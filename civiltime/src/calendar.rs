//! Conversion between civil calendar fields and [`EpochTime`].
//!
//! All conversions use the proleptic Gregorian calendar and assume UTC. The
//! day counting treats March as the first month of a computational year so
//! that the leap day, when present, is always the last day of that year. Years
//! are then grouped into 400 year eras of exactly 146,097 days.
//!
//! Converting fields into an `EpochTime` is partial: it fails for dates that
//! do not exist, for out of range time-of-day fields, and for moments outside
//! of the i64 nanosecond range. Converting an `EpochTime` into fields always
//! succeeds.

use crate::*;

const DAYS_PER_ERA: i64 = 146_097;
const YEARS_PER_ERA: i64 = 400;

// days from 0000-03-01 until 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// The civil fields of a moment in the proleptic Gregorian calendar.
///
/// No invariant is enforced on construction. Fields may name a date that does
/// not exist, which lets the parser produce a candidate before validation and
/// lets invalid values still be printed and compared. Use [`is_valid_fields`]
/// to check them.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub nanosecond: i32,
}

impl CivilFields {
    /// `1970-01-01T00:00:00`, the fields of [`EpochTime::EPOCH`].
    pub const EPOCH: CivilFields = CivilFields {
        year: 1970,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
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
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Fields for midnight at the start of the given date.
    pub const fn from_date(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }
}

impl Default for CivilFields {
    fn default() -> Self {
        Self::EPOCH
    }
}

/// Returns true if the year has 366 days.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the month, or zero if `month` is not in the
/// range `1..=12`.
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

/// Returns true if the date exists in the proleptic Gregorian calendar. Any
/// `year` is accepted.
pub const fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    month >= 1 && month <= 12 && day >= 1 && day <= days_in_month(year, month)
}

/// Returns true if the date exists and each time-of-day field is in range.
/// A second of `60` is accepted.
pub fn is_valid_fields(fields: &CivilFields) -> bool {
    check_fields(fields).is_ok()
}

/// Convert fields into an `EpochTime`, returning `None` if they are invalid or
/// the moment is not representable.
///
/// A second of `60` is not treated as a leap second. It is counted as an
/// ordinary second and lands on the first second of the next minute.
pub fn fields_to_epoch(fields: CivilFields) -> Option<EpochTime> {
    try_fields_to_epoch(fields).ok()
}

/// Convert fields into an `EpochTime`, reporting why the conversion failed.
pub fn try_fields_to_epoch(fields: CivilFields) -> Result<EpochTime, Error> {
    let ns = fields_to_nanos(&fields)?;

    i64::try_from(ns)
        .map(EpochTime::from_nanos)
        .map_err(|_| Error::Overflow)
}

/// Nanoseconds since the epoch for valid fields. Exact for every i32 year.
pub(crate) fn fields_to_nanos(fields: &CivilFields) -> Result<i128, Error> {
    check_fields(fields)?;

    let days = days_from_civil(fields.year, fields.month, fields.day);
    let time_of_day = fields.hour as i64 * NANOS_PER_HOUR
        + fields.minute as i64 * NANOS_PER_MINUTE
        + fields.second as i64 * NANOS_PER_SEC
        + fields.nanosecond as i64;

    // the product alone may leave the i64 range near EpochTime::MIN even when
    // the sum does not
    Ok(days as i128 * NANOS_PER_DAY as i128 + time_of_day as i128)
}

/// The position of the fields on the timeline, used for ordering. Valid
/// fields order by the moment they name, even outside of the `EpochTime`
/// range. Invalid fields are placed at the epoch.
pub(crate) fn timeline_key(fields: &CivilFields) -> i128 {
    fields_to_nanos(fields).unwrap_or(0)
}

/// Convert an `EpochTime` into fields. Moments before the epoch decompose
/// into an earlier day with a non-negative time of day.
pub fn epoch_to_fields(time: EpochTime) -> CivilFields {
    let days = time.ns.div_euclid(NANOS_PER_DAY);
    let mut rem = time.ns.rem_euclid(NANOS_PER_DAY);

    let (year, month, day) = civil_from_days(days);

    let hour = rem / NANOS_PER_HOUR;
    rem %= NANOS_PER_HOUR;
    let minute = rem / NANOS_PER_MINUTE;
    rem %= NANOS_PER_MINUTE;
    let second = rem / NANOS_PER_SEC;
    let nanosecond = rem % NANOS_PER_SEC;

    CivilFields {
        year,
        month,
        day,
        hour: hour as i32,
        minute: minute as i32,
        second: second as i32,
        nanosecond: nanosecond as i32,
    }
}

/// Days since `1970-01-01` for a valid date. Exact for every i32 year.
pub(crate) fn days_from_civil(year: i32, month: i32, day: i32) -> i64 {
    let (month, day) = (month as i64, day as i64);

    // shift the year so it starts in March
    let y = if month <= 2 {
        year as i64 - 1
    } else {
        year as i64
    };

    let era = y.div_euclid(YEARS_PER_ERA);
    let year_of_era = y.rem_euclid(YEARS_PER_ERA); // [0, 399]
    let month_from_march = (month + 9) % 12; // [0, 11]
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1; // [0, 365]
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year; // [0, 146096]

    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAYS
}

/// The date for a count of days since `1970-01-01`.
pub(crate) fn civil_from_days(days: i64) -> (i32, i32, i32) {
    let z = days + UNIX_EPOCH_DAYS;

    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z.rem_euclid(DAYS_PER_ERA); // [0, 146096]
    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524
        - day_of_era / 146_096)
        / 365; // [0, 399]
    let day_of_year =
        day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100); // [0, 365]
    let month_from_march = (5 * day_of_year + 2) / 153; // [0, 11]
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1; // [1, 31]
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    }; // [1, 12]

    let mut year = era * YEARS_PER_ERA + year_of_era;
    if month <= 2 {
        year += 1;
    }

    (year as i32, month as i32, day as i32)
}

/// Checks calendar validity, then the time-of-day ranges.
pub(crate) fn check_fields(fields: &CivilFields) -> Result<(), Error> {
    if !is_valid_date(fields.year, fields.month, fields.day) {
        return Err(Error::InvalidDate {
            year: fields.year,
            month: fields.month,
            day: fields.day,
        });
    }

    check_range(Field::Hour, fields.hour, 0, 23)?;
    check_range(Field::Minute, fields.minute, 0, 59)?;
    check_range(Field::Second, fields.second, 0, 60)?;
    check_range(Field::Nanosecond, fields.nanosecond, 0, 999_999_999)?;

    Ok(())
}

pub(crate) fn check_range(field: Field, value: i32, min: i32, max: i32) -> Result<(), Error> {
    if value < min || value > max {
        return Err(Error::FieldOutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(())
}
