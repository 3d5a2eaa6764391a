//! This crate provides small, explicit time and date value types.
//!
//! The fundamental types are [`EpochTime`], an absolute moment stored as a
//! signed count of nanoseconds since `1970-01-01T00:00:00Z`, and [`Span`], a
//! signed count of nanoseconds. Both use a single 64bit value, so they have a
//! fixed size and math on them is cheap. The representable range of an
//! `EpochTime` is roughly the years 1677 through 2262.
//!
//! On top of these sit the calendar facing types [`CalendarDate`] and
//! [`CalendarDateTime`]. They hold civil fields in the proleptic Gregorian
//! calendar, always in UTC, and convert to and from `EpochTime`. They parse
//! and print a constrained ISO-8601 text form:
//!
//! ```text
//! YYYY-MM-DD
//! YYYY-MM-DD{T| }HH:MM:SS[.fffffffff][Z]
//! ```
//!
//! Every fallible operation has a `try_` form returning a [`Result`]. The
//! plain forms never fail and fall back to the epoch when the input is
//! malformed or names a date that does not exist:
//!
//! ```
//! use civiltime::{CalendarDate, CalendarDateTime, EpochTime};
//!
//! let dt = CalendarDateTime::parse("2026-02-07T10:30:15Z");
//! let ts = dt.to_epoch_utc();
//! assert_eq!(CalendarDateTime::from_epoch_utc(ts).to_string(), "2026-02-07T10:30:15Z");
//!
//! // February 30th parses syntactically but is not a real date
//! let bad = CalendarDate::parse("2026-02-30");
//! assert!(!bad.is_valid());
//! assert_eq!(bad.to_epoch_utc(), EpochTime::EPOCH);
//! assert!(bad.try_to_epoch_utc().is_err());
//! ```
//!
//! Reads of the system clocks go through the [`WallClock`] and
//! [`MonotonicClock`] traits so that callers may substitute their own clocks.

pub mod calendar;
pub mod codec;

mod clock;
mod date;
mod datetime;
mod epoch;
mod error;
mod span;
mod sys;

#[cfg(feature = "serde")]
mod serialize;

pub use calendar::CivilFields;
pub use clock::{Instant, MonotonicClock, SteadyClock, SystemClock, WallClock};
pub use codec::{Precision, Printer, PrinterBuilder};
pub use date::CalendarDate;
pub use datetime::CalendarDateTime;
pub use epoch::EpochTime;
pub use error::{Error, Field};
pub use span::Span;

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
