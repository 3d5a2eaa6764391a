use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

use crate::*;

/// A span represents a signed length of time. Unlike `std::time::Duration`
/// the internal representation uses only nanoseconds in an i64 field, which
/// means a span may be negative and its magnitude is at most ~292 years.
///
/// Arithmetic operators saturate at [`Span::MIN`] and [`Span::MAX`] instead
/// of wrapping. Use [`Span::checked_add`] and [`Span::checked_sub`] to detect
/// overflow.
///
/// The size of a `Span` is always the same as an `i64`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub(crate) ns: i64,
}

impl Span {
    pub const ZERO: Span = Span { ns: 0 };
    pub const NANOSECOND: Span = Span { ns: 1 };
    pub const MICROSECOND: Span = Span {
        ns: NANOS_PER_MICRO,
    };
    pub const MILLISECOND: Span = Span {
        ns: NANOS_PER_MILLI,
    };
    pub const SECOND: Span = Span { ns: NANOS_PER_SEC };
    pub const MINUTE: Span = Span {
        ns: NANOS_PER_MINUTE,
    };
    pub const HOUR: Span = Span { ns: NANOS_PER_HOUR };
    pub const MIN: Span = Span { ns: i64::MIN };
    pub const MAX: Span = Span { ns: i64::MAX };

    pub const fn from_nanos(nanos: i64) -> Self {
        Self { ns: nanos }
    }

    pub const fn from_micros(micros: i64) -> Self {
        Self {
            ns: micros.saturating_mul(NANOS_PER_MICRO),
        }
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self {
            ns: millis.saturating_mul(NANOS_PER_MILLI),
        }
    }

    pub const fn from_seconds(secs: i64) -> Self {
        Self {
            ns: secs.saturating_mul(NANOS_PER_SEC),
        }
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        Self {
            ns: minutes.saturating_mul(NANOS_PER_MINUTE),
        }
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self {
            ns: hours.saturating_mul(NANOS_PER_HOUR),
        }
    }

    pub const fn count_nanos(&self) -> i64 {
        self.ns
    }

    /// Whole microseconds in this span, truncated toward zero.
    pub const fn count_micros(&self) -> i64 {
        self.ns / NANOS_PER_MICRO
    }

    /// Whole milliseconds in this span, truncated toward zero.
    pub const fn count_millis(&self) -> i64 {
        self.ns / NANOS_PER_MILLI
    }

    /// Whole seconds in this span, truncated toward zero.
    pub const fn count_seconds(&self) -> i64 {
        self.ns / NANOS_PER_SEC
    }

    pub fn as_secs_f64(&self) -> f64 {
        (self.ns / NANOS_PER_SEC) as f64 + (self.ns % NANOS_PER_SEC) as f64 / 1e9
    }

    pub const fn is_zero(&self) -> bool {
        self.ns == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.ns < 0
    }

    pub const fn abs(self) -> Self {
        Self {
            ns: self.ns.saturating_abs(),
        }
    }

    pub const fn checked_add(self, rhs: Span) -> Option<Self> {
        match self.ns.checked_add(rhs.ns) {
            Some(ns) => Some(Self { ns }),
            None => None,
        }
    }

    pub const fn checked_sub(self, rhs: Span) -> Option<Self> {
        match self.ns.checked_sub(rhs.ns) {
            Some(ns) => Some(Self { ns }),
            None => None,
        }
    }
}

impl Add<Span> for Span {
    type Output = Span;

    fn add(self, rhs: Span) -> Self::Output {
        Span {
            ns: self.ns.saturating_add(rhs.ns),
        }
    }
}

impl AddAssign<Span> for Span {
    fn add_assign(&mut self, rhs: Span) {
        *self = *self + rhs;
    }
}

impl Sub<Span> for Span {
    type Output = Span;

    fn sub(self, rhs: Span) -> Self::Output {
        Span {
            ns: self.ns.saturating_sub(rhs.ns),
        }
    }
}

impl SubAssign<Span> for Span {
    fn sub_assign(&mut self, rhs: Span) {
        *self = *self - rhs;
    }
}

impl Neg for Span {
    type Output = Span;

    fn neg(self) -> Self::Output {
        Span {
            ns: self.ns.saturating_neg(),
        }
    }
}

impl Mul<i64> for Span {
    type Output = Span;
    fn mul(self, rhs: i64) -> Self::Output {
        Span {
            ns: self.ns.saturating_mul(rhs),
        }
    }
}

impl Div<i64> for Span {
    type Output = Span;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn div(self, rhs: i64) -> Self::Output {
        Span {
            ns: self.ns.saturating_div(rhs),
        }
    }
}

impl Rem<Span> for Span {
    type Output = Span;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Span) -> Self::Output {
        Span {
            ns: self.ns.wrapping_rem(rhs.ns),
        }
    }
}

impl TryFrom<core::time::Duration> for Span {
    type Error = Error;

    fn try_from(other: core::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(other.as_nanos())
            .map(|ns| Self { ns })
            .map_err(|_| Error::Overflow)
    }
}

impl TryFrom<Span> for core::time::Duration {
    type Error = Error;

    fn try_from(other: Span) -> Result<Self, Self::Error> {
        if other.ns < 0 {
            return Err(Error::NegativeSpan);
        }
        Ok(core::time::Duration::from_nanos(other.ns as u64))
    }
}
