use core::fmt::Display;
use core::ops::{Add, Sub};

use crate::*;

/// An absolute moment in time measured in nanoseconds.
///
/// An `EpochTime` holds a signed count of nanoseconds relative to the UNIX
/// epoch, `1970-01-01T00:00:00Z`. Unlike `std::time::SystemTime` the internal
/// representation is a single i64 field, which means every value from
/// `1677-09-21T00:12:43.145224192Z` to `2262-04-11T23:47:16.854775807Z` is
/// representable, including moments before the epoch.
///
/// When read from [`SystemClock`] an `EpochTime` is not guaranteed to be
/// steady. The realtime clock is subject to phase and frequency adjustments
/// and may jump forward or backwards. Use [`Instant`] to measure elapsed
/// time.
///
/// Arithmetic with [`Span`] saturates at [`EpochTime::MIN`] and
/// [`EpochTime::MAX`].
///
/// The size of an `EpochTime` is always the same as an `i64`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EpochTime {
    pub(crate) ns: i64,
}

impl EpochTime {
    /// An anchor in time defined as `1970-01-01T00:00:00Z`. Failed parses and
    /// conversions fall back to this value.
    pub const EPOCH: EpochTime = EpochTime { ns: 0 };

    pub const MIN: EpochTime = EpochTime { ns: i64::MIN };

    pub const MAX: EpochTime = EpochTime { ns: i64::MAX };

    /// Return an `EpochTime` that represents the current moment in time.
    pub fn now() -> Self {
        SystemClock.now()
    }

    /// Return the current moment in time as reported by the provided clock.
    pub fn now_with<C: WallClock + ?Sized>(clock: &C) -> Self {
        clock.now()
    }

    pub const fn from_nanos(nanos: i64) -> Self {
        Self { ns: nanos }
    }

    pub const fn from_seconds(secs: i64) -> Self {
        Self {
            ns: secs.saturating_mul(NANOS_PER_SEC),
        }
    }

    pub const fn nanos_since_epoch(&self) -> i64 {
        self.ns
    }

    /// Whole seconds since the epoch, truncated toward zero.
    pub const fn seconds_since_epoch(&self) -> i64 {
        self.ns / NANOS_PER_SEC
    }

    pub const fn is_zero(&self) -> bool {
        self.ns == 0
    }

    /// Return the span from some earlier moment until this one. The result is
    /// negative when `earlier` is actually later.
    pub fn duration_since(&self, earlier: Self) -> Span {
        *self - earlier
    }

    pub fn checked_duration_since(&self, earlier: Self) -> Option<Span> {
        self.ns.checked_sub(earlier.ns).map(|ns| Span { ns })
    }

    pub fn checked_add(&self, span: Span) -> Option<Self> {
        self.ns.checked_add(span.ns).map(|ns| Self { ns })
    }

    pub fn checked_sub(&self, span: Span) -> Option<Self> {
        self.ns.checked_sub(span.ns).map(|ns| Self { ns })
    }
}

impl Add<Span> for EpochTime {
    type Output = EpochTime;

    fn add(self, rhs: Span) -> Self::Output {
        EpochTime {
            ns: self.ns.saturating_add(rhs.ns),
        }
    }
}

impl Sub<Span> for EpochTime {
    type Output = EpochTime;

    fn sub(self, rhs: Span) -> Self::Output {
        EpochTime {
            ns: self.ns.saturating_sub(rhs.ns),
        }
    }
}

impl Sub<EpochTime> for EpochTime {
    type Output = Span;

    fn sub(self, rhs: EpochTime) -> Self::Output {
        Span {
            ns: self.ns.saturating_sub(rhs.ns),
        }
    }
}

impl Display for EpochTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        CalendarDateTime::from_epoch_utc(*self).fmt(f)
    }
}

impl TryFrom<std::time::SystemTime> for EpochTime {
    type Error = Error;

    fn try_from(other: std::time::SystemTime) -> Result<Self, Self::Error> {
        let ns = match other.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_nanos()).map_err(|_| Error::Overflow)?,
            Err(e) => i64::try_from(e.duration().as_nanos())
                .map(|before| -before)
                .map_err(|_| Error::Overflow)?,
        };
        Ok(Self { ns })
    }
}

impl From<EpochTime> for std::time::SystemTime {
    fn from(other: EpochTime) -> Self {
        let magnitude = core::time::Duration::from_nanos(other.ns.unsigned_abs());
        if other.ns < 0 {
            std::time::SystemTime::UNIX_EPOCH - magnitude
        } else {
            std::time::SystemTime::UNIX_EPOCH + magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let t0 = EpochTime::from_seconds(1_700_000_000);
        let t1 = t0 + Span::from_seconds(1);

        assert_eq!((t1 - t0).count_seconds(), 1);
        assert!(t1 > t0);
        assert_eq!(t1 - Span::SECOND, t0);
        assert_eq!(t0.duration_since(t1), -Span::SECOND);
        assert_eq!(t1.checked_duration_since(t0), Some(Span::SECOND));
    }

    #[test]
    fn across_epoch() {
        let t0 = EpochTime::from_seconds(-1);
        let t1 = EpochTime::from_seconds(1);

        assert!(t0 < t1);
        assert_eq!((t1 - t0).count_seconds(), 2);
        assert_eq!(t0.seconds_since_epoch(), -1);
        assert_eq!(EpochTime::from_nanos(-1_500_000_000).seconds_since_epoch(), -1);
        assert!(EpochTime::EPOCH.is_zero());
        assert_eq!(EpochTime::default(), EpochTime::EPOCH);
    }

    #[test]
    fn overflow() {
        assert_eq!(EpochTime::MAX + Span::NANOSECOND, EpochTime::MAX);
        assert_eq!(EpochTime::MIN - Span::NANOSECOND, EpochTime::MIN);
        assert_eq!(EpochTime::MAX - EpochTime::MIN, Span::MAX);
        assert_eq!(EpochTime::MAX.checked_add(Span::NANOSECOND), None);
        assert_eq!(EpochTime::MIN.checked_sub(Span::NANOSECOND), None);
        assert_eq!(EpochTime::MAX.checked_duration_since(EpochTime::MIN), None);
        assert_eq!(EpochTime::from_seconds(i64::MIN), EpochTime::MIN);
    }

    #[test]
    fn system_time() {
        let before = std::time::SystemTime::UNIX_EPOCH - core::time::Duration::from_secs(5);
        let t = EpochTime::try_from(before).unwrap();
        assert_eq!(t, EpochTime::from_seconds(-5));
        assert_eq!(std::time::SystemTime::from(t), before);

        let after = std::time::SystemTime::UNIX_EPOCH + core::time::Duration::from_nanos(42);
        let t = EpochTime::try_from(after).unwrap();
        assert_eq!(t.nanos_since_epoch(), 42);
        assert_eq!(std::time::SystemTime::from(t), after);
    }

    #[test]
    fn display() {
        assert_eq!(EpochTime::EPOCH.to_string(), "1970-01-01T00:00:00Z");
        assert_eq!(EpochTime::from_seconds(-1).to_string(), "1969-12-31T23:59:59Z");
        assert_eq!(EpochTime::MIN.to_string(), "1677-09-21T00:12:43.145224192Z");
        assert_eq!(EpochTime::MAX.to_string(), "2262-04-11T23:47:16.854775807Z");
    }
}
