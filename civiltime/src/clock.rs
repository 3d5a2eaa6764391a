//! Clock collaborators.
//!
//! Wall time and monotonic time are read through traits so that callers can
//! substitute a fixed or simulated clock. The provided implementations are
//! stateless unit structs that read the operating system clocks.

use core::ops::{Add, Sub};

use crate::*;

/// A source of wall clock time.
///
/// Readings are not guaranteed to be monotonic between calls. The clock may
/// jump forward or backwards due to NTP or manual adjustment.
pub trait WallClock {
    fn now(&self) -> EpochTime;
}

/// A source of monotonically nondecreasing time, used to measure elapsed
/// time. Its readings are never comparable to wall clock time.
pub trait MonotonicClock {
    type Instant: Copy;

    fn now(&self) -> Self::Instant;

    fn elapsed(&self, start: Self::Instant) -> Span;
}

/// Reads the system realtime clock.
#[derive(Copy, Clone, Default, Debug)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> EpochTime {
        crate::sys::realtime::precise()
    }
}

/// Reads the system monotonic clock.
#[derive(Copy, Clone, Default, Debug)]
pub struct SteadyClock;

impl MonotonicClock for SteadyClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, start: Instant) -> Span {
        start.elapsed()
    }
}

/// A measurement of a monotonically nondecreasing clock in nanoseconds.
///
/// It is opaque and useful only with [`Span`]s.
///
/// Unlike `std::time::Instant` the internal representation uses only
/// nanoseconds in a `u64` field to hold the clock reading. This means that it
/// will wrap after ~584 years.
///
/// The size of an `Instant` is always the same as a `u64`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
    pub(crate) ns: u64,
}

impl Instant {
    /// Return an `Instant` that represents the current moment.
    pub fn now() -> Self {
        crate::sys::monotonic::precise()
    }

    /// Return the elapsed time since this instant was taken.
    pub fn elapsed(&self) -> Span {
        Self::now() - *self
    }

    /// Return the span from some earlier instant until this one. The result
    /// is negative if `earlier` is actually later.
    pub fn duration_since(&self, earlier: Self) -> Span {
        *self - earlier
    }

    pub fn checked_duration_since(&self, earlier: Self) -> Option<Span> {
        self.ns
            .checked_sub(earlier.ns)
            .and_then(|ns| i64::try_from(ns).ok())
            .map(|ns| Span { ns })
    }
}

impl Add<Span> for Instant {
    type Output = Instant;

    fn add(self, rhs: Span) -> Self::Output {
        Instant {
            ns: self.ns.saturating_add_signed(rhs.ns),
        }
    }
}

impl Sub<Span> for Instant {
    type Output = Instant;

    fn sub(self, rhs: Span) -> Self::Output {
        self + -rhs
    }
}

impl Sub<Instant> for Instant {
    type Output = Span;

    fn sub(self, rhs: Instant) -> Self::Output {
        let ns = if self.ns >= rhs.ns {
            i64::try_from(self.ns - rhs.ns).unwrap_or(i64::MAX)
        } else {
            i64::try_from(rhs.ns - self.ns).map_or(i64::MIN, |ns| -ns)
        };
        Span { ns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(EpochTime);

    impl WallClock for FixedClock {
        fn now(&self) -> EpochTime {
            self.0
        }
    }

    #[test]
    fn injected_wall_clock() {
        let clock = FixedClock(EpochTime::from_seconds(86_400));
        assert_eq!(EpochTime::now_with(&clock), EpochTime::from_seconds(86_400));
    }

    #[test]
    fn steady_elapsed() {
        let clock = SteadyClock;
        let start = clock.now();
        let mut sink = 0_u64;
        for i in 0..100_000 {
            sink = sink.wrapping_add(i);
        }
        assert!(sink > 0);
        assert!(!clock.elapsed(start).is_negative());
        assert!(clock.now() >= start);
    }

    #[test]
    fn instant_arithmetic() {
        let a = Instant { ns: 1_000 };
        let b = a + Span::from_nanos(500);
        assert_eq!(b.ns, 1_500);
        assert_eq!(b - a, Span::from_nanos(500));
        assert_eq!(a - b, Span::from_nanos(-500));
        assert_eq!(b - Span::from_nanos(500), a);
        assert_eq!(a.checked_duration_since(b), None);
        assert_eq!(b.checked_duration_since(a), Some(Span::from_nanos(500)));
        assert_eq!(a - Span::from_nanos(5_000), Instant { ns: 0 });
    }
}
