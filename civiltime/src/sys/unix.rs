use crate::NANOS_PER_SEC;

pub fn read_clock(clock: libc::clockid_t) -> libc::timespec {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    unsafe {
        libc::clock_gettime(clock, &mut ts);
    }

    ts
}

pub mod monotonic {
    use super::*;

    pub fn precise() -> crate::Instant {
        let ts = read_clock(libc::CLOCK_MONOTONIC);

        let now = (ts.tv_sec as u64)
            .wrapping_mul(NANOS_PER_SEC as u64)
            .wrapping_add(ts.tv_nsec as u64);

        crate::Instant { ns: now }
    }
}

pub mod realtime {
    use super::*;

    pub fn precise() -> crate::EpochTime {
        let ts = read_clock(libc::CLOCK_REALTIME);

        // tv_nsec is always in 0..1e9, even when tv_sec is negative
        let now = (ts.tv_sec as i64)
            .saturating_mul(NANOS_PER_SEC)
            .saturating_add(ts.tv_nsec as i64);

        crate::EpochTime::from_nanos(now)
    }
}
