use crate::NANOS_PER_SEC;
use core::sync::atomic::{AtomicU64, Ordering};

pub mod monotonic {
    use super::*;

    use winapi::um::winnt::LARGE_INTEGER;

    static FREQUENCY: AtomicU64 = AtomicU64::new(0);

    fn frequency() -> u64 {
        let cached = FREQUENCY.load(Ordering::Relaxed);

        if cached != 0 {
            return cached;
        }

        let frequency;
        unsafe {
            let mut frq: LARGE_INTEGER = core::mem::zeroed();
            let _ = winapi::um::profileapi::QueryPerformanceFrequency(&mut frq);
            frequency = *frq.QuadPart() as u64;
        }

        FREQUENCY.store(frequency, Ordering::Relaxed);
        frequency
    }

    fn count() -> u64 {
        unsafe {
            let mut cnt: LARGE_INTEGER = core::mem::zeroed();
            let _ = winapi::um::profileapi::QueryPerformanceCounter(&mut cnt);
            *cnt.QuadPart() as u64
        }
    }

    pub fn precise() -> crate::Instant {
        let count = count();
        let frequency = frequency();
        let nanos_per_sec = NANOS_PER_SEC as u64;

        let secs = count / frequency;
        let ns = count % frequency;

        crate::Instant {
            ns: secs * nanos_per_sec + ns * nanos_per_sec / frequency,
        }
    }
}

pub mod realtime {
    use super::*;

    use winapi::shared::minwindef::FILETIME;

    // 100ns intervals between 1601-01-01 and 1970-01-01
    const UNIX_EPOCH_INTERVALS: i64 = 116_444_736 * NANOS_PER_SEC;
    const NANOS_PER_INTERVAL: i64 = 100;

    fn unix_intervals() -> i64 {
        let filetime;
        unsafe {
            let mut ft: FILETIME = core::mem::zeroed();
            winapi::um::sysinfoapi::GetSystemTimePreciseAsFileTime(&mut ft);
            filetime = ((ft.dwHighDateTime as u64) << 32 | ft.dwLowDateTime as u64) as i64;
        }

        filetime - UNIX_EPOCH_INTERVALS
    }

    pub fn precise() -> crate::EpochTime {
        crate::EpochTime::from_nanos(unix_intervals().saturating_mul(NANOS_PER_INTERVAL))
    }
}
