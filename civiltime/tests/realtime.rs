use civiltime::{CalendarDate, CalendarDateTime, EpochTime, Instant, Span};
use std::time::SystemTime;

fn to_unix_ns(t: SystemTime) -> i64 {
    t.duration_since(SystemTime::UNIX_EPOCH).unwrap().as_nanos() as i64
}

#[test]
fn realtime() {
    // the realtime clock may jump backward, so we may need to try a few times
    for _ in 0..5 {
        let t0 = SystemTime::now();
        let t1 = EpochTime::now();
        let t2 = SystemTime::now();
        let t3 = EpochTime::now();
        let t4 = SystemTime::now();

        // convert our times into nanoseconds since the unix epoch
        let ut0 = to_unix_ns(t0);
        let ut1 = t1.nanos_since_epoch();
        let ut2 = to_unix_ns(t2);
        let ut3 = t3.nanos_since_epoch();
        let ut4 = to_unix_ns(t4);

        // check that the clock has moved forward and not backward
        if t0 < t2 && t2 < t4 {
            // allow for the std clock to be coarser than ours
            let slack = Span::MICROSECOND.count_nanos();

            assert!(ut0 <= ut1 + slack, "ut0: {ut0} ut1: {ut1}");
            assert!(ut1 <= ut2 + slack, "ut1: {ut1} ut2: {ut2}");
            assert!(ut2 <= ut3 + slack, "ut2: {ut2} ut3: {ut3}");
            assert!(ut3 <= ut4 + slack, "ut3: {ut3} ut4: {ut4}");
        }
    }
}

#[test]
fn monotonic() {
    let start = Instant::now();
    let mut previous = start;
    for _ in 0..1000 {
        let now = Instant::now();
        assert!(now >= previous);
        previous = now;
    }
    assert!(!start.elapsed().is_negative());
}

#[test]
fn now_is_consistent() {
    let t = EpochTime::now();
    let dt = CalendarDateTime::from_epoch_utc(t);
    assert!(dt.is_valid());
    assert_eq!(dt.to_epoch_utc(), t);
    assert!(dt.year() >= 2024);

    let today = CalendarDate::today();
    let now = CalendarDateTime::now_utc();
    // unless we happen to straddle midnight
    assert!(now.date() >= today);
}
