//! GPST timeline projection.
use hifitime::{Epoch, TimeScale};

/// Projects a UTC [Epoch] onto the GPST timeline, as an integer
/// millisecond count since the GPST reference epoch (1980-01-06).
///
/// With `add_leap_secs` unset, the Gregorian calendar fields are
/// re-interpreted directly in GPST: the count is the plain calendar
/// difference and no leap second correction applies. With it set,
/// the physical UTC instant is converted, which includes the leap
/// seconds accumulated since the reference epoch.
pub fn epoch_to_gpst_millis(t: Epoch, add_leap_secs: bool) -> i64 {
    let t = if add_leap_secs {
        t
    } else {
        let (y, m, d, hh, mm, ss, ns) = t.to_gregorian_utc();
        Epoch::from_gregorian(y, m, d, hh, mm, ss, ns, TimeScale::GPST)
    };
    (t.to_gpst_duration().total_nanoseconds() / 1_000_000) as i64
}
