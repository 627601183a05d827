/*!
 * Timespec Conversions
 * (seconds, nanoseconds) pairs as stored in stat structures <-> SystemTime
 */

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use time::macros::format_description;
use time::{Duration as CalendarDuration, OffsetDateTime};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Split a SystemTime into seconds and nanoseconds relative to the epoch
///
/// Nanoseconds are always in `0..1_000_000_000`, so times before the epoch
/// carry a negative second count and a positive fraction, matching `timespec`.
#[must_use]
pub fn to_timespec(time: SystemTime) -> (i64, i64) {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => (d.as_secs() as i64, i64::from(d.subsec_nanos())),
        Err(e) => {
            let d = e.duration();
            // i64::MIN has no positive counterpart; wrapping keeps it intact
            let mut sec = (d.as_secs() as i64).wrapping_neg();
            let mut nsec = -i64::from(d.subsec_nanos());
            if nsec < 0 {
                sec -= 1;
                nsec += NANOS_PER_SEC;
            }
            (sec, nsec)
        }
    }
}

/// Build a SystemTime from a timespec pair
///
/// Out-of-range nanoseconds are normalized into the seconds field.
#[must_use]
pub fn from_timespec(sec: i64, nsec: i64) -> SystemTime {
    let sec = sec.saturating_add(nsec.div_euclid(NANOS_PER_SEC));
    let nsec = nsec.rem_euclid(NANOS_PER_SEC) as u32;
    if sec >= 0 {
        UNIX_EPOCH
            .checked_add(Duration::new(sec as u64, nsec))
            .unwrap_or(UNIX_EPOCH)
    } else {
        // Subtract in two halves: the full magnitude of i64::MIN seconds does
        // not fit the host's signed offset in one step.
        let before = Duration::from_secs(sec.unsigned_abs()) - Duration::from_nanos(u64::from(nsec));
        UNIX_EPOCH
            .checked_sub(before / 2)
            .and_then(|t| t.checked_sub(before - before / 2))
            .unwrap_or(UNIX_EPOCH)
    }
}

/// Render a modification time the way a long directory listing does ("Jan  2 15:04")
///
/// Times are rendered in UTC. Times outside the calendar range (years past
/// 9999 or before -9999) are written as raw seconds since the epoch.
pub fn write_listing_time(f: &mut fmt::Formatter<'_>, time: SystemTime) -> fmt::Result {
    let format = format_description!("[month repr:short] [day padding:space] [hour]:[minute]");
    let (sec, nsec) = to_timespec(time);
    let date = OffsetDateTime::UNIX_EPOCH.checked_add(CalendarDuration::new(sec, nsec as i32));
    match date.map(|date| date.format(&format)) {
        Some(Ok(formatted)) => f.write_str(&formatted),
        _ => write!(f, "{}", sec),
    }
}
