//! Timestamp display for popups.
//!

use jiff::Timestamp;
use jiff::tz::TimeZone;

/// US-English style, e.g. `11/14/2023, 10:13:20 PM UTC`.
const TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p %Z";

/// Format an epoch in milliseconds in the given time zone.  Returns `None` if the value is
/// out of range.
///
pub fn format_time(ms: i64, tz: &TimeZone) -> Option<String> {
    let ts = Timestamp::from_millisecond(ms).ok()?;
    Some(ts.to_zoned(tz.clone()).strftime(TIME_FORMAT).to_string())
}
