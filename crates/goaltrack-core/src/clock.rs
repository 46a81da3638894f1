//! The year-progress clock.
//!
//! Pure functions of an instant and a year. The window runs from
//! Jan 1 00:00:00.000 to Dec 31 23:59:59.999 of the year, in UTC, and the
//! decomposition uses exact 24h/60m/60s units — no calendar-aware
//! adjustments beyond the fixed window bounds.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Elapsed-fraction-of-year statistics for the live countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct YearProgress {
    /// Percentage of the year elapsed: exactly 0 before the window, exactly
    /// 100 at or after its end, monotonically non-decreasing in between.
    pub fraction: f64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl YearProgress {
    /// Render `fraction` with six significant digits, e.g. `"64.3821"`.
    ///
    /// Leading zeros are not significant: a fraction below 1% gets extra
    /// decimal places so six meaningful digits always show.
    pub fn fraction_display(&self) -> String {
        if self.fraction <= 0.0 {
            return "0.00000".to_string();
        }
        // floor(log10) is 2 for 100, 1 for [10, 100), 0 for [1, 10),
        // -1 for [0.1, 1), and so on down.
        let magnitude = self.fraction.log10().floor() as i64;
        let decimals = (5 - magnitude).max(0) as usize;
        format!("{:.*}", decimals, self.fraction)
    }
}

/// The UTC instant range of a calendar year.
pub fn year_window(year: i16) -> Result<(Timestamp, Timestamp), jiff::Error> {
    let start = Date::new(year, 1, 1)?
        .at(0, 0, 0, 0)
        .to_zoned(TimeZone::UTC)?
        .timestamp();
    let end = Date::new(year, 12, 31)?
        .at(23, 59, 59, 999_000_000)
        .to_zoned(TimeZone::UTC)?
        .timestamp();
    Ok((start, end))
}

/// Compute elapsed-fraction-of-year statistics for `now`.
///
/// Elapsed time is clamped to the window, so instants before the year start
/// read as 0% and instants past its end read as 100%.
pub fn year_progress(now: Timestamp, year: i16) -> Result<YearProgress, jiff::Error> {
    let (start, end) = year_window(year)?;
    let total_ms = end.as_millisecond() - start.as_millisecond();
    let elapsed_ms = (now.as_millisecond() - start.as_millisecond()).clamp(0, total_ms);

    Ok(YearProgress {
        fraction: elapsed_ms as f64 / total_ms as f64 * 100.0,
        days: elapsed_ms / MS_PER_DAY,
        hours: elapsed_ms % MS_PER_DAY / MS_PER_HOUR,
        minutes: elapsed_ms % MS_PER_HOUR / MS_PER_MINUTE,
        seconds: elapsed_ms % MS_PER_MINUTE / MS_PER_SECOND,
    })
}

/// The active goal year for an instant, in UTC. Both the dashboard and the
/// public profile filter goals with this, so the two views agree.
pub fn current_year(now: Timestamp) -> i16 {
    now.to_zoned(TimeZone::UTC).year()
}
