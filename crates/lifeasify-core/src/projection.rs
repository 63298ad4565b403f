//! Lifetime time-projection calculator.
//!
//! Converts a chore's per-occurrence effort and repeat frequency into the
//! cumulative minutes it would consume over a lifetime, and renders minute
//! counts as the short human strings shown in the chore tables.

/// Lifespan assumption behind the "it'll take in a life" projection.
pub const DEFAULT_LIFESPAN_YEARS: f64 = 75.0;

/// The projection counts calendar days, not leap-year-adjusted days.
pub const DAYS_PER_YEAR: f64 = 365.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Project the cumulative minutes a chore will consume over a lifetime of
/// `lifespan_years`.
///
/// A one-time chore costs exactly its own effort, whatever the frequency
/// field holds. A repeating chore is performed every `repeat_frequency_days`
/// for the whole lifespan. Returns `None` when a repeating chore has no
/// usable frequency (absent or zero), so callers hide the projection
/// instead of dividing by zero.
///
/// No rounding is performed here; [`format_duration`] owns display rounding.
pub fn project_lifetime_minutes(
    time_effort_minutes: f64,
    is_one_time: bool,
    repeat_frequency_days: Option<u32>,
    lifespan_years: f64,
) -> Option<f64> {
    if is_one_time {
        return Some(time_effort_minutes);
    }
    match repeat_frequency_days {
        Some(days) if days > 0 => {
            Some(time_effort_minutes * lifespan_years * DAYS_PER_YEAR / f64::from(days))
        }
        _ => None,
    }
}

/// Render a minute count for the chore tables.
///
/// At day scale only the day count is shown; hour/minute precision is noise
/// when the framing is "it will take N days along your life". Below a day,
/// an upcoming entry (due on a future calendar day) renders as "Tomorrow",
/// otherwise as `<h>h <m>m` with no zero padding.
pub fn format_duration(total_minutes: f64, upcoming: bool) -> String {
    let days = (total_minutes / MINUTES_PER_DAY).floor();
    let hours = ((total_minutes - days * MINUTES_PER_DAY) / MINUTES_PER_HOUR).floor();
    let minutes = (total_minutes % MINUTES_PER_HOUR).round();

    if days > 0.0 {
        format!("{days} days")
    } else if upcoming {
        "Tomorrow".to_string()
    } else {
        format!("{hours}h {minutes}m")
    }
}
