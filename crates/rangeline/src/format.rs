//! Label formatters for common axes.

const MINUTES_IN_HOUR: i64 = 60;
const HOURS_IN_DAY: i64 = 24;

/// Minutes since midnight as `H:MM`. Values past 24h wrap to the next day.
pub fn time_of_day(minutes: f64) -> String {
    let total = minutes.round() as i64;
    let hours = total.div_euclid(MINUTES_IN_HOUR).rem_euclid(HOURS_IN_DAY);
    let rest = total.rem_euclid(MINUTES_IN_HOUR);
    format!("{hours}:{rest:02}")
}

/// Whole hours as `H:00`, wrapping at midnight.
pub fn hour_of_day(hour: f64) -> String {
    let hour = (hour.round() as i64).rem_euclid(HOURS_IN_DAY);
    format!("{hour}:00")
}

/// Integral values without a fractional part, everything else as is.
pub fn plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// `plain` with a prefix, e.g. `prefixed("$")` for prices.
pub fn prefixed(prefix: &str) -> impl Fn(f64) -> String + '_ {
    move |value| format!("{prefix}{}", plain(value))
}
