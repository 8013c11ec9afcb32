//! WebVTT timestamp grammar
//!
//! Timestamps are `MM:SS.mmm` or `HH:MM:SS.mmm`. The fractional part is
//! optional and may carry one to three digits, scaled to milliseconds, so
//! `00:01.5` is 1.5 seconds. Rendering always uses `HH:MM:SS.mmm`.

use core::time::Duration;

use super::CoreError;

/// Milliseconds per hour
const MS_PER_HOUR: u64 = 3_600_000;
/// Milliseconds per minute
const MS_PER_MINUTE: u64 = 60_000;
/// Milliseconds per second
const MS_PER_SECOND: u64 = 1_000;
/// Maximum number of fractional digits
const FRACTION_DIGITS: usize = 3;

/// Parse a WebVTT timestamp into a duration since zero
///
/// # Example
///
/// ```rust
/// # use vtt_core::utils::parse_timestamp;
/// # use std::time::Duration;
/// assert_eq!(parse_timestamp("01:02.500")?, Duration::from_millis(62_500));
/// assert_eq!(parse_timestamp("01:00:00.000")?, Duration::from_secs(3600));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] if a component is missing or not
/// numeric, if the fraction has more than three digits, or if there are
/// not two or three colon-separated components.
pub fn parse_timestamp(time_str: &str) -> Result<Duration, CoreError> {
    let trimmed = time_str.trim();

    let (clock, millis) = match trimmed.rsplit_once('.') {
        Some((clock, fraction)) => (clock, parse_fraction(fraction.trim(), trimmed)?),
        None => (trimmed, 0),
    };

    let parts: Vec<&str> = clock.trim().split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [minutes, seconds] => (0, *minutes, *seconds),
        [hours, minutes, seconds] => (parse_component(hours, "hours", trimmed)?, *minutes, *seconds),
        _ => {
            return Err(CoreError::invalid_time(
                trimmed,
                "expected MM:SS.mmm or HH:MM:SS.mmm",
            ))
        }
    };
    let minutes = parse_component(minutes, "minutes", trimmed)?;
    let seconds = parse_component(seconds, "seconds", trimmed)?;

    let total = hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|ms| ms.checked_add(minutes.checked_mul(MS_PER_MINUTE)?))
        .and_then(|ms| ms.checked_add(seconds.checked_mul(MS_PER_SECOND)?))
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(|| CoreError::invalid_time(trimmed, "timestamp out of range"))?;

    Ok(Duration::from_millis(total))
}

/// Parse one clock component made only of ASCII digits
fn parse_component(component: &str, name: &str, time_str: &str) -> Result<u64, CoreError> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_time(
            time_str,
            &format!("invalid {name} '{component}'"),
        ));
    }

    component
        .parse()
        .map_err(|_| CoreError::invalid_time(time_str, &format!("{name} out of range")))
}

/// Parse the fractional part and scale it to milliseconds
fn parse_fraction(fraction: &str, time_str: &str) -> Result<u64, CoreError> {
    if fraction.len() > FRACTION_DIGITS {
        return Err(CoreError::invalid_time(
            time_str,
            "more than 3 millisecond digits",
        ));
    }

    let value = parse_component(fraction, "milliseconds", time_str)?;
    let missing = FRACTION_DIGITS - fraction.len();

    Ok(value * 10_u64.pow(u32::try_from(missing).unwrap_or(0)))
}

/// Format a duration as a WebVTT timestamp (`HH:MM:SS.mmm`)
///
/// Sub-millisecond precision is truncated, never rounded.
///
/// # Example
///
/// ```rust
/// # use vtt_core::utils::format_timestamp;
/// # use std::time::Duration;
/// assert_eq!(format_timestamp(Duration::from_micros(94_999_999)), "00:01:34.999");
/// ```
#[must_use]
pub fn format_timestamp(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    let hours = total_ms / u128::from(MS_PER_HOUR);
    let remainder = total_ms % u128::from(MS_PER_HOUR);
    let minutes = remainder / u128::from(MS_PER_MINUTE);
    let remainder = remainder % u128::from(MS_PER_MINUTE);
    let seconds = remainder / u128::from(MS_PER_SECOND);
    let millis = remainder % u128::from(MS_PER_SECOND);

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
