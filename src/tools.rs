use time::{OffsetDateTime, format_description};
use super::constants::{SECOND, HOUR, DAY, YEAR, TIMESTAMP_FORMAT, BACKUP_TIMESTAMP_FORMAT};
use super::error::{Error, Result};

/// Current UTC time rendered with a `time` format description, empty if the
/// description is malformed.
pub fn format_utc_now(format: &str) -> String {
    match format_description::parse_borrowed::<2>(format) {
        Ok(description) => OffsetDateTime::now_utc().format(&description).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Current UTC time as used in log lines (`2024.01.31 12:00:00`)
pub fn utc_timestamp() -> String {
    format_utc_now(TIMESTAMP_FORMAT)
}

fn seconds_per_unit(unit: char) -> Option<f64> {
    match unit {
        's' => Some(SECOND),
        'h' => Some(HOUR),
        'd' => Some(DAY),
        'y' => Some(YEAR),
        _ => None,
    }
}

/// Parse an integer duration with an optional unit suffix (`s`, `h`, `d` or `y`)
/// and return it in seconds. Without suffix the value is taken as seconds.
pub fn parse_duration(duration: &str) -> Result<f64> {
    let duration = duration.trim();
    let (value, unit) = match duration.chars().last() {
        Some(last) if last.is_ascii_alphabetic() => (&duration[..duration.len()-1], last),
        Some(_) => (duration, 's'),
        None => return Err(Error::InvalidDuration(duration.to_string())),
    };
    let unit_seconds = match seconds_per_unit(unit) {
        Some(seconds) => seconds,
        None => return Err(Error::InvalidDuration(format!("{} (unknown time unit '{}', expected s, h, d or y)", duration, unit))),
    };
    match value.parse::<u64>() {
        Ok(value) => Ok((value as f64 * unit_seconds).round()),
        Err(_) => Err(Error::InvalidDuration(format!("{} (expected a non-negative integer followed by a time unit)", duration))),
    }
}

/// Number of fixed steps of `time_step` seconds needed to cover `total_time` seconds.
pub fn calculate_n_steps(total_time: f64, time_step: f64) -> Result<usize> {
    if !(time_step > 0.) || !time_step.is_finite() {
        return Err(Error::InvalidDuration(format!("time step must be a positive number of seconds (got {})", time_step)));
    }
    if !(total_time >= 0.) || !total_time.is_finite() {
        return Err(Error::InvalidDuration(format!("total time must be a non-negative number of seconds (got {})", total_time)));
    }
    Ok((total_time / time_step).round() as usize)
}
