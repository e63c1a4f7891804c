use crate::angles::{lerp_angle, normalize_angle};
use crate::error::Result;
use crate::lookup_table::SunPositionTable;
use crate::types::{SunPosition, SunSample};

/// Picks the samples on either side of `time_of_day` and the fraction between
/// them. A query past the last sample falls back to the first sample of the
/// month rather than the last one.
fn bracket(samples: &[SunSample], time_of_day: f64) -> Option<(&SunSample, &SunSample, f64)> {
    let first = samples.first()?;
    let (prev, next) = samples
        .windows(2)
        .find(|pair| pair[1].time_of_day >= time_of_day)
        .map(|pair| (&pair[0], &pair[1]))
        .unwrap_or((first, first));

    let span = next.time_of_day - prev.time_of_day;
    let fraction = if span > 0.0 {
        (time_of_day - prev.time_of_day) / span
    } else {
        0.0
    };
    Some((prev, next, fraction))
}

pub fn interpolate_samples(samples: &[SunSample], time_of_day: f64) -> SunPosition {
    match bracket(samples, time_of_day) {
        Some((prev, next, fraction)) => SunPosition {
            azimuth: normalize_angle(lerp_angle(prev.azimuth, next.azimuth, fraction)),
            altitude: lerp_angle(prev.altitude, next.altitude, fraction),
        },
        None => SunPosition::default(),
    }
}

/// Sun position for `month` at `time_of_day` hours. Fails only when the month
/// is not in the table; a month with no samples yields the default position.
pub fn interpolate(table: &SunPositionTable, month: &str, time_of_day: f64) -> Result<SunPosition> {
    let samples = table.samples_for(month)?;
    Ok(interpolate_samples(samples, time_of_day))
}
