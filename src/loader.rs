use chrono::{NaiveTime, Timelike};
use tracing::warn;

use crate::error::ParseWarning;
use crate::types::SunSample;

const MIN_FIELDS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    pub samples: Vec<SunSample>,
    pub warnings: Vec<ParseWarning>,
}

/// `"HH:MM"` (24-hour) to fractional hours.
pub fn parse_time_of_day(text: &str) -> Option<f64> {
    let time = NaiveTime::parse_from_str(text.trim(), "%H:%M").ok()?;
    Some(time.hour() as f64 + time.minute() as f64 / 60.0)
}

fn parse_degrees(field: &str, name: &str) -> Result<f64, String> {
    let trimmed = field.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("{name} '{trimmed}' is not a finite number")),
        Err(e) => Err(format!("{name} '{trimmed}': {e}")),
    }
}

fn parse_line(fields: &[&str]) -> Result<SunSample, String> {
    let month = fields[0].trim();
    let time_text = fields[1].trim();
    let azimuth = parse_degrees(fields[2], "azimuth")?;
    let altitude = parse_degrees(fields[3], "altitude")?;
    let time_of_day = parse_time_of_day(time_text)
        .ok_or_else(|| format!("time '{time_text}' is not a valid HH:MM"))?;
    Ok(SunSample {
        month: month.to_string(),
        time_of_day,
        azimuth,
        altitude,
    })
}

/// Parses `month,time,azimuth,altitude` rows. Lines with fewer than four fields
/// are dropped quietly; lines with bad values are dropped with a warning.
pub fn parse_records(text: &str) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();
    if text.is_empty() {
        return parsed;
    }

    for (idx, line) in text.lines().enumerate() {
        if idx == 0 && line.to_lowercase().contains("month") {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }
        match parse_line(&fields) {
            Ok(sample) => parsed.samples.push(sample),
            Err(reason) => {
                let warning = ParseWarning {
                    line: idx + 1,
                    reason,
                };
                warn!(line = warning.line, reason = %warning.reason, "skipping sun table row");
                parsed.warnings.push(warning);
            }
        }
    }

    parsed
}
