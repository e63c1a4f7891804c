use chrono::Month;
use tracing::{info, warn};

use crate::error::{Error, ParseWarning, Result};
use crate::loader;
use crate::types::SunSample;

/// Sun samples grouped by month name. Months keep first-seen order and each
/// month keeps the order its samples arrived in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SunPositionTable {
    months: Vec<(String, Vec<SunSample>)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedTable {
    pub table: SunPositionTable,
    pub warnings: Vec<ParseWarning>,
}

impl LoadedTable {
    pub fn has_data(&self) -> bool {
        !self.table.is_empty()
    }

    pub fn require_data(&self) -> Result<&SunPositionTable> {
        if self.has_data() {
            Ok(&self.table)
        } else {
            Err(Error::EmptySource)
        }
    }
}

pub fn calendar_months() -> impl Iterator<Item = &'static str> {
    (1..=12u8).filter_map(|m| Month::try_from(m).ok().map(|month| month.name()))
}

impl SunPositionTable {
    pub fn build(samples: impl IntoIterator<Item = SunSample>) -> Self {
        let mut table = Self::default();
        for sample in samples {
            let idx = match table.position_of(&sample.month) {
                Some(idx) => idx,
                None => {
                    table.months.push((sample.month.clone(), Vec::new()));
                    table.months.len() - 1
                }
            };
            let entries = &mut table.months[idx].1;
            if entries.iter().any(|s| s.time_of_day == sample.time_of_day) {
                warn!(
                    month = %sample.month,
                    time_of_day = sample.time_of_day,
                    "duplicate sample time, keeping the first"
                );
                continue;
            }
            entries.push(sample);
        }
        table
    }

    /// Takes lists that are already grouped. A month may be given with no samples.
    pub fn from_months<M: Into<String>>(months: impl IntoIterator<Item = (M, Vec<SunSample>)>) -> Self {
        let mut table = Self::default();
        for (month, samples) in months {
            let month = month.into();
            match table.position_of(&month) {
                Some(idx) => table.months[idx].1.extend(samples),
                None => table.months.push((month, samples)),
            }
        }
        table
    }

    fn position_of(&self, month: &str) -> Option<usize> {
        self.months.iter().position(|(name, _)| name == month)
    }

    pub fn contains_month(&self, month: &str) -> bool {
        self.position_of(month).is_some()
    }

    pub fn samples_for(&self, month: &str) -> Result<&[SunSample]> {
        self.position_of(month)
            .map(|idx| self.months[idx].1.as_slice())
            .ok_or_else(|| Error::UnknownMonth {
                month: month.to_string(),
            })
    }

    /// Calendar order, January first, restricted to months in the table.
    /// Month keys that are not English month names are left out.
    pub fn months_present(&self) -> Vec<&str> {
        calendar_months()
            .filter_map(|name| {
                self.months
                    .iter()
                    .find(|(month, _)| month == name)
                    .map(|(month, _)| month.as_str())
            })
            .collect()
    }

    /// Next present month after `month`, wrapping December back round. An absent
    /// `month` restarts at the first present month.
    pub fn next_month_after(&self, month: &str) -> Option<&str> {
        let present = self.months_present();
        if present.is_empty() {
            return None;
        }
        let next = match present.iter().position(|m| *m == month) {
            Some(idx) => (idx + 1) % present.len(),
            None => 0,
        };
        Some(present[next])
    }

    /// Insertion order, unlike `months_present`.
    pub fn months(&self) -> impl Iterator<Item = (&str, &[SunSample])> {
        self.months.iter().map(|(m, s)| (m.as_str(), s.as_slice()))
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn len(&self) -> usize {
        self.months.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn months_present(table: &SunPositionTable) -> Vec<&str> {
    table.months_present()
}

pub fn load_table(raw: &str) -> LoadedTable {
    let parsed = loader::parse_records(raw);
    let table = SunPositionTable::build(parsed.samples);
    if table.is_empty() {
        warn!(warnings = parsed.warnings.len(), "no sun data parsed from source");
    } else {
        info!(
            samples = table.len(),
            months = table.month_count(),
            warnings = parsed.warnings.len(),
            "loaded sun positions"
        );
    }
    LoadedTable {
        table,
        warnings: parsed.warnings,
    }
}

pub fn load_table_file(path: impl AsRef<std::path::Path>) -> Result<LoadedTable> {
    let raw = std::fs::read_to_string(path)?;
    Ok(load_table(&raw))
}
