use tracing::debug;

use crate::error::Result;
use crate::interpolate::interpolate;
use crate::lookup_table::SunPositionTable;
use crate::types::SunPosition;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DEFAULT_DAY_SPEED: f64 = 30.0;

/// Month and time of day the simulation is showing. Owned by whoever drives
/// the frame loop; the table queries only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    pub month: String,
    pub time_of_day: f64,
}

impl SimulationClock {
    pub fn new(month: impl Into<String>, time_of_day: f64) -> Self {
        let mut clock = Self {
            month: month.into(),
            time_of_day: 0.0,
        };
        clock.set_time(time_of_day);
        clock
    }

    /// Midnight of the earliest calendar month in `table`.
    pub fn start(table: &SunPositionTable) -> Option<Self> {
        let month = *table.months_present().first()?;
        Some(Self::new(month, 0.0))
    }

    pub fn set_time(&mut self, hours: f64) {
        self.time_of_day = if hours.is_finite() {
            hours.clamp(0.0, HOURS_PER_DAY) % HOURS_PER_DAY
        } else {
            0.0
        };
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.month = month.into();
    }

    /// One animation tick: `delta_seconds * day_speed / 60` simulated hours.
    /// Passing midnight restarts the day at 00:00 in the next month present in
    /// `table`. Returns `true` when the month rolled over.
    pub fn advance(&mut self, delta_seconds: f64, day_speed: f64, table: &SunPositionTable) -> bool {
        self.time_of_day += delta_seconds * day_speed / 60.0;
        if self.time_of_day < HOURS_PER_DAY {
            return false;
        }
        self.time_of_day = 0.0;
        if let Some(next) = table.next_month_after(&self.month) {
            debug!(from = %self.month, to = next, "advancing month");
            self.month = next.to_string();
        }
        true
    }

    pub fn display_time(&self) -> String {
        let hours = self.time_of_day.floor();
        let minutes = ((self.time_of_day - hours) * 60.0).floor();
        format!("{:02}:{:02}", hours as u32, minutes as u32)
    }

    pub fn sun_position(&self, table: &SunPositionTable) -> Result<SunPosition> {
        interpolate(table, &self.month, self.time_of_day)
    }
}
