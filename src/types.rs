use serde::{Deserialize, Serialize};

use crate::angles::normalize_angle;
use crate::error::{Error, Result};

pub const REFERENCE_IRRADIANCE: f64 = 1000.0;
pub const MIN_EXTINCTION_COEFFICIENT: f64 = 0.1;
pub const MAX_EXTINCTION_COEFFICIENT: f64 = 0.3;
pub const DEFAULT_EXTINCTION_COEFFICIENT: f64 = 0.15;
pub const MIN_TILT: f64 = 0.0;
pub const MAX_TILT: f64 = 90.0;

/// One row of the sun table: where the sun sits at a given time of a given month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunSample {
    pub month: String,
    /// Fractional hours, `06:30` is `6.5`.
    pub time_of_day: f64,
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

impl SunPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

impl From<&SunSample> for SunPosition {
    fn from(sample: &SunSample) -> Self {
        Self {
            azimuth: sample.azimuth,
            altitude: sample.altitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelOrientation {
    pub tilt: f64,
    pub azimuth: f64,
}

impl PanelOrientation {
    /// Tilt is clamped to `[0, 90]` and azimuth wrapped into `[0, 360)`.
    pub fn new(tilt: f64, azimuth: f64) -> Self {
        Self {
            tilt: tilt.clamp(MIN_TILT, MAX_TILT),
            azimuth: normalize_angle(azimuth),
        }
    }

    /// Button-mode rotation: moves the tilt by `step` degrees, staying in range.
    pub fn step_tilt(&mut self, step: f64) {
        self.tilt = (self.tilt + step).clamp(MIN_TILT, MAX_TILT);
    }

    pub fn set_tilt(&mut self, tilt: f64) {
        self.tilt = tilt.clamp(MIN_TILT, MAX_TILT);
    }

    /// Angle shown to the user: a tilt of 90 reads as a 0° panel angle.
    pub fn display_angle(&self) -> f64 {
        MAX_TILT - self.tilt
    }
}

impl Default for PanelOrientation {
    fn default() -> Self {
        Self {
            tilt: 90.0,
            azimuth: 180.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerModelConfig {
    pub extinction_coefficient: f64,
}

impl PowerModelConfig {
    pub fn new(extinction_coefficient: f64) -> Result<Self> {
        if !(MIN_EXTINCTION_COEFFICIENT..=MAX_EXTINCTION_COEFFICIENT)
            .contains(&extinction_coefficient)
        {
            return Err(Error::InvalidConfig {
                message: format!(
                    "extinction coefficient {extinction_coefficient} outside [{MIN_EXTINCTION_COEFFICIENT}, {MAX_EXTINCTION_COEFFICIENT}]"
                ),
            });
        }
        Ok(Self {
            extinction_coefficient,
        })
    }
}

impl Default for PowerModelConfig {
    fn default() -> Self {
        Self {
            extinction_coefficient: DEFAULT_EXTINCTION_COEFFICIENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerReading {
    pub watts_per_m2: f64,
    pub is_day: bool,
}

impl PowerReading {
    /// Share of the reference irradiance, clamped to `[0, 1]`. Drives the panel glow.
    pub fn relative_output(&self) -> f64 {
        if !self.is_day {
            return 0.0;
        }
        (self.watts_per_m2 / REFERENCE_IRRADIANCE).clamp(0.0, 1.0)
    }
}
