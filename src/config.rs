use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_DAY_SPEED;
use crate::error::{Error, Result};
use crate::types::{PanelOrientation, PowerModelConfig, DEFAULT_EXTINCTION_COEFFICIENT, MAX_TILT, MIN_TILT};

pub const MIN_DAY_SPEED: f64 = 0.1;
pub const MAX_DAY_SPEED: f64 = 100.0;

fn default_data_path() -> PathBuf {
    PathBuf::from("data/sundata.csv")
}
fn default_extinction_coefficient() -> f64 { DEFAULT_EXTINCTION_COEFFICIENT }
fn default_panel_azimuth() -> f64 { 180.0 }
fn default_initial_tilt() -> f64 { 90.0 }
fn default_day_speed() -> f64 { DEFAULT_DAY_SPEED }
fn default_tilt_step() -> f64 { 15.0 }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default = "default_extinction_coefficient")]
    pub extinction_coefficient: f64,
    #[serde(default = "default_panel_azimuth")]
    pub panel_azimuth: f64,
    #[serde(default = "default_initial_tilt")]
    pub initial_tilt: f64,
    /// Simulated minutes per real second.
    #[serde(default = "default_day_speed")]
    pub day_speed: f64,
    #[serde(default = "default_tilt_step")]
    pub tilt_step: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            extinction_coefficient: default_extinction_coefficient(),
            panel_azimuth: default_panel_azimuth(),
            initial_tilt: default_initial_tilt(),
            day_speed: default_day_speed(),
            tilt_step: default_tilt_step(),
        }
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        PowerModelConfig::new(self.extinction_coefficient)?;
        if !self.panel_azimuth.is_finite() {
            return Err(invalid(format!("panel azimuth {} is not finite", self.panel_azimuth)));
        }
        if !(MIN_TILT..=MAX_TILT).contains(&self.initial_tilt) {
            return Err(invalid(format!(
                "initial tilt {} outside [{MIN_TILT}, {MAX_TILT}]",
                self.initial_tilt
            )));
        }
        if !(MIN_DAY_SPEED..=MAX_DAY_SPEED).contains(&self.day_speed) {
            return Err(invalid(format!(
                "day speed {} outside [{MIN_DAY_SPEED}, {MAX_DAY_SPEED}]",
                self.day_speed
            )));
        }
        if self.tilt_step.is_nan() || self.tilt_step <= 0.0 {
            return Err(invalid(format!("tilt step {} must be positive", self.tilt_step)));
        }
        Ok(())
    }

    pub fn power_model(&self) -> Result<PowerModelConfig> {
        PowerModelConfig::new(self.extinction_coefficient)
    }

    pub fn panel(&self) -> PanelOrientation {
        PanelOrientation::new(self.initial_tilt, self.panel_azimuth)
    }
}
