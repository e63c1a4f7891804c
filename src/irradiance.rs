use crate::angles::{cos_incidence, deg_to_rad};
use crate::types::{PanelOrientation, PowerModelConfig, PowerReading, SunPosition, REFERENCE_IRRADIANCE};

/// Lower bound on `sin(altitude)` so the air mass stays finite near the horizon.
pub const MIN_SIN_ALTITUDE: f64 = 0.1;

pub fn air_mass(sun_altitude: f64) -> f64 {
    1.0 / deg_to_rad(sun_altitude).sin().max(MIN_SIN_ALTITUDE)
}

pub fn transmittance(sun_altitude: f64, extinction_coefficient: f64) -> f64 {
    (-extinction_coefficient * air_mass(sun_altitude)).exp()
}

/// Irradiance in W/m² on a flat panel. Zero at night and when the panel faces
/// away from the sun.
pub fn compute_power(
    tilt: f64,
    panel_azimuth: f64,
    sun_altitude: f64,
    sun_azimuth: f64,
    extinction_coefficient: f64,
) -> f64 {
    if sun_altitude <= 0.0 {
        return 0.0;
    }
    let cos_i = cos_incidence(tilt, panel_azimuth, sun_altitude, sun_azimuth);
    REFERENCE_IRRADIANCE * transmittance(sun_altitude, extinction_coefficient) * cos_i.max(0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IrradianceModel {
    pub config: PowerModelConfig,
}

impl IrradianceModel {
    pub fn new(config: PowerModelConfig) -> Self {
        Self { config }
    }

    pub fn power(&self, panel: &PanelOrientation, sun: &SunPosition) -> f64 {
        compute_power(
            panel.tilt,
            panel.azimuth,
            sun.altitude,
            sun.azimuth,
            self.config.extinction_coefficient,
        )
    }

    pub fn reading(&self, panel: &PanelOrientation, sun: &SunPosition) -> PowerReading {
        PowerReading {
            watts_per_m2: self.power(panel, sun),
            is_day: sun.is_above_horizon(),
        }
    }
}
