pub mod angles;
pub mod clock;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod irradiance;
pub mod loader;
pub mod lookup_table;
pub mod types;

pub use angles::{cos_incidence, deg_to_rad, lerp_angle, normalize_angle, rad_to_deg, shortest_delta};

pub use clock::{SimulationClock, DEFAULT_DAY_SPEED, HOURS_PER_DAY};

pub use config::SimulationConfig;

pub use error::{Error, ParseWarning, Result};

pub use interpolate::{interpolate, interpolate_samples};

pub use irradiance::{air_mass, compute_power, transmittance, IrradianceModel};

pub use loader::{parse_records, parse_time_of_day, ParsedRecords};

pub use lookup_table::{
    calendar_months, load_table, load_table_file, months_present, LoadedTable, SunPositionTable,
};

pub use types::{
    PanelOrientation, PowerModelConfig, PowerReading, SunPosition, SunSample,
    DEFAULT_EXTINCTION_COEFFICIENT, REFERENCE_IRRADIANCE,
};
