use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use sunpath_panel::{load_table_file, IrradianceModel, SimulationClock, SimulationConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Steps a tabulated sun path and prints panel power", long_about = None)]
struct Inputs {
    /// Sun table (month,time,azimuth,altitude). Overrides the config's data_path.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON simulation config.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Month to start in; defaults to the first month in the table.
    #[arg(short, long)]
    month: Option<String>,

    #[arg(short, long, default_value_t = 48)]
    ticks: u32,

    /// Real seconds per tick, scaled by the config's day speed.
    #[arg(long, default_value_t = 1.0)]
    tick_seconds: f64,

    /// Panel tilt in degrees, 0 (flat) to 90.
    #[arg(long)]
    tilt: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Inputs::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    let data_path = args.data.clone().unwrap_or_else(|| config.data_path.clone());

    let loaded = load_table_file(&data_path)
        .with_context(|| format!("reading sun table {}", data_path.display()))?;
    for warning in &loaded.warnings {
        warn!("{warning}");
    }
    let table = loaded.require_data()?;

    let mut clock = match &args.month {
        Some(month) => SimulationClock::new(month.clone(), 0.0),
        None => SimulationClock::start(table).context("sun table has no calendar months")?,
    };

    let model = IrradianceModel::new(config.power_model()?);
    let mut panel = config.panel();
    if let Some(tilt) = args.tilt {
        panel.set_tilt(tilt);
    }

    println!("=== Sun Path Demo ===");
    println!("Table: {} ({} samples)", data_path.display(), table.len());
    println!("Months: {}", table.months_present().join(", "));
    println!(
        "Panel: tilt {:.0}°, azimuth {:.0}° (panel angle {:.0}°)",
        panel.tilt,
        panel.azimuth,
        panel.display_angle()
    );
    println!();

    for _ in 0..args.ticks {
        let sun = clock.sun_position(table)?;
        let reading = model.reading(&panel, &sun);
        if reading.is_day {
            println!(
                "{} {:<10} az {:6.1}° alt {:5.1}°  power {:7.2} W/m²",
                clock.display_time(),
                clock.month,
                sun.azimuth,
                sun.altitude,
                reading.watts_per_m2
            );
        } else {
            println!(
                "{} {:<10} az {:6.1}° alt {:5.1}°  NIGHT: 0 W/m²",
                clock.display_time(),
                clock.month,
                sun.azimuth,
                sun.altitude
            );
        }
        clock.advance(args.tick_seconds, config.day_speed, table);
    }

    Ok(())
}
