use sunpath_panel::irradiance::*;
use sunpath_panel::types::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Night ──

#[test]
fn test_zero_power_below_horizon() {
    for alt in [0.0, -0.1, -30.0, -90.0] {
        for tilt in [0.0, 15.0, 45.0, 90.0] {
            for panel_az in [0.0, 90.0, 180.0, 270.0] {
                for sun_az in [0.0, 135.0, 300.0] {
                    assert_eq!(compute_power(tilt, panel_az, alt, sun_az, 0.15), 0.0);
                }
            }
        }
    }
}

// ── Geometry ──

#[test]
fn test_flat_panel_sun_overhead() {
    let p = compute_power(0.0, 180.0, 90.0, 0.0, 0.15);
    assert_approx!(p, 1000.0 * (-0.15f64).exp(), 1e-6);
}

#[test]
fn test_panel_facing_away_is_zero() {
    assert_eq!(compute_power(90.0, 0.0, 10.0, 180.0, 0.15), 0.0);
}

#[test]
fn test_facing_sun_beats_facing_away() {
    let toward = compute_power(45.0, 180.0, 40.0, 180.0, 0.15);
    let side = compute_power(45.0, 90.0, 40.0, 180.0, 0.15);
    assert!(toward > side, "toward={} side={}", toward, side);
}

#[test]
fn test_power_bounded_by_reference() {
    for alt in [1.0, 10.0, 30.0, 60.0, 90.0] {
        for tilt in [0.0, 30.0, 60.0, 90.0] {
            let p = compute_power(tilt, 180.0, alt, 180.0, 0.1);
            assert!(p >= 0.0 && p <= REFERENCE_IRRADIANCE, "alt={} tilt={} p={}", alt, tilt, p);
        }
    }
}

// ── Atmosphere ──

#[test]
fn test_air_mass_overhead_is_one() {
    assert_approx!(air_mass(90.0), 1.0, 1e-12);
    assert_approx!(air_mass(30.0), 2.0, 1e-9);
}

#[test]
fn test_air_mass_floored_near_horizon() {
    assert_approx!(air_mass(1.0), 10.0, 1e-9);
    assert_approx!(air_mass(0.01), 10.0, 1e-9);
}

#[test]
fn test_monotonic_in_extinction() {
    for alt in [2.0, 15.0, 45.0, 80.0] {
        let mut previous = f64::INFINITY;
        let mut k = 0.1;
        while k <= 0.3 + 1e-12 {
            let p = compute_power(30.0, 180.0, alt, 200.0, k);
            assert!(p <= previous, "alt={} k={} p={} previous={}", alt, k, p, previous);
            previous = p;
            k += 0.02;
        }
    }
}

#[test]
fn test_transmittance_decreases_toward_horizon() {
    assert!(transmittance(60.0, 0.15) > transmittance(20.0, 0.15));
}

// ── Model ──

#[test]
fn test_model_matches_free_function() {
    let model = IrradianceModel::new(PowerModelConfig::new(0.2).unwrap());
    let panel = PanelOrientation::new(35.0, 180.0);
    let sun = SunPosition { azimuth: 160.0, altitude: 42.0 };
    assert_eq!(model.power(&panel, &sun), compute_power(35.0, 180.0, 42.0, 160.0, 0.2));
}

#[test]
fn test_reading_day_and_night() {
    let model = IrradianceModel::default();
    let panel = PanelOrientation::default();
    let day = model.reading(&panel, &SunPosition { azimuth: 180.0, altitude: 20.0 });
    assert!(day.is_day);
    assert!(day.watts_per_m2 > 0.0);
    assert!(day.relative_output() > 0.0 && day.relative_output() <= 1.0);

    let night = model.reading(&panel, &SunPosition { azimuth: 0.0, altitude: -5.0 });
    assert!(!night.is_day);
    assert_eq!(night.watts_per_m2, 0.0);
    assert_eq!(night.relative_output(), 0.0);
}

// ── Config ──

#[test]
fn test_power_model_config_range() {
    assert_eq!(PowerModelConfig::default().extinction_coefficient, 0.15);
    assert!(PowerModelConfig::new(0.1).is_ok());
    assert!(PowerModelConfig::new(0.3).is_ok());
    assert!(PowerModelConfig::new(0.05).is_err());
    assert!(PowerModelConfig::new(0.31).is_err());
    assert!(PowerModelConfig::new(f64::NAN).is_err());
}

// ── Panel ──

#[test]
fn test_panel_new_clamps_and_wraps() {
    let panel = PanelOrientation::new(120.0, -90.0);
    assert_eq!(panel.tilt, 90.0);
    assert_eq!(panel.azimuth, 270.0);
    assert_eq!(PanelOrientation::new(-5.0, 0.0).tilt, 0.0);
}

#[test]
fn test_panel_step_tilt_clamped() {
    let mut panel = PanelOrientation::new(80.0, 180.0);
    panel.step_tilt(15.0);
    assert_eq!(panel.tilt, 90.0);
    panel.step_tilt(-15.0);
    assert_eq!(panel.tilt, 75.0);
    panel.set_tilt(-40.0);
    assert_eq!(panel.tilt, 0.0);
}

#[test]
fn test_panel_display_angle() {
    assert_eq!(PanelOrientation::default().display_angle(), 0.0);
    assert_eq!(PanelOrientation::new(30.0, 180.0).display_angle(), 60.0);
}
