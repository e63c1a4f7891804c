pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Signed difference `to - from` folded into `(-180, 180]`.
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Lerp between two angles along the shortest arc. `fraction` is clamped to
/// `[0, 1]` and the endpoints come back untouched, so knots are exact. The
/// result is not wrapped; callers normalize where the angle has a range.
pub fn lerp_angle(from: f64, to: f64, fraction: f64) -> f64 {
    let t = fraction.clamp(0.0, 1.0);
    if t == 0.0 {
        return from;
    }
    if t == 1.0 {
        return to;
    }
    from + shortest_delta(from, to) * t
}

pub fn cos_incidence(tilt: f64, panel_azimuth: f64, sun_altitude: f64, sun_azimuth: f64) -> f64 {
    let alt = deg_to_rad(sun_altitude);
    let tilt = deg_to_rad(tilt);
    let az_diff = deg_to_rad(sun_azimuth) - deg_to_rad(panel_azimuth);
    alt.sin() * tilt.cos() + alt.cos() * tilt.sin() * az_diff.cos()
}
