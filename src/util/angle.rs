/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);

    // `rem_euclid` may round up to the modulus for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// The signed smallest difference `a - b` between two angles in degrees.
///
/// The result lies within `(-180, 180]`.
pub fn delta_angle(a: f64, b: f64) -> f64 {
    let delta = (a - b + 180.0).rem_euclid(360.0) - 180.0;

    if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}
