//! # Angular separation
//!
//! Great-circle angle between two directions given as longitude/latitude pairs (or right
//! ascension/declination), using the haversine form of Meeus, *Astronomical Algorithms*,
//! ch. 17, which stays accurate for small separations.
use crate::{constants::Radian, units::AngleUnit};

/// Haversine of an angle, `hav θ = sin²(θ/2) = (1 - cos θ) / 2`.
#[inline]
pub fn haversine(theta: Radian) -> f64 {
    (theta / 2.0).sin().powi(2)
}

/// Angular separation between `(lon0, lat0)` and `(lon1, lat1)`.
///
/// ```text
/// hav d = hav(φ0 - φ1) + cos φ0 cos φ1 hav(λ0 - λ1)
/// ```
///
/// Arguments
/// ---------
/// * `lon0`, `lat0`: first direction, in `unit`.
/// * `lon1`, `lat1`: second direction, in `unit`.
///
/// Return
/// ------
/// * The separation in `unit`, in `[0°, 180°]`.
pub fn anglesep_meeus(lon0: f64, lat0: f64, lon1: f64, lat1: f64, unit: AngleUnit) -> f64 {
    let (lon0, lat0) = (unit.to_radians(lon0), unit.to_radians(lat0));
    let (lon1, lat1) = (unit.to_radians(lon1), unit.to_radians(lat1));

    let h = haversine(lat0 - lat1) + lat0.cos() * lat1.cos() * haversine(lon0 - lon1);

    unit.from_radians(2.0 * h.clamp(0.0, 1.0).sqrt().asin())
}
