//! # n-vector
//!
//! The n-vector is the unit normal to the ellipsoid at a point, expressed in ECEF:
//!
//! ```text
//! n = (cos φ cos λ, cos φ sin λ, sin φ)
//! ```
//!
//! It has no singularity at the poles and no longitude wrap-around, which makes it convenient
//! for interpolation and averaging of positions.
//!
//! [`nvector2geodetic`] expects a unit vector and does not normalize its input.
use crate::{
    constants::{Meter, Triple},
    ecef::{ecef2geodetic, geodetic2ecef},
    ellipsoid::Ellipsoid,
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

/// Geodetic latitude and longitude to n-vector.
pub fn geodetic2nvector(lat: f64, lon: f64, unit: AngleUnit) -> Triple {
    let (slat, clat) = unit.to_radians(lat).sin_cos();
    let (slon, clon) = unit.to_radians(lon).sin_cos();

    (clat * clon, clat * slon, slat)
}

/// n-vector to geodetic latitude and longitude.
///
/// Arguments
/// ---------
/// * `n1`, `n2`, `n3`: components of a unit vector (precondition, not checked).
/// * `unit`: angle unit of the returned latitude and longitude.
///
/// Return
/// ------
/// * `(lat, lon)`. The z component is clamped to `[-1, 1]` so that rounding on a
///   normalized input cannot produce a NaN latitude.
pub fn nvector2geodetic(n1: f64, n2: f64, n3: f64, unit: AngleUnit) -> (f64, f64) {
    let lat = n3.clamp(-1.0, 1.0).asin();
    let lon = n2.atan2(n1);

    (unit.from_radians(lat), unit.from_radians(lon))
}

/// ECEF position to the n-vector of its foot point on the ellipsoid.
pub fn ecef2nvector(
    x: Meter,
    y: Meter,
    z: Meter,
    ell: &Ellipsoid,
) -> Result<Triple, GeoFrameError> {
    let (lat, lon, _) = ecef2geodetic(x, y, z, ell, AngleUnit::Radians)?;
    Ok(geodetic2nvector(lat, lon, AngleUnit::Radians))
}

/// n-vector and ellipsoidal height to an ECEF position.
pub fn nvector2ecef(
    n1: f64,
    n2: f64,
    n3: f64,
    alt: Meter,
    ell: &Ellipsoid,
) -> Result<Triple, GeoFrameError> {
    let (lat, lon) = nvector2geodetic(n1, n2, n3, AngleUnit::Radians);
    geodetic2ecef(lat, lon, alt, ell, AngleUnit::Radians)
}
