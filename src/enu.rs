//! # Geodetic ↔ East/North/Up
//!
//! Position of a geodetic target in the local tangent plane of a geodetic origin
//! `(lat0, lon0, h0)`, and back. Both go through ECEF: the difference of the two ECEF
//! positions is rotated into the frame of the origin.
use crate::{
    constants::{Meter, Triple},
    ecef::{ecef2geodetic, enu2ecef, geodetic2ecef, uvw2enu},
    ellipsoid::Ellipsoid,
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

/// Geodetic target to East/North/Up relative to the geodetic origin `(lat0, lon0, h0)`.
///
/// Arguments
/// ---------
/// * `lat`, `lon`, `h`: target (angles in `unit`, height in meters).
/// * `lat0`, `lon0`, `h0`: frame origin.
/// * `ell`: reference ellipsoid of both points.
///
/// Return
/// ------
/// * `(east, north, up)` in meters.
#[allow(clippy::too_many_arguments)]
pub fn geodetic2enu(
    lat: f64,
    lon: f64,
    h: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (x1, y1, z1) = geodetic2ecef(lat, lon, h, ell, unit)?;
    let (x2, y2, z2) = geodetic2ecef(lat0, lon0, h0, ell, unit)?;

    Ok(uvw2enu(x1 - x2, y1 - y2, z1 - z2, lat0, lon0, unit))
}

/// East/North/Up relative to `(lat0, lon0, h0)` to geodetic coordinates.
///
/// Inverse of [`geodetic2enu`].
#[allow(clippy::too_many_arguments)]
pub fn enu2geodetic(
    e: Meter,
    n: Meter,
    u: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (x, y, z) = enu2ecef(e, n, u, lat0, lon0, h0, ell, unit)?;
    ecef2geodetic(x, y, z, ell, unit)
}
