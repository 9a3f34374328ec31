//! # Azimuth / Elevation / Range
//!
//! Spherical coordinates in the local tangent plane:
//!
//! * azimuth – clockwise from north, in `[0°, 360°)`,
//! * elevation – above the local horizontal plane, in `[-90°, 90°]`,
//! * slant range – distance in meters, never negative.
//!
//! [`enu2aer`] and [`aer2enu`] are the primitive pair; the other transforms compose them with
//! the ECEF, geodetic and ECI conversions.
use hifitime::Epoch;

use crate::{
    constants::{Meter, Triple, ENU_SNAP_THRESHOLD},
    eci::{ecef2eci, eci2ecef, EarthRotationModel},
    ecef::{ecef2enu, enu2ecef},
    ellipsoid::Ellipsoid,
    enu::{enu2geodetic, geodetic2enu},
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

/// East/North/Up to azimuth/elevation/range.
///
/// Components smaller than 1 mm are treated as zero so that the azimuth of a target almost
/// straight above or below the observer stays stable.
///
/// Arguments
/// ---------
/// * `e`, `n`, `u`: local tangent-plane components in meters.
/// * `unit`: angle unit of the returned azimuth and elevation.
///
/// Return
/// ------
/// * `(az, el, range)`, `az` in `[0, 360°)`.
pub fn enu2aer(e: Meter, n: Meter, u: Meter, unit: AngleUnit) -> Triple {
    let snap = |v: f64| if v.abs() < ENU_SNAP_THRESHOLD { 0.0 } else { v };
    let (e, n, u) = (snap(e), snap(n), snap(u));

    let r = e.hypot(n);
    let slant_range = r.hypot(u);
    let elev = u.atan2(r);
    let az = e.atan2(n).rem_euclid(std::f64::consts::TAU);

    (unit.from_radians(az), unit.from_radians(elev), slant_range)
}

/// Azimuth/elevation/range to East/North/Up.
///
/// Return
/// ------
/// * `(east, north, up)` in meters, or [`GeoFrameError::NegativeRange`] when
///   `slant_range < 0`.
pub fn aer2enu(
    az: f64,
    el: f64,
    slant_range: Meter,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    if slant_range < 0.0 {
        return Err(GeoFrameError::NegativeRange(slant_range));
    }

    let (saz, caz) = unit.to_radians(az).sin_cos();
    let (sel, cel) = unit.to_radians(el).sin_cos();

    let r = slant_range * cel;

    Ok((r * saz, r * caz, slant_range * sel))
}

/// ECEF target to azimuth/elevation/range seen from the geodetic observer `(lat0, lon0, h0)`.
#[allow(clippy::too_many_arguments)]
pub fn ecef2aer(
    x: Meter,
    y: Meter,
    z: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = ecef2enu(x, y, z, lat0, lon0, h0, ell, unit)?;
    Ok(enu2aer(e, n, u, unit))
}

/// Azimuth/elevation/range seen from `(lat0, lon0, h0)` to an ECEF position.
#[allow(clippy::too_many_arguments)]
pub fn aer2ecef(
    az: f64,
    el: f64,
    slant_range: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = aer2enu(az, el, slant_range, unit)?;
    enu2ecef(e, n, u, lat0, lon0, h0, ell, unit)
}

/// Geodetic target to azimuth/elevation/range seen from `(lat0, lon0, h0)`.
#[allow(clippy::too_many_arguments)]
pub fn geodetic2aer(
    lat: f64,
    lon: f64,
    h: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = geodetic2enu(lat, lon, h, lat0, lon0, h0, ell, unit)?;
    Ok(enu2aer(e, n, u, unit))
}

/// Azimuth/elevation/range seen from `(lat0, lon0, h0)` to geodetic coordinates.
#[allow(clippy::too_many_arguments)]
pub fn aer2geodetic(
    az: f64,
    el: f64,
    slant_range: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (x, y, z) = aer2ecef(az, el, slant_range, lat0, lon0, h0, ell, unit)?;
    crate::ecef::ecef2geodetic(x, y, z, ell, unit)
}

/// Observer location on the Earth, as used by the ECI ↔ AER transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub lat: f64,
    pub lon: f64,
    pub alt: Meter,
}

impl Site {
    pub fn new(lat: f64, lon: f64, alt: Meter) -> Self {
        Site { lat, lon, alt }
    }
}

/// ECI target at `time` to azimuth/elevation/range seen from `site`.
///
/// Arguments
/// ---------
/// * `x`, `y`, `z`: ECI position in meters.
/// * `site`: observer geodetic position (angles in `unit`).
/// * `time`: observation time.
/// * `model`: Earth-rotation model for the ECI → ECEF step.
#[allow(clippy::too_many_arguments)]
pub fn eci2aer(
    x: Meter,
    y: Meter,
    z: Meter,
    site: &Site,
    time: &Epoch,
    ell: &Ellipsoid,
    unit: AngleUnit,
    model: EarthRotationModel,
) -> Result<Triple, GeoFrameError> {
    let (xe, ye, ze) = eci2ecef(x, y, z, time, model)?;
    ecef2aer(xe, ye, ze, site.lat, site.lon, site.alt, ell, unit)
}

/// Azimuth/elevation/range seen from `site` at `time` to an ECI position.
#[allow(clippy::too_many_arguments)]
pub fn aer2eci(
    az: f64,
    el: f64,
    slant_range: Meter,
    site: &Site,
    time: &Epoch,
    ell: &Ellipsoid,
    unit: AngleUnit,
    model: EarthRotationModel,
) -> Result<Triple, GeoFrameError> {
    let (x, y, z) = aer2ecef(az, el, slant_range, site.lat, site.lon, site.alt, ell, unit)?;
    ecef2eci(x, y, z, time, model)
}
