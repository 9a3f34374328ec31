//! # Downrange / Crossrange / Above
//!
//! DCA is the ENU frame rotated in the horizontal plane by a heading, measured clockwise from
//! north in the same unit as the other angles:
//!
//! ```text
//! downrange  =  e sin h + n cos h
//! crossrange = -e cos h + n sin h
//! above      =  u
//! ```
//!
//! With a heading of 90° the frame coincides with ENU; with a heading of 0° downrange points
//! north and crossrange points west. Headings are periodic and not range checked.
//!
//! The ECEF, geodetic, NED and AER variants all go through ENU.
use crate::{
    aer::{aer2enu, enu2aer},
    constants::{Meter, Triple},
    ecef::{ecef2enu, enu2ecef},
    ellipsoid::Ellipsoid,
    enu::{enu2geodetic, geodetic2enu},
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

/// East/North/Up to downrange/crossrange/above for a given heading.
pub fn enu2dca(e: Meter, n: Meter, u: Meter, heading: f64, unit: AngleUnit) -> Triple {
    let (sh, ch) = unit.to_radians(heading).sin_cos();

    let dr = e * sh + n * ch;
    let cr = -e * ch + n * sh;

    (dr, cr, u)
}

/// Downrange/crossrange/above to East/North/Up for a given heading.
///
/// Inverse of [`enu2dca`].
pub fn dca2enu(dr: Meter, cr: Meter, above: Meter, heading: f64, unit: AngleUnit) -> Triple {
    let (sh, ch) = unit.to_radians(heading).sin_cos();

    let e = dr * sh - cr * ch;
    let n = dr * ch + cr * sh;

    (e, n, above)
}

/// Downrange/crossrange/above to North/East/Down.
pub fn dca2ned(dr: Meter, cr: Meter, above: Meter, heading: f64, unit: AngleUnit) -> Triple {
    let (e, n, u) = dca2enu(dr, cr, above, heading, unit);
    (n, e, -u)
}

/// North/East/Down to downrange/crossrange/above.
pub fn ned2dca(n: Meter, e: Meter, d: Meter, heading: f64, unit: AngleUnit) -> Triple {
    enu2dca(e, n, -d, heading, unit)
}

/// ECEF position to downrange/crossrange/above relative to `(lat0, lon0, h0)`.
#[allow(clippy::too_many_arguments)]
pub fn ecef2dca(
    x: Meter,
    y: Meter,
    z: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    heading: f64,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = ecef2enu(x, y, z, lat0, lon0, h0, ell, unit)?;
    Ok(enu2dca(e, n, u, heading, unit))
}

/// Downrange/crossrange/above relative to `(lat0, lon0, h0)` to an ECEF position.
#[allow(clippy::too_many_arguments)]
pub fn dca2ecef(
    dr: Meter,
    cr: Meter,
    above: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    heading: f64,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = dca2enu(dr, cr, above, heading, unit);
    enu2ecef(e, n, u, lat0, lon0, h0, ell, unit)
}

/// Geodetic target to downrange/crossrange/above relative to `(lat0, lon0, h0)`.
#[allow(clippy::too_many_arguments)]
pub fn geodetic2dca(
    lat: f64,
    lon: f64,
    alt: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    heading: f64,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = geodetic2enu(lat, lon, alt, lat0, lon0, h0, ell, unit)?;
    Ok(enu2dca(e, n, u, heading, unit))
}

/// Downrange/crossrange/above relative to `(lat0, lon0, h0)` to geodetic coordinates.
#[allow(clippy::too_many_arguments)]
pub fn dca2geodetic(
    dr: Meter,
    cr: Meter,
    above: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    heading: f64,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = dca2enu(dr, cr, above, heading, unit);
    enu2geodetic(e, n, u, lat0, lon0, h0, ell, unit)
}

/// Azimuth/elevation/range to downrange/crossrange/above.
pub fn aer2dca(
    az: f64,
    el: f64,
    slant_range: Meter,
    heading: f64,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    let (e, n, u) = aer2enu(az, el, slant_range, unit)?;
    Ok(enu2dca(e, n, u, heading, unit))
}

/// Downrange/crossrange/above to azimuth/elevation/range.
pub fn dca2aer(dr: Meter, cr: Meter, above: Meter, heading: f64, unit: AngleUnit) -> Triple {
    let (e, n, u) = dca2enu(dr, cr, above, heading, unit);
    enu2aer(e, n, u, unit)
}
