//! # North/East/Down
//!
//! NED is ENU with the first two axes swapped and the vertical flipped:
//! `(n, e, d) = (N, E, -U)`. Every transform here reorders its inputs and delegates to the
//! ENU or AER counterpart.
use crate::{
    aer::{aer2enu, enu2aer},
    constants::{Meter, Triple},
    ecef::{ecef2enu, ecef2enuv, enu2ecef},
    ellipsoid::Ellipsoid,
    enu::{enu2geodetic, geodetic2enu},
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

#[inline]
fn enu_to_ned((e, n, u): Triple) -> Triple {
    (n, e, -u)
}

/// Azimuth/elevation/range to North/East/Down.
pub fn aer2ned(az: f64, elev: f64, slant_range: Meter, unit: AngleUnit) -> Result<Triple, GeoFrameError> {
    aer2enu(az, elev, slant_range, unit).map(enu_to_ned)
}

/// North/East/Down to azimuth/elevation/range.
pub fn ned2aer(n: Meter, e: Meter, d: Meter, unit: AngleUnit) -> Triple {
    enu2aer(e, n, -d, unit)
}

/// North/East/Down relative to `(lat0, lon0, h0)` to geodetic coordinates.
#[allow(clippy::too_many_arguments)]
pub fn ned2geodetic(
    n: Meter,
    e: Meter,
    d: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    enu2geodetic(e, n, -d, lat0, lon0, h0, ell, unit)
}

/// North/East/Down relative to `(lat0, lon0, h0)` to an ECEF position.
#[allow(clippy::too_many_arguments)]
pub fn ned2ecef(
    n: Meter,
    e: Meter,
    d: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    enu2ecef(e, n, -d, lat0, lon0, h0, ell, unit)
}

/// ECEF position to North/East/Down relative to `(lat0, lon0, h0)`.
#[allow(clippy::too_many_arguments)]
pub fn ecef2ned(
    x: Meter,
    y: Meter,
    z: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    ecef2enu(x, y, z, lat0, lon0, h0, ell, unit).map(enu_to_ned)
}

/// Geodetic target to North/East/Down relative to `(lat0, lon0, h0)`.
#[allow(clippy::too_many_arguments)]
pub fn geodetic2ned(
    lat: f64,
    lon: f64,
    h: Meter,
    lat0: f64,
    lon0: f64,
    h0: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    geodetic2enu(lat, lon, h, lat0, lon0, h0, ell, unit).map(enu_to_ned)
}

/// ECEF vector to its North/East/Down components at `(lat0, lon0)`.
pub fn ecef2nedv(x: f64, y: f64, z: f64, lat0: f64, lon0: f64, unit: AngleUnit) -> Triple {
    enu_to_ned(ecef2enuv(x, y, z, lat0, lon0, unit))
}

#[cfg(test)]
mod ned_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ned_is_reordered_enu() {
        let ell = Ellipsoid::default();
        let (e, n, u) =
            geodetic2enu(42.1, -81.9, 300.0, 42.0, -82.0, 200.0, &ell, AngleUnit::Degrees)
                .unwrap();
        let ned =
            geodetic2ned(42.1, -81.9, 300.0, 42.0, -82.0, 200.0, &ell, AngleUnit::Degrees)
                .unwrap();
        assert_eq!(ned, (n, e, -u));

        let (x, y, z) =
            ned2ecef(ned.0, ned.1, ned.2, 42.0, -82.0, 200.0, &ell, AngleUnit::Degrees).unwrap();
        let back = ecef2ned(x, y, z, 42.0, -82.0, 200.0, &ell, AngleUnit::Degrees).unwrap();
        assert_abs_diff_eq!(back.0, ned.0, epsilon = 1e-6);
        assert_abs_diff_eq!(back.1, ned.1, epsilon = 1e-6);
        assert_abs_diff_eq!(back.2, ned.2, epsilon = 1e-6);

        let (lat, lon, h) =
            ned2geodetic(ned.0, ned.1, ned.2, 42.0, -82.0, 200.0, &ell, AngleUnit::Degrees)
                .unwrap();
        assert_abs_diff_eq!(lat, 42.1, epsilon = 1e-9);
        assert_abs_diff_eq!(lon, -81.9, epsilon = 1e-9);
        assert_abs_diff_eq!(h, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn test_aer_ned() {
        let (n, e, d) = aer2ned(90.0, 0.0, 10.0, AngleUnit::Degrees).unwrap();
        assert_abs_diff_eq!(n, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d, 0.0, epsilon = 1e-12);

        assert_eq!(ned2aer(0.0, 0.0, 5.0, AngleUnit::Degrees), (0.0, -90.0, 5.0));
        assert!(aer2ned(0.0, 0.0, -5.0, AngleUnit::Degrees).is_err());
    }

    #[test]
    fn test_ecef2nedv() {
        // Local vertical at (0, 0) is +x ECEF, which is "up" i.e. negative down
        let (n, e, d) = ecef2nedv(1.0, 0.0, 0.0, 0.0, 0.0, AngleUnit::Degrees);
        assert_eq!((n, e, d), (0.0, 0.0, -1.0));
    }
}
