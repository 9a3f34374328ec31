//! # Spherical coordinates
//!
//! Geocentric spherical coordinates `(ψ, λ, r)`: the geocentric latitude, the longitude and
//! the distance from the center of the ellipsoid. The longitude is shared with the geodetic
//! coordinates and passed through unchanged.
//!
//! Both directions go through the ECEF position of the point, so they are exact at any
//! height and the inverse inherits the degenerate cases of [`ecef2geodetic`].
use crate::{
    constants::{Meter, Triple},
    ecef::{check_latitude, ecef2geodetic, geodetic2ecef},
    ellipsoid::Ellipsoid,
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

/// Geodetic coordinates to spherical coordinates.
///
/// Arguments
/// ---------
/// * `lat`, `lon`: geodetic latitude and longitude, in `unit`.
/// * `alt`: ellipsoidal height in meters.
/// * `ell`: reference ellipsoid.
///
/// Return
/// ------
/// * `(geocentric_lat, lon, radius)`, angles in `unit` and `radius` in meters.
/// * [`GeoFrameError::InvalidLatitude`] when `|lat| > 90°`.
///
/// # See also
/// * [`spherical2geodetic`] – the inverse transform
/// * [`crate::latitude::geod2geoc`] – the latitude alone
pub fn geodetic2spherical(
    lat: f64,
    lon: f64,
    alt: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    // Meridian plane of the point: y = 0, x = distance to the polar axis
    let (q, _, z) = geodetic2ecef(lat, 0.0, alt, ell, unit)?;

    Ok((unit.from_radians(z.atan2(q)), lon, q.hypot(z)))
}

/// Spherical coordinates to geodetic coordinates.
///
/// Return
/// ------
/// * `(lat, lon, alt)`, angles in `unit` and `alt` in meters.
/// * [`GeoFrameError::InvalidLatitude`] when `|geocentric_lat| > 90°`.
/// * [`GeoFrameError::DegenerateInput`] for a zero, negative or non-finite `radius`.
pub fn spherical2geodetic(
    geocentric_lat: f64,
    lon: f64,
    radius: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Triple, GeoFrameError> {
    check_latitude(geocentric_lat, unit)?;
    if radius < 0.0 {
        return Err(GeoFrameError::DegenerateInput(format!(
            "negative spherical radius {radius}"
        )));
    }

    let (s, c) = unit.to_radians(geocentric_lat).sin_cos();
    let (lat, _, alt) = ecef2geodetic(radius * c, 0.0, radius * s, ell, unit)?;

    Ok((lat, lon, alt))
}

#[cfg(test)]
mod spherical_test {
    use super::*;
    use crate::rcurve::geocentric_radius;
    use approx::assert_abs_diff_eq;

    const DEG: AngleUnit = AngleUnit::Degrees;

    #[test]
    fn test_equator_and_poles() {
        let ell = Ellipsoid::default();
        let (a, b) = (ell.semimajor_axis(), ell.semiminor_axis());

        assert_eq!(
            geodetic2spherical(0.0, 12.0, 0.0, &ell, DEG).unwrap(),
            (0.0, 12.0, a)
        );

        for (lat, psi) in [(90.0, 90.0), (-90.0, -90.0)] {
            let (lat_s, lon, r) = geodetic2spherical(lat, -1.0, 0.0, &ell, DEG).unwrap();
            assert_abs_diff_eq!(lat_s, psi, epsilon = 1e-12);
            assert_eq!(lon, -1.0);
            assert_abs_diff_eq!(r, b, epsilon = 1e-6);

            let (lat2, lon2, alt) = spherical2geodetic(psi, -1.0, b, &ell, DEG).unwrap();
            assert_abs_diff_eq!(lat2, lat, epsilon = 1e-9);
            assert_eq!(lon2, -1.0);
            assert_abs_diff_eq!(alt, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_surface_matches_geocentric_latitude() {
        let ell = Ellipsoid::default();
        let r45 = geocentric_radius(45.0, &ell, DEG);

        let (lat_s, lon, r) = geodetic2spherical(45.0, 30.0, 0.0, &ell, DEG).unwrap();
        assert_abs_diff_eq!(lat_s, 44.80757678, epsilon = 1e-8);
        assert_eq!(lon, 30.0);
        assert_abs_diff_eq!(r, r45, epsilon = 1e-6);

        let (lat, lon, alt) = spherical2geodetic(44.80757678, 30.0, r45, &ell, DEG).unwrap();
        assert_abs_diff_eq!(lat, 45.0, epsilon = 1e-8);
        assert_eq!(lon, 30.0);
        assert_abs_diff_eq!(alt, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let ell = Ellipsoid::from_name("grs80").unwrap();
        for (lat, lon, alt) in [(-60.5, 170.0, 400e3), (12.25, -3.0, -150.0), (89.0, 0.0, 35786e3)] {
            let (lat_s, lon_s, r) = geodetic2spherical(lat, lon, alt, &ell, DEG).unwrap();
            let (lat2, lon2, alt2) = spherical2geodetic(lat_s, lon_s, r, &ell, DEG).unwrap();
            assert_abs_diff_eq!(lat2, lat, epsilon = 1e-9);
            assert_eq!(lon2, lon);
            assert_abs_diff_eq!(alt2, alt, epsilon = 1e-6);
        }

        let rad = AngleUnit::Radians;
        let (lat_s, _, r) = geodetic2spherical(0.3, 0.1, 10.0, &ell, rad).unwrap();
        let (lat, _, alt) = spherical2geodetic(lat_s, 0.1, r, &ell, rad).unwrap();
        assert_abs_diff_eq!(lat, 0.3, epsilon = 1e-13);
        assert_abs_diff_eq!(alt, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_inputs() {
        let ell = Ellipsoid::default();
        assert_eq!(
            geodetic2spherical(95.0, 0.0, 0.0, &ell, DEG),
            Err(GeoFrameError::InvalidLatitude(95.0))
        );
        assert!(matches!(
            spherical2geodetic(-91.0, 0.0, 7e6, &ell, DEG),
            Err(GeoFrameError::InvalidLatitude(_))
        ));
        assert!(matches!(
            spherical2geodetic(10.0, 0.0, 0.0, &ell, DEG),
            Err(GeoFrameError::DegenerateInput(_))
        ));
        assert!(matches!(
            spherical2geodetic(10.0, 0.0, -1.0, &ell, DEG),
            Err(GeoFrameError::DegenerateInput(_))
        ));
    }
}
