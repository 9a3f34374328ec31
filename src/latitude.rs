//! # Auxiliary latitudes
//!
//! Conversions between the geodetic latitude `φ` and
//!
//! * the geocentric latitude `ψ`, angle between the equator and the line from the center of
//!   the ellipsoid to the point,
//! * the parametric (reduced) latitude `β`, `tan β = (b/a) tan φ`,
//! * the isometric latitude `ψ`, unbounded, infinite at the poles,
//! * the conformal latitude `χ`, latitude on the conformal sphere,
//! * the rectifying latitude `μ`, proportional to the meridian arc length,
//! * the authalic latitude `ξ`, latitude on the sphere of equal area.
//!
//! Geocentric latitude depends on the height of the point; the other ones are only defined
//! on the surface. The rectifying and authalic latitudes, and the inverse of the conformal
//! latitude, are series expansions (Snyder, *Map Projections: A Working Manual*, 1987); the
//! authalic pair is the shortest, good to about 1e-7° on terrestrial ellipsoids.
use std::f64::consts::FRAC_PI_2;

use crate::{
    constants::{Meter, GEODETIC_TOLERANCE, MAX_GEODETIC_ITERATIONS},
    ecef::{ecef2geodetic, geodetic2ecef, radius_of_curvature_normal},
    ellipsoid::Ellipsoid,
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

/// Ratio `z / ρ` divided by `tan φ` for a point at height `alt` above geodetic latitude `φ`.
#[inline]
fn geocentric_factor(sin_lat: f64, alt: Meter, ell: &Ellipsoid) -> f64 {
    let n = radius_of_curvature_normal(sin_lat, ell);
    1.0 - ell.eccentricity_squared() * n / (n + alt)
}

/// Geodetic latitude to geocentric latitude for a point at ellipsoidal height `alt`.
///
/// ```text
/// tan ψ = (1 - e² N / (N + h)) tan φ
/// ```
pub fn geodetic2geocentric(lat: f64, alt: Meter, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let (s, c) = unit.to_radians(lat).sin_cos();
    let psi = (geocentric_factor(s, alt, ell) * s).atan2(c);

    unit.from_radians(psi)
}

/// Geocentric latitude to geodetic latitude for a point at ellipsoidal height `alt`.
///
/// Exact on the surface (`alt = 0`); for other heights the relation is solved by fixed
/// point iteration, which converges geometrically since `e² < 1`.
pub fn geocentric2geodetic(
    geocentric_lat: f64,
    alt: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> f64 {
    let (sp, cp) = unit.to_radians(geocentric_lat).sin_cos();

    let mut phi = sp.atan2(cp * (1.0 - ell.eccentricity_squared()));
    if alt != 0.0 {
        for _ in 0..MAX_GEODETIC_ITERATIONS * 4 {
            let next = sp.atan2(cp * geocentric_factor(phi.sin(), alt, ell));
            let step = (next - phi).abs();
            phi = next;
            if step <= GEODETIC_TOLERANCE {
                break;
            }
        }
    }

    unit.from_radians(phi)
}

/// Geodetic latitude and height to geocentric latitude.
///
/// Goes through the ECEF position of the point, so it is exact at any height.
pub fn geod2geoc(lat: f64, alt: Meter, ell: &Ellipsoid, unit: AngleUnit) -> Result<f64, GeoFrameError> {
    let (x, _, z) = geodetic2ecef(lat, 0.0, alt, ell, unit)?;
    Ok(unit.from_radians(z.atan2(x)))
}

/// Geocentric latitude and distance from the center of the ellipsoid to geodetic latitude.
pub fn geoc2geod(
    geocentric_lat: f64,
    geocentric_distance: Meter,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<f64, GeoFrameError> {
    let (s, c) = unit.to_radians(geocentric_lat).sin_cos();
    let (lat, _, _) = ecef2geodetic(
        geocentric_distance * c,
        0.0,
        geocentric_distance * s,
        ell,
        unit,
    )?;
    Ok(lat)
}

/// Geodetic latitude to parametric (reduced) latitude, `tan β = sqrt(1 - e²) tan φ`.
pub fn geodetic2parametric(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let (s, c) = unit.to_radians(lat).sin_cos();
    let ratio = ell.semiminor_axis() / ell.semimajor_axis();

    unit.from_radians((ratio * s).atan2(c))
}

/// Parametric (reduced) latitude to geodetic latitude.
pub fn parametric2geodetic(parametric_lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let (s, c) = unit.to_radians(parametric_lat).sin_cos();
    let ratio = ell.semiminor_axis() / ell.semimajor_axis();

    unit.from_radians(s.atan2(ratio * c))
}

/// `|cos φ|` at or below which a latitude is treated as a pole.
const POLE_COS_EPS: f64 = 1e-9;

/// Geodetic latitude to isometric latitude.
///
/// ```text
/// ψ = asinh(tan φ) - e atanh(e sin φ)
/// ```
///
/// Return
/// ------
/// * The isometric latitude in `unit`, `±∞` at the poles.
pub fn geodetic2isometric(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let phi = unit.to_radians(lat);
    if phi.cos().abs() <= POLE_COS_EPS {
        return f64::INFINITY.copysign(lat);
    }

    let e = ell.eccentricity();
    let psi = phi.tan().asinh() - e * (e * phi.sin()).atanh();

    unit.from_radians(psi)
}

/// Isometric latitude to geodetic latitude, through the conformal latitude
/// `χ = atan(sinh ψ)`.
pub fn isometric2geodetic(isometric_lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let chi = unit.to_radians(isometric_lat).sinh().atan();
    unit.from_radians(conformal_to_geodetic(chi, ell))
}

/// Geodetic latitude to conformal latitude.
///
/// ```text
/// χ = 2 atan( sqrt( (1 + sin φ)/(1 - sin φ) · ((1 - e sin φ)/(1 + e sin φ))^e ) ) - π/2
/// ```
///
/// Exact at the poles, where the first ratio is infinite or zero.
pub fn geodetic2conformal(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let s = unit.to_radians(lat).sin();
    let e = ell.eccentricity();

    let ratio = (1.0 + s) / (1.0 - s) * ((1.0 - e * s) / (1.0 + e * s)).powf(e);
    let chi = 2.0 * ratio.sqrt().atan() - FRAC_PI_2;

    unit.from_radians(chi)
}

/// Conformal latitude to geodetic latitude.
pub fn conformal2geodetic(conformal_lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    unit.from_radians(conformal_to_geodetic(unit.to_radians(conformal_lat), ell))
}

fn conformal_to_geodetic(chi: f64, ell: &Ellipsoid) -> f64 {
    let e2 = ell.eccentricity_squared();
    let (e4, e6, e8) = (e2 * e2, e2 * e2 * e2, e2 * e2 * e2 * e2);

    let f1 = e2 / 2.0 + 5.0 * e4 / 24.0 + e6 / 12.0 + 13.0 * e8 / 360.0;
    let f2 = 7.0 * e4 / 48.0 + 29.0 * e6 / 240.0 + 811.0 * e8 / 11520.0;
    let f3 = 7.0 * e6 / 120.0 + 81.0 * e8 / 1120.0;
    let f4 = 4279.0 * e8 / 161280.0;

    chi + f1 * (2.0 * chi).sin()
        + f2 * (4.0 * chi).sin()
        + f3 * (6.0 * chi).sin()
        + f4 * (8.0 * chi).sin()
}

/// Geodetic latitude to rectifying latitude, series in the third flattening `n`.
pub fn geodetic2rectifying(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let phi = unit.to_radians(lat);
    let n = ell.third_flattening();
    let (n2, n3, n4) = (n * n, n * n * n, n * n * n * n);

    let f1 = 3.0 * n / 2.0 - 9.0 * n3 / 16.0;
    let f2 = 15.0 * n2 / 16.0 - 15.0 * n4 / 32.0;
    let f3 = 35.0 * n3 / 48.0;
    let f4 = 315.0 * n4 / 512.0;

    let mu = phi - f1 * (2.0 * phi).sin() + f2 * (4.0 * phi).sin() - f3 * (6.0 * phi).sin()
        + f4 * (8.0 * phi).sin();

    unit.from_radians(mu)
}

/// Rectifying latitude to geodetic latitude.
pub fn rectifying2geodetic(rectifying_lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let mu = unit.to_radians(rectifying_lat);
    let n = ell.third_flattening();
    let (n2, n3, n4) = (n * n, n * n * n, n * n * n * n);

    let f1 = 3.0 * n / 2.0 - 27.0 * n3 / 32.0;
    let f2 = 21.0 * n2 / 16.0 - 55.0 * n4 / 32.0;
    let f3 = 151.0 * n3 / 96.0;
    let f4 = 1097.0 * n4 / 512.0;

    let phi = mu + f1 * (2.0 * mu).sin() + f2 * (4.0 * mu).sin() + f3 * (6.0 * mu).sin()
        + f4 * (8.0 * mu).sin();

    unit.from_radians(phi)
}

/// Geodetic latitude to authalic latitude, series in the eccentricity.
pub fn geodetic2authalic(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let phi = unit.to_radians(lat);
    let e2 = ell.eccentricity_squared();
    let (e4, e6) = (e2 * e2, e2 * e2 * e2);

    let f1 = e2 / 3.0 + 31.0 * e4 / 180.0 + 59.0 * e6 / 560.0;
    let f2 = 17.0 * e4 / 360.0 + 61.0 * e6 / 1260.0;
    let f3 = 383.0 * e6 / 45360.0;

    let xi = phi - f1 * (2.0 * phi).sin() + f2 * (4.0 * phi).sin() - f3 * (6.0 * phi).sin();

    unit.from_radians(xi)
}

/// Authalic latitude to geodetic latitude.
pub fn authalic2geodetic(authalic_lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> f64 {
    let xi = unit.to_radians(authalic_lat);
    let e2 = ell.eccentricity_squared();
    let (e4, e6) = (e2 * e2, e2 * e2 * e2);

    let f1 = e2 / 3.0 + 31.0 * e4 / 180.0 + 517.0 * e6 / 5040.0;
    let f2 = 23.0 * e4 / 360.0 + 251.0 * e6 / 3780.0;
    let f3 = 761.0 * e6 / 45360.0;

    let phi = xi + f1 * (2.0 * xi).sin() + f2 * (4.0 * xi).sin() + f3 * (6.0 * xi).sin();

    unit.from_radians(phi)
}

#[cfg(test)]
mod latitude_test {
    use super::*;
    use crate::rcurve::geocentric_radius;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const DEG: AngleUnit = AngleUnit::Degrees;

    type LatitudeFn = fn(f64, &Ellipsoid, AngleUnit) -> f64;

    /// Check a forward/inverse pair on `(geodetic, auxiliary)` degree values, in both units.
    fn check_pair(forward: LatitudeFn, inverse: LatitudeFn, cases: &[(f64, f64)]) {
        let ell = Ellipsoid::default();
        let rad = AngleUnit::Radians;
        for &(geodetic, auxiliary) in cases {
            assert_relative_eq!(
                forward(geodetic, &ell, DEG),
                auxiliary,
                epsilon = 1e-12,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                inverse(auxiliary, &ell, DEG),
                geodetic,
                epsilon = 1e-12,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                forward(geodetic.to_radians(), &ell, rad),
                auxiliary.to_radians(),
                epsilon = 1e-12,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                inverse(auxiliary.to_radians(), &ell, rad),
                geodetic.to_radians(),
                epsilon = 1e-12,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn test_geodetic_geocentric() {
        let ell = Ellipsoid::default();
        for (geodetic, geocentric) in [
            (0.0, 0.0),
            (90.0, 90.0),
            (-90.0, -90.0),
            (45.0, 44.80757678),
            (-45.0, -44.80757678),
        ] {
            assert_abs_diff_eq!(
                geodetic2geocentric(geodetic, 0.0, &ell, DEG),
                geocentric,
                epsilon = 1e-8
            );
            assert_abs_diff_eq!(
                geocentric2geodetic(geocentric, 0.0, &ell, DEG),
                geodetic,
                epsilon = 1e-8
            );
            let rad = AngleUnit::Radians;
            assert_abs_diff_eq!(
                geodetic2geocentric(f64::to_radians(geodetic), 0.0, &ell, rad),
                f64::to_radians(geocentric),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn test_geocentric_with_height() {
        let ell = Ellipsoid::default();
        for lat in [-60.0, -12.5, 0.0, 30.0, 45.0, 89.0] {
            let psi = geodetic2geocentric(lat, 1e5, &ell, DEG);
            assert_abs_diff_eq!(
                psi,
                geod2geoc(lat, 1e5, &ell, DEG).unwrap(),
                epsilon = 1e-10
            );
            assert_abs_diff_eq!(geocentric2geodetic(psi, 1e5, &ell, DEG), lat, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_geoc2geod_on_surface() {
        let ell = Ellipsoid::default();
        for (geodetic, geocentric) in [(0.0, 0.0), (45.0, 44.80757678), (-45.0, -44.80757678)] {
            let r = geocentric_radius(geodetic, &ell, DEG);
            assert_abs_diff_eq!(
                geoc2geod(geocentric, r, &ell, DEG).unwrap(),
                geodetic,
                epsilon = 1e-8
            );
        }
    }

    #[test]
    fn test_geodetic_parametric() {
        let ell = Ellipsoid::default();
        for (geodetic, parametric) in [
            (0.0, 0.0),
            (90.0, 90.0),
            (-90.0, -90.0),
            (45.0, 44.9037878),
            (-45.0, -44.9037878),
        ] {
            assert_abs_diff_eq!(
                geodetic2parametric(geodetic, &ell, DEG),
                parametric,
                epsilon = 1e-7
            );
            assert_abs_diff_eq!(
                parametric2geodetic(parametric, &ell, DEG),
                geodetic,
                epsilon = 1e-7
            );
        }
    }

    #[test]
    fn test_geodetic_isometric() {
        check_pair(
            geodetic2isometric,
            isometric2geodetic,
            &[(0.0, 0.0), (45.0, 50.227466), (-45.0, -50.227466), (89.0, 271.275)],
        );

        let ell = Ellipsoid::default();
        assert_eq!(geodetic2isometric(90.0, &ell, DEG), f64::INFINITY);
        assert_eq!(geodetic2isometric(-90.0, &ell, DEG), f64::NEG_INFINITY);
        assert_eq!(
            geodetic2isometric(FRAC_PI_2, &ell, AngleUnit::Radians),
            f64::INFINITY
        );
        assert_relative_eq!(isometric2geodetic(f64::INFINITY, &ell, DEG), 90.0, max_relative = 1e-12);
        assert_relative_eq!(
            isometric2geodetic(f64::NEG_INFINITY, &ell, DEG),
            -90.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_isometric_high_precision() {
        let ell = Ellipsoid::default();
        assert_abs_diff_eq!(
            geodetic2isometric(45f64.to_radians(), &ell, AngleUnit::Radians),
            50.227465815385806f64.to_radians(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_geodetic_conformal() {
        check_pair(
            geodetic2conformal,
            conformal2geodetic,
            &[
                (0.0, 0.0),
                (90.0, 90.0),
                (-90.0, -90.0),
                (45.0, 44.80768406),
                (-45.0, -44.80768406),
                (89.0, 88.99327),
            ],
        );
    }

    #[test]
    fn test_geodetic_rectifying() {
        check_pair(
            geodetic2rectifying,
            rectifying2geodetic,
            &[
                (0.0, 0.0),
                (90.0, 90.0),
                (-90.0, -90.0),
                (45.0, 44.855682),
                (-45.0, -44.855682),
            ],
        );
    }

    #[test]
    fn test_geodetic_authalic() {
        check_pair(
            geodetic2authalic,
            authalic2geodetic,
            &[
                (0.0, 0.0),
                (90.0, 90.0),
                (-90.0, -90.0),
                (45.0, 44.87170288),
                (-45.0, -44.87170288),
            ],
        );
    }

    #[test]
    fn test_series_round_trip() {
        let ell = Ellipsoid::default();
        for lat in [-80.0, -33.3, 0.5, 12.0, 60.0, 75.25] {
            let conformal = geodetic2conformal(lat, &ell, DEG);
            assert_abs_diff_eq!(conformal2geodetic(conformal, &ell, DEG), lat, epsilon = 1e-9);
            let rectifying = geodetic2rectifying(lat, &ell, DEG);
            assert_abs_diff_eq!(rectifying2geodetic(rectifying, &ell, DEG), lat, epsilon = 1e-9);
            let authalic = geodetic2authalic(lat, &ell, DEG);
            assert_abs_diff_eq!(authalic2geodetic(authalic, &ell, DEG), lat, epsilon = 1e-6);
        }
    }
}
