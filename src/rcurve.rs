//! # Radii of curvature
//!
//! Principal radii of curvature of the ellipsoid at a geodetic latitude, and the distance
//! from the center of the ellipsoid to its surface.
use crate::{constants::Meter, ecef::radius_of_curvature_normal, ellipsoid::Ellipsoid, units::AngleUnit};

/// Prime vertical (transverse) radius of curvature `N = a / sqrt(1 - e² sin² φ)`.
pub fn transverse(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> Meter {
    radius_of_curvature_normal(unit.to_radians(lat).sin(), ell)
}

/// Meridional radius of curvature `M = a (1 - e²) / (1 - e² sin² φ)^(3/2)`.
pub fn meridian(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> Meter {
    let s = unit.to_radians(lat).sin();
    let e2 = ell.eccentricity_squared();

    ell.semimajor_axis() * (1.0 - e2) / (1.0 - e2 * s * s).powf(1.5)
}

/// Radius of the parallel of latitude `φ`, `N cos φ`.
pub fn parallel(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> Meter {
    let lat = unit.to_radians(lat);
    lat.cos() * radius_of_curvature_normal(lat.sin(), ell)
}

/// Distance from the center of the ellipsoid to its surface at geodetic latitude `φ`.
///
/// ```text
/// R(φ) = sqrt( ((a² cos φ)² + (b² sin φ)²) / ((a cos φ)² + (b sin φ)²) )
/// ```
pub fn geocentric_radius(lat: f64, ell: &Ellipsoid, unit: AngleUnit) -> Meter {
    let (s, c) = unit.to_radians(lat).sin_cos();
    let a = ell.semimajor_axis();
    let b = ell.semiminor_axis();

    (((a * a * c).powi(2) + (b * b * s).powi(2)) / ((a * c).powi(2) + (b * s).powi(2))).sqrt()
}
