//! # Earth orientation (IAU 1976 precession, IAU 1980 nutation)
//!
//! Builds the rotation from the mean equator and equinox of J2000 (the ECI frame) to the
//! Earth-fixed frame at a given date:
//!
//! ```text
//! r_ecef = R3(GAST) · N · P · r_eci
//! ```
//!
//! * `P` – precession from J2000 to the mean equator of date ([`prec`]),
//! * `N` – nutation from the mean to the true equator of date ([`rnut80`]),
//! * `R3(GAST)` – Earth rotation by the apparent sidereal time ([`gast`]).
//!
//! Polar motion is ignored and UT1 is approximated by UTC, which limits the accuracy to a few
//! tens of meters at the Earth surface.
use hifitime::Epoch;
use nalgebra::Matrix3;

use crate::{
    constants::{ArcSec, Radian, DAYS_PER_JULIAN_CENTURY, DPI, MJD, RADEG, RADSEC, T2000},
    rotation::{r1, r2, r3},
    time::gmst,
};

/// Julian centuries elapsed since J2000 for a Modified Julian Date.
#[inline]
fn centuries_since_j2000(tjm: MJD) -> f64 {
    (tjm - T2000) / DAYS_PER_JULIAN_CENTURY
}

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date (TT scale).
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// ```text
/// ε(T) = 84381.448″ - 46.815″ T - 0.0006″ T² + 0.00181″ T³
/// ```
/// evaluated with Horner's scheme, `T` in Julian centuries since J2000.
pub fn obleq(tjm: MJD) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    let t = centuries_since_j2000(tjm);

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// One periodic term of the IAU 1980 nutation series:
/// multipliers of `(L, L', F, D, Ω)`, then the longitude coefficient and its rate per
/// century, then the obliquity coefficient and its rate, all in units of 0.0001″.
type NutationTerm = ([f64; 5], f64, f64, f64, f64);

// Leading terms of the Wahr series, sorted by decreasing amplitude of the longitude term.
// Truncation error below 0.01″ in Δψ, i.e. a few decimeters at the Earth surface.
#[rustfmt::skip]
const NUTATION_1980: [NutationTerm; 18] = [
    ([ 0.0,  0.0,  0.0,  0.0,  1.0], -171996.0, -174.2, 92025.0,  8.9),
    ([ 0.0,  0.0,  2.0, -2.0,  2.0],  -13187.0,   -1.6,  5736.0, -3.1),
    ([ 0.0,  0.0,  2.0,  0.0,  2.0],   -2274.0,   -0.2,   977.0, -0.5),
    ([ 0.0,  0.0,  0.0,  0.0,  2.0],    2062.0,    0.2,  -895.0,  0.5),
    ([ 0.0,  1.0,  0.0,  0.0,  0.0],    1426.0,   -3.4,    54.0, -0.1),
    ([ 1.0,  0.0,  0.0,  0.0,  0.0],     712.0,    0.1,    -7.0,  0.0),
    ([ 0.0,  1.0,  2.0, -2.0,  2.0],    -517.0,    1.2,   224.0, -0.6),
    ([ 0.0,  0.0,  2.0,  0.0,  1.0],    -386.0,   -0.4,   200.0,  0.0),
    ([ 1.0,  0.0,  2.0,  0.0,  2.0],    -301.0,    0.0,   129.0, -0.1),
    ([ 0.0, -1.0,  2.0, -2.0,  2.0],     217.0,   -0.5,   -95.0,  0.3),
    ([ 1.0,  0.0,  0.0, -2.0,  0.0],    -158.0,    0.0,    -1.0,  0.0),
    ([ 0.0,  0.0,  2.0, -2.0,  1.0],     129.0,    0.1,   -70.0,  0.0),
    ([-1.0,  0.0,  2.0,  0.0,  2.0],     123.0,    0.0,   -53.0,  0.0),
    ([ 1.0,  0.0,  0.0,  0.0,  1.0],      63.0,    0.1,   -33.0,  0.0),
    ([ 0.0,  0.0,  0.0,  2.0,  0.0],      63.0,    0.0,    -2.0,  0.0),
    ([-1.0,  0.0,  2.0,  2.0,  2.0],     -59.0,    0.0,    26.0,  0.0),
    ([-1.0,  0.0,  0.0,  0.0,  1.0],     -58.0,   -0.1,    32.0,  0.0),
    ([ 1.0,  0.0,  2.0,  0.0,  1.0],     -51.0,    0.0,    27.0,  0.0),
];

/// Compute the nutation angles in longitude and obliquity (IAU 1980, Wahr).
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date (TT scale).
///
/// Returns
/// --------
/// * A tuple `(Δψ, Δε)` in arcseconds.
///
/// Description
/// -----------
/// The five Delaunay arguments (mean anomalies of the Moon and the Sun, argument of latitude
/// of the Moon, mean elongation of the Moon from the Sun, longitude of the lunar ascending
/// node) are cubic polynomials of time. The nutation angles are sums of sines (Δψ) and
/// cosines (Δε) of integer combinations of those arguments, evaluated here on the leading
/// terms of the series.
pub fn nutn80(tjm: MJD) -> (ArcSec, ArcSec) {
    let t = centuries_since_j2000(tjm);
    let t2 = t * t;
    let t3 = t2 * t;

    let l = ((485866.733 + 1717915922.633 * t + 31.310 * t2 + 0.064 * t3) * RADSEC) % DPI;
    let lp = ((1287099.804 + 129596581.224 * t - 0.577 * t2 - 0.012 * t3) * RADSEC) % DPI;
    let f = ((335778.877 + 1739527263.137 * t - 13.257 * t2 + 0.011 * t3) * RADSEC) % DPI;
    let d = ((1072261.307 + 1602961601.328 * t - 6.891 * t2 + 0.019 * t3) * RADSEC) % DPI;
    let om = ((450160.280 - 6962890.539 * t + 7.455 * t2 + 0.008 * t3) * RADSEC) % DPI;

    let (dpsi, deps) = NUTATION_1980
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), (m, psi, psi_t, eps, eps_t)| {
            let arg = m[0] * l + m[1] * lp + m[2] * f + m[3] * d + m[4] * om;
            let (s, c) = arg.sin_cos();
            (dpsi + (psi + psi_t * t) * s, deps + (eps + eps_t * t) * c)
        });

    // 0.0001″ → ″
    (dpsi * 1e-4, deps * 1e-4)
}

/// Nutation matrix from the mean equator and equinox of date to the true equator and
/// equinox of date.
///
/// ```text
/// N = R1(-(ε + Δε)) · R3(-Δψ) · R1(ε)
/// ```
///
/// # See also
/// * [`nutn80`] – nutation angles
/// * [`obleq`] – mean obliquity
pub fn rnut80(tjm: MJD) -> Matrix3<f64> {
    let epsm = obleq(tjm);
    let (dpsi, deps) = nutn80(tjm);

    let epst = epsm + deps * RADSEC;

    r1(-epst) * r3(-dpsi * RADSEC) * r1(epsm)
}

/// Compute the equation of the equinoxes in radians.
///
/// ```text
/// Eq_eq = Δψ cos ε
/// ```
///
/// i.e. the difference between apparent and mean sidereal time.
pub fn equequ(tjm: MJD) -> Radian {
    let oblm = obleq(tjm);
    let (dpsi, _deps) = nutn80(tjm);

    RADSEC * dpsi * oblm.cos()
}

/// Precession matrix from J2000 to the mean equator and equinox of date (IAU 1976).
///
/// ```text
/// P = R3(-z) · R2(θ) · R3(-ζ)
///
/// ζ(T) = (0.6406161 + 0.0000839 T + 0.0000050 T²) T   [deg]
/// θ(T) = (0.5567530 - 0.0001185 T - 0.0000116 T²) T   [deg]
/// z(T) = (0.6406161 + 0.0003041 T + 0.0000051 T²) T   [deg]
/// ```
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date (TT scale).
pub fn prec(tjm: MJD) -> Matrix3<f64> {
    let t = centuries_since_j2000(tjm);

    let zeta = ((0.0000050 * t + 0.0000839) * t + 0.6406161) * t * RADEG;
    let z = ((0.0000051 * t + 0.0003041) * t + 0.6406161) * t * RADEG;
    let theta = ((-0.0000116 * t - 0.0001185) * t + 0.5567530) * t * RADEG;

    r3(-z) * r2(theta) * r3(-zeta)
}

/// Greenwich apparent sidereal time in radians, in `[0, 2π)`.
///
/// Arguments
/// ---------
/// * `tjm_ut1`: Modified Julian Date, UT1 scale (drives the Earth rotation angle).
/// * `tjm_tt`: Modified Julian Date, TT scale (drives the nutation).
pub fn gast(tjm_ut1: MJD, tjm_tt: MJD) -> Radian {
    (gmst(tjm_ut1) + equequ(tjm_tt)).rem_euclid(DPI)
}

/// Rotation matrix from ECI (mean equator and equinox of J2000) to ECEF at `time`.
///
/// UT1 is taken equal to UTC.
pub fn celestial_to_terrestrial(time: &Epoch) -> Matrix3<f64> {
    let tjm_tt = time.to_mjd_tt_days();
    let tjm_ut1 = time.to_mjd_utc_days();

    r3(gast(tjm_ut1, tjm_tt)) * rnut80(tjm_tt) * prec(tjm_tt)
}
