//! # Reference ellipsoids
//!
//! An [`Ellipsoid`] is an immutable oblate spheroid described by its semimajor axis `a`
//! (equatorial radius) and semiminor axis `b` (polar radius), both in meters. The derived
//! quantities used by the transforms (flattening, eccentricities, linear eccentricity) are
//! computed once at construction.
//!
//! Ellipsoids are obtained either from explicit axes with [`Ellipsoid::new`] or from the
//! built-in registry of named models with [`Ellipsoid::from_name`]:
//!
//! ```rust
//! use geoframe::ellipsoid::Ellipsoid;
//!
//! let grs80 = Ellipsoid::from_name("grs80").unwrap();
//! assert_eq!(grs80.semimajor_axis(), 6_378_137.0);
//!
//! let custom = Ellipsoid::new(6_378_000.0, 6_356_000.0).unwrap();
//! assert!(custom.name().is_none());
//! ```
//!
//! ## Registry
//!
//! The registry covers the classical terrestrial datums (Airy, Bessel, Clarke, Hayford,
//! Krassovsky, WGS, GRS, IERS, PZ-90) and a few planetary bodies. Bodies whose reference
//! figure is a sphere are not listed: every ellipsoid satisfies `a > b > 0`.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Meter, WGS84_SEMIMAJOR_AXIS, WGS84_SEMIMINOR_AXIS},
    geoframe_errors::GeoFrameError,
};

/// One entry of the named-ellipsoid registry.
#[derive(Debug, Clone, Copy)]
pub struct EllipsoidRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub semimajor_axis: Meter,
    pub semiminor_axis: Meter,
}

const fn record(
    name: &'static str,
    description: &'static str,
    semimajor_axis: Meter,
    semiminor_axis: Meter,
) -> EllipsoidRecord {
    EllipsoidRecord {
        name,
        description,
        semimajor_axis,
        semiminor_axis,
    }
}

#[rustfmt::skip]
static ELLIPSOIDS: [EllipsoidRecord; 33] = [
    record("maupertuis",        "Maupertuis (1738)",                        6_397_300.0,   6_363_806.283),
    record("plessis",           "Plessis (1817)",                           6_376_523.0,   6_355_862.9333),
    record("everest1830",       "Everest (1830)",                           6_377_299.365, 6_356_098.359),
    record("everest1830m",      "Everest 1830 Modified (1967)",             6_377_304.063, 6_356_103.039),
    record("everest1967",       "Everest 1830 (1967 Definition)",           6_377_298.556, 6_356_097.55),
    record("airy",              "Airy (1830)",                              6_377_563.396, 6_356_256.909),
    record("bessel",            "Bessel (1841)",                            6_377_397.155, 6_356_078.963),
    record("clarke1866",        "Clarke (1866)",                            6_378_206.4,   6_356_583.8),
    record("clarke1878",        "Clarke (1878)",                            6_378_190.0,   6_356_456.0),
    record("clarke1860",        "Clarke (1880)",                            6_378_249.145, 6_356_514.87),
    record("helmert",           "Helmert (1906)",                           6_378_200.0,   6_356_818.17),
    record("hayford",           "Hayford (1910)",                           6_378_388.0,   6_356_911.946),
    record("international1924", "International (1924)",                    6_378_388.0,   6_356_911.946),
    record("krassovsky1940",    "Krassovsky (1940)",                        6_378_245.0,   6_356_863.019),
    record("wgs66",             "WGS66 (1966)",                             6_378_145.0,   6_356_759.769),
    record("australian",        "Australian National (1966)",               6_378_160.0,   6_356_774.719),
    record("international1967", "New International (1967)",                6_378_157.5,   6_356_772.2),
    record("grs67",             "GRS-67 (1967)",                            6_378_160.0,   6_356_774.516),
    record("sa1969",            "South American (1969)",                    6_378_160.0,   6_356_774.719),
    record("wgs72",             "WGS-72 (1972)",                            6_378_135.0,   6_356_750.520_016_09),
    record("grs80",             "GRS-80 (1979)",                            6_378_137.0,   6_356_752.314_140_36),
    record("wgs84",             "WGS-84 (1984)",                            WGS84_SEMIMAJOR_AXIS, WGS84_SEMIMINOR_AXIS),
    record("iers1989",          "IERS (1989)",                              6_378_136.0,   6_356_751.302),
    record("pz90.11",           "ПЗ-90 (2011)",                             6_378_136.0,   6_356_751.361_8),
    record("iers2003",          "IERS (2003)",                              6_378_136.6,   6_356_751.9),
    record("gsk2011",           "ГСК (2011)",                               6_378_136.5,   6_356_751.758),
    record("mercury",           "Mercury",                                  2_440_500.0,   2_438_300.0),
    record("moon",              "Moon",                                     1_738_100.0,   1_736_000.0),
    record("mars",              "Mars",                                     3_396_900.0,   3_376_097.805_859_52),
    record("jupiter",           "Jupiter",                                  71_492_000.0,  66_770_054.3),
    record("saturn",            "Saturn",                                   60_268_000.0,  54_364_301.5),
    record("uranus",            "Uranus",                                   25_559_000.0,  24_973_000.0),
    record("neptune",           "Neptune",                                  24_764_000.0,  24_341_000.0),
];

/// Reference ellipsoid with its derived geometric parameters.
///
/// Invariant: `semimajor_axis > semiminor_axis > 0`, both finite. The struct is never
/// mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipsoidSpec", into = "EllipsoidSpec")]
pub struct Ellipsoid {
    name: Option<&'static str>,
    semimajor_axis: Meter,
    semiminor_axis: Meter,
    flattening: f64,
    third_flattening: f64,
    eccentricity_squared: f64,
    second_eccentricity_squared: f64,
    linear_eccentricity: Meter,
}

impl Ellipsoid {
    /// Build an ellipsoid from its two semi-axes.
    ///
    /// Arguments
    /// ---------
    /// * `semimajor_axis`: equatorial radius `a` in meters.
    /// * `semiminor_axis`: polar radius `b` in meters.
    ///
    /// Return
    /// ------
    /// * The ellipsoid, or [`GeoFrameError::InvalidEllipsoid`] when an axis is not a positive
    ///   finite number or when `b >= a`.
    pub fn new(semimajor_axis: Meter, semiminor_axis: Meter) -> Result<Self, GeoFrameError> {
        Self::build(None, semimajor_axis, semiminor_axis)
    }

    /// Look up a named ellipsoid in the registry (case-insensitive).
    ///
    /// Return
    /// ------
    /// * The ellipsoid, or [`GeoFrameError::InvalidEllipsoid`] if the name is unknown.
    ///
    /// # See also
    /// * [`Ellipsoid::names`] – the list of accepted names
    pub fn from_name(name: &str) -> Result<Self, GeoFrameError> {
        let record = ELLIPSOIDS
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                GeoFrameError::InvalidEllipsoid(format!("unknown ellipsoid name '{name}'"))
            })?;

        Self::build(
            Some(record.name),
            record.semimajor_axis,
            record.semiminor_axis,
        )
    }

    /// The WGS-84 ellipsoid.
    pub fn wgs84() -> Self {
        let a = WGS84_SEMIMAJOR_AXIS;
        let b = WGS84_SEMIMINOR_AXIS;
        Self::derive(Some("wgs84"), a, b)
    }

    /// Names accepted by [`Ellipsoid::from_name`], in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ELLIPSOIDS.iter().map(|r| r.name)
    }

    /// Full registry, including the human readable description of each model.
    pub fn registry() -> &'static [EllipsoidRecord] {
        &ELLIPSOIDS
    }

    fn build(
        name: Option<&'static str>,
        semimajor_axis: Meter,
        semiminor_axis: Meter,
    ) -> Result<Self, GeoFrameError> {
        if !(semimajor_axis.is_finite() && semimajor_axis > 0.0) {
            return Err(GeoFrameError::InvalidEllipsoid(format!(
                "semimajor axis must be a positive finite number, got {semimajor_axis}"
            )));
        }
        if !(semiminor_axis.is_finite() && semiminor_axis > 0.0) {
            return Err(GeoFrameError::InvalidEllipsoid(format!(
                "semiminor axis must be a positive finite number, got {semiminor_axis}"
            )));
        }
        if semiminor_axis >= semimajor_axis {
            return Err(GeoFrameError::InvalidEllipsoid(format!(
                "semiminor axis ({semiminor_axis}) must be smaller than semimajor axis ({semimajor_axis})"
            )));
        }

        Ok(Self::derive(name, semimajor_axis, semiminor_axis))
    }

    fn derive(name: Option<&'static str>, a: Meter, b: Meter) -> Self {
        let ratio = b / a;
        Ellipsoid {
            name,
            semimajor_axis: a,
            semiminor_axis: b,
            flattening: (a - b) / a,
            third_flattening: (a - b) / (a + b),
            eccentricity_squared: 1.0 - ratio * ratio,
            second_eccentricity_squared: (a / b).powi(2) - 1.0,
            linear_eccentricity: ((a - b) * (a + b)).sqrt(),
        }
    }

    /// Registry name, `None` for ellipsoids built from explicit axes.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Equatorial radius `a` (meters).
    pub fn semimajor_axis(&self) -> Meter {
        self.semimajor_axis
    }

    /// Polar radius `b` (meters).
    pub fn semiminor_axis(&self) -> Meter {
        self.semiminor_axis
    }

    /// Flattening `f = (a - b) / a`.
    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// Third flattening `n = (a - b) / (a + b)`.
    pub fn third_flattening(&self) -> f64 {
        self.third_flattening
    }

    /// First eccentricity squared `e² = 1 - (b/a)²`.
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared
    }

    /// First eccentricity `e`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared.sqrt()
    }

    /// Second eccentricity squared `e'² = (a/b)² - 1`.
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.second_eccentricity_squared
    }

    /// Linear eccentricity `E = sqrt(a² - b²)` (meters), the focal distance.
    pub fn linear_eccentricity(&self) -> Meter {
        self.linear_eccentricity
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::wgs84()
    }
}

impl FromStr for Ellipsoid {
    type Err = GeoFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ellipsoid::from_name(s)
    }
}

impl TryFrom<&str> for Ellipsoid {
    type Error = GeoFrameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (a = {} m, b = {} m, 1/f = {:.9})",
            self.name.unwrap_or("custom"),
            self.semimajor_axis,
            self.semiminor_axis,
            1.0 / self.flattening
        )
    }
}

/// Serialized form of an [`Ellipsoid`]: either a registry name or an explicit pair of axes.
///
/// ```text
/// "wgs84"
/// { "semimajor_axis": 6378137.0, "semiminor_axis": 6356752.31424518 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EllipsoidSpec {
    Named(String),
    Axes {
        semimajor_axis: Meter,
        semiminor_axis: Meter,
    },
}

impl TryFrom<EllipsoidSpec> for Ellipsoid {
    type Error = GeoFrameError;

    fn try_from(spec: EllipsoidSpec) -> Result<Self, Self::Error> {
        match spec {
            EllipsoidSpec::Named(name) => Ellipsoid::from_name(&name),
            EllipsoidSpec::Axes {
                semimajor_axis,
                semiminor_axis,
            } => Ellipsoid::new(semimajor_axis, semiminor_axis),
        }
    }
}

impl From<Ellipsoid> for EllipsoidSpec {
    fn from(ell: Ellipsoid) -> Self {
        match ell.name {
            Some(name) => EllipsoidSpec::Named(name.to_string()),
            None => EllipsoidSpec::Axes {
                semimajor_axis: ell.semimajor_axis,
                semiminor_axis: ell.semiminor_axis,
            },
        }
    }
}

impl Default for EllipsoidSpec {
    fn default() -> Self {
        EllipsoidSpec::Named("wgs84".to_string())
    }
}
