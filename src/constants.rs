//! # Constants and type definitions for geoframe
//!
//! This module centralizes the **numerical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `geoframe` library.
//!
//! ## Overview
//!
//! - Angle conversions (degrees ↔ radians ↔ arcseconds)
//! - Calendar constants (J2000 epoch, JD ↔ MJD offset, day length)
//! - Reference WGS-84 axes, used as the default ellipsoid
//! - Core type aliases used across the crate
//!
//! Coordinate tuples are plain `(f64, f64, f64)` triples; the aliases only document the unit
//! of each component in signatures.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

// -------------------------------------------------------------------------------------------------
// Epochs
// -------------------------------------------------------------------------------------------------

/// Julian Date of J2000.0 (2000-01-01 12:00:00)
pub const J2000: f64 = 2_451_545.0;

/// MJD epoch of J2000.0
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

// -------------------------------------------------------------------------------------------------
// Reference ellipsoid
// -------------------------------------------------------------------------------------------------

/// WGS-84 semimajor axis in meters
pub const WGS84_SEMIMAJOR_AXIS: f64 = 6_378_137.0;

/// WGS-84 semiminor axis in meters
pub const WGS84_SEMIMINOR_AXIS: f64 = 6_356_752.314_245_18;

// -------------------------------------------------------------------------------------------------
// Numerical tolerances
// -------------------------------------------------------------------------------------------------

/// Maximum number of Newton steps used when recovering the geodetic latitude from ECEF
pub const MAX_GEODETIC_ITERATIONS: usize = 10;

/// Relative stopping criterion on the reduced latitude update
pub const GEODETIC_TOLERANCE: f64 = 1e-15;

/// Local tangent-plane components smaller than this (meters) are snapped to zero
/// before the azimuth is computed.
pub const ENU_SNAP_THRESHOLD: f64 = 1e-3;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

/// Cartesian or local-frame triple, in meters
pub type Triple = (f64, f64, f64);
