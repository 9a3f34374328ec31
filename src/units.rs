//! # Angle units
//!
//! Every public transform takes an [`AngleUnit`] telling it how to read its angular inputs
//! (latitude, longitude, azimuth, elevation, heading) and how to emit its angular outputs.
//! Distances are always meters.
//!
//! ```rust
//! use geoframe::units::AngleUnit;
//!
//! let unit: AngleUnit = "deg".parse().unwrap();
//! assert_eq!(unit.to_radians(180.0), std::f64::consts::PI);
//! ```
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{constants::Radian, geoframe_errors::GeoFrameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert an angle expressed in this unit to radians.
    #[inline]
    pub fn to_radians(self, angle: f64) -> Radian {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }

    /// Convert an angle in radians to this unit.
    #[inline]
    pub fn from_radians(self, angle: Radian) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_degrees(),
            AngleUnit::Radians => angle,
        }
    }

    /// Convert an angle expressed in this unit to degrees.
    #[inline]
    pub fn to_degrees(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle,
            AngleUnit::Radians => angle.to_degrees(),
        }
    }

    /// A full turn expressed in this unit (360 or 2π).
    #[inline]
    pub fn full_turn(self) -> f64 {
        match self {
            AngleUnit::Degrees => 360.0,
            AngleUnit::Radians => std::f64::consts::TAU,
        }
    }

    /// A quarter turn expressed in this unit (90 or π/2).
    #[inline]
    pub fn quarter_turn(self) -> f64 {
        self.full_turn() / 4.0
    }
}

impl From<bool> for AngleUnit {
    /// `true` selects degrees, matching the usual `deg=True` switch.
    fn from(deg: bool) -> Self {
        if deg {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        }
    }
}

impl FromStr for AngleUnit {
    type Err = GeoFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            _ => Err(GeoFrameError::InvalidAngleUnit(s.to_string())),
        }
    }
}

impl TryFrom<&str> for AngleUnit {
    type Error = GeoFrameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Radians => write!(f, "radians"),
        }
    }
}
