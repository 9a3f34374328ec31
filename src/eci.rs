//! # ECEF ↔ ECI conversions
//!
//! Rotation between the Earth-fixed frame and the Earth-centered inertial frame (mean
//! equator and equinox of J2000) at an observation time. Two Earth-rotation models are
//! available through [`EarthRotationModel`]:
//!
//! | Model | Rotation | Typical relative accuracy |
//! |-------|----------|---------------------------|
//! | [`EarthRotationModel::Vallado`] | `R3(GMST)` only | ~2.5e-2 |
//! | [`EarthRotationModel::Iau1980`] | `R3(GAST) · N · P` | ~1e-4 |
//!
//! The IAU 1980 model is compiled in with the `iau1980` cargo feature (enabled by default).
//! Requesting it explicitly when the feature is disabled is an error; only
//! [`EarthRotationModel::select`] falls back to the Vallado model, and it says so in the logs.
//!
//! ```rust
//! use geoframe::eci::{eci2ecef, EarthRotationModel};
//! use hifitime::Epoch;
//!
//! let t = Epoch::from_gregorian_utc_hms(2019, 1, 4, 12, 0, 0);
//! let (x, y, z) = eci2ecef(-2981784.0, 5207055.0, 3161595.0, &t, EarthRotationModel::Vallado).unwrap();
//! assert!((z - 3161595.0).abs() < 1e-6);
//! ```
use std::{fmt, str::FromStr};

use hifitime::Epoch;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Meter, Triple},
    geoframe_errors::GeoFrameError,
    rotation::{apply, apply_transpose, r3},
    time::{greenwichsrt, juliandate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarthRotationModel {
    /// Single rotation about the polar axis by the Greenwich mean sidereal time.
    Vallado,
    /// IAU 1976 precession, IAU 1980 nutation and apparent sidereal time.
    Iau1980,
}

impl EarthRotationModel {
    /// Resolve the model to use.
    ///
    /// Arguments
    /// ---------
    /// * `force_builtin`: always use the Vallado model, even when the IAU 1980 model is
    ///   compiled in.
    ///
    /// Return
    /// ------
    /// * [`EarthRotationModel::Iau1980`] when available and not forced,
    ///   [`EarthRotationModel::Vallado`] otherwise.
    pub fn select(force_builtin: bool) -> Self {
        if force_builtin {
            tracing::debug!("Vallado Earth rotation model forced");
            EarthRotationModel::Vallado.warn_if_coarse();
            return EarthRotationModel::Vallado;
        }

        if EarthRotationModel::Iau1980.is_available() {
            EarthRotationModel::Iau1980
        } else {
            tracing::warn!(
                "IAU 1980 Earth rotation model not compiled in, falling back to the less accurate Vallado model"
            );
            EarthRotationModel::Vallado
        }
    }

    /// Whether the model was compiled into this build.
    pub fn is_available(self) -> bool {
        match self {
            EarthRotationModel::Vallado => true,
            EarthRotationModel::Iau1980 => cfg!(feature = "iau1980"),
        }
    }

    /// Log that the Vallado model is coarse.
    ///
    /// Called where a model is chosen (frame construction, batch entry), never per point.
    pub(crate) fn warn_if_coarse(self) {
        if self == EarthRotationModel::Vallado {
            tracing::warn!(
                "Vallado Earth rotation model has much less accuracy than the IAU 1980 model"
            );
        }
    }

    #[cfg_attr(feature = "iau1980", allow(dead_code))]
    pub(crate) fn unavailable(self) -> GeoFrameError {
        GeoFrameError::UnsupportedConfiguration(format!(
            "Earth rotation model '{self}' requires the `iau1980` feature"
        ))
    }

    /// Rotation matrix `M` such that `r_ecef = M · r_eci` at `time`.
    ///
    /// Return
    /// ------
    /// * The orthonormal matrix, or [`GeoFrameError::UnsupportedConfiguration`] when the model
    ///   is not compiled in.
    pub fn eci_to_ecef_matrix(self, time: &Epoch) -> Result<Matrix3<f64>, GeoFrameError> {
        match self {
            EarthRotationModel::Vallado => Ok(r3(greenwichsrt(juliandate(time)))),
            EarthRotationModel::Iau1980 => precise_matrix(time),
        }
    }
}

#[cfg(feature = "iau1980")]
fn precise_matrix(time: &Epoch) -> Result<Matrix3<f64>, GeoFrameError> {
    Ok(crate::earth_orientation::celestial_to_terrestrial(time))
}

#[cfg(not(feature = "iau1980"))]
fn precise_matrix(_time: &Epoch) -> Result<Matrix3<f64>, GeoFrameError> {
    Err(EarthRotationModel::Iau1980.unavailable())
}

impl Default for EarthRotationModel {
    fn default() -> Self {
        EarthRotationModel::select(false)
    }
}

impl FromStr for EarthRotationModel {
    type Err = GeoFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vallado" | "builtin" => Ok(EarthRotationModel::Vallado),
            "iau1980" | "iau76/80" => Ok(EarthRotationModel::Iau1980),
            _ => Err(GeoFrameError::InvalidRotationModel(s.to_string())),
        }
    }
}

impl TryFrom<&str> for EarthRotationModel {
    type Error = GeoFrameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EarthRotationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EarthRotationModel::Vallado => write!(f, "vallado"),
            EarthRotationModel::Iau1980 => write!(f, "iau1980"),
        }
    }
}

/// Rotate an ECI position at `time` into ECEF.
///
/// Arguments
/// ---------
/// * `x`, `y`, `z`: ECI position in meters (mean equator and equinox of J2000).
/// * `time`: observation time.
/// * `model`: Earth-rotation model.
///
/// Return
/// ------
/// * `(x, y, z)` ECEF position in meters.
///
/// # See also
/// * [`ecef2eci`] – the inverse rotation
pub fn eci2ecef(
    x: Meter,
    y: Meter,
    z: Meter,
    time: &Epoch,
    model: EarthRotationModel,
) -> Result<Triple, GeoFrameError> {
    let m = model.eci_to_ecef_matrix(time)?;
    Ok(apply(&m, (x, y, z)))
}

/// Rotate an ECEF position at `time` into ECI.
///
/// Uses the transpose of the matrix applied by [`eci2ecef`].
pub fn ecef2eci(
    x: Meter,
    y: Meter,
    z: Meter,
    time: &Epoch,
    model: EarthRotationModel,
) -> Result<Triple, GeoFrameError> {
    let m = model.eci_to_ecef_matrix(time)?;
    Ok(apply_transpose(&m, (x, y, z)))
}
