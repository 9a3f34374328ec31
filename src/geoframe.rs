//! # GeoFrame: configured entry point
//!
//! [`GeoFrame`] bundles the three parameters every transform of the crate needs beside the
//! coordinates themselves:
//!
//! 1. the reference [`Ellipsoid`],
//! 2. the [`AngleUnit`] of every angle going in and out,
//! 3. the [`EarthRotationModel`] used for the time-dependent ECI transforms.
//!
//! Its methods delegate to the free functions of the other modules with these stored
//! parameters, so a caller that always works on the same ellipsoid and unit does not have to
//! repeat them.
//!
//! ## Typical usage
//!
//! ```rust
//! use geoframe::geoframe::GeoFrame;
//! use geoframe::units::AngleUnit;
//!
//! let frame = GeoFrame::new("grs80").unwrap();
//! let (x, y, z) = frame.geodetic2ecef(42.0, -82.0, 200.0).unwrap();
//! let (lat, lon, alt) = frame.ecef2geodetic(x, y, z).unwrap();
//! assert!((lat - 42.0).abs() < 1e-9);
//!
//! let radians = frame.with_angle_unit(AngleUnit::Radians);
//! assert_eq!(radians.angle_unit(), AngleUnit::Radians);
//! ```
//!
//! ## Configuration
//!
//! A [`FrameConfig`] is the serializable form of a [`GeoFrame`]. Every field has a default:
//!
//! ```text
//! { "ellipsoid": "wgs84", "angle_unit": "degrees", "rotation_model": "iau1980" }
//! { "ellipsoid": { "semimajor_axis": 6378137.0, "semiminor_axis": 6356752.0 } }
//! ```
//!
//! ## See also
//! ------------
//! * [`crate::ellipsoid`] – Registry of named ellipsoids.
//! * [`crate::eci`] – Earth rotation models.
//! * [`crate::batch`] – Element-wise application over slices.
use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::{
    aer::{aer2ecef, aer2eci, aer2enu, aer2geodetic, ecef2aer, eci2aer, enu2aer, geodetic2aer, Site},
    constants::{Meter, Radian, Triple},
    dca::{dca2ecef, dca2enu, dca2geodetic, ecef2dca, enu2dca, geodetic2dca},
    ecef::{ecef2enu, ecef2geodetic, eci2geodetic, enu2ecef, geodetic2ecef, geodetic2eci},
    eci::{ecef2eci, eci2ecef, EarthRotationModel},
    ellipsoid::{Ellipsoid, EllipsoidSpec},
    enu::{enu2geodetic, geodetic2enu},
    geoframe_errors::GeoFrameError,
    ned::{ecef2ned, geodetic2ned, ned2ecef, ned2geodetic},
    nvector::{ecef2nvector, geodetic2nvector, nvector2ecef, nvector2geodetic},
    spherical::{geodetic2spherical, spherical2geodetic},
    time::datetime2sidereal,
    units::AngleUnit,
};

/// Serializable configuration of a [`GeoFrame`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub ellipsoid: EllipsoidSpec,
    pub angle_unit: AngleUnit,
    pub rotation_model: EarthRotationModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrameConfig", into = "FrameConfig")]
pub struct GeoFrame {
    ellipsoid: Ellipsoid,
    angle_unit: AngleUnit,
    rotation_model: EarthRotationModel,
}

impl GeoFrame {
    /// Construct a frame on a named ellipsoid, with angles in degrees and the most accurate
    /// Earth rotation model compiled in.
    ///
    /// Arguments
    /// ---------
    /// * `ellipsoid_name`: a registry name, case insensitive (e.g. `"wgs84"`, `"grs80"`).
    ///
    /// Return
    /// ------
    /// * The frame, or [`GeoFrameError::InvalidEllipsoid`] for an unknown name.
    pub fn new(ellipsoid_name: &str) -> Result<Self, GeoFrameError> {
        Ok(GeoFrame {
            ellipsoid: Ellipsoid::from_name(ellipsoid_name)?,
            ..GeoFrame::default()
        })
    }

    /// Construct a frame from its serializable configuration.
    ///
    /// Return
    /// ------
    /// * The frame, or [`GeoFrameError::InvalidEllipsoid`] when the ellipsoid is unknown or
    ///   malformed.
    pub fn from_config(config: &FrameConfig) -> Result<Self, GeoFrameError> {
        tracing::debug!(
            "building frame: ellipsoid {:?}, unit {}, rotation {}",
            config.ellipsoid,
            config.angle_unit,
            config.rotation_model
        );
        config.rotation_model.warn_if_coarse();

        Ok(GeoFrame {
            ellipsoid: config.ellipsoid.clone().try_into()?,
            angle_unit: config.angle_unit,
            rotation_model: config.rotation_model,
        })
    }

    pub fn with_angle_unit(self, angle_unit: AngleUnit) -> Self {
        GeoFrame { angle_unit, ..self }
    }

    pub fn with_rotation_model(self, rotation_model: EarthRotationModel) -> Self {
        rotation_model.warn_if_coarse();
        GeoFrame {
            rotation_model,
            ..self
        }
    }

    pub fn with_ellipsoid(self, ellipsoid: Ellipsoid) -> Self {
        GeoFrame { ellipsoid, ..self }
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn rotation_model(&self) -> EarthRotationModel {
        self.rotation_model
    }

    /// Serializable configuration of this frame.
    pub fn config(&self) -> FrameConfig {
        FrameConfig::from(*self)
    }

    // geodetic / ECEF

    pub fn geodetic2ecef(&self, lat: f64, lon: f64, alt: Meter) -> Result<Triple, GeoFrameError> {
        geodetic2ecef(lat, lon, alt, &self.ellipsoid, self.angle_unit)
    }

    pub fn ecef2geodetic(&self, x: Meter, y: Meter, z: Meter) -> Result<Triple, GeoFrameError> {
        ecef2geodetic(x, y, z, &self.ellipsoid, self.angle_unit)
    }

    // local tangent planes, relative to `origin`

    pub fn geodetic2enu(
        &self,
        lat: f64,
        lon: f64,
        alt: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        geodetic2enu(
            lat,
            lon,
            alt,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn enu2geodetic(
        &self,
        e: Meter,
        n: Meter,
        u: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        enu2geodetic(
            e,
            n,
            u,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn ecef2enu(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        ecef2enu(
            x,
            y,
            z,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn enu2ecef(
        &self,
        e: Meter,
        n: Meter,
        u: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        enu2ecef(
            e,
            n,
            u,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn geodetic2ned(
        &self,
        lat: f64,
        lon: f64,
        alt: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        geodetic2ned(
            lat,
            lon,
            alt,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn ned2geodetic(
        &self,
        n: Meter,
        e: Meter,
        d: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        ned2geodetic(
            n,
            e,
            d,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn ecef2ned(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        ecef2ned(
            x,
            y,
            z,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn ned2ecef(
        &self,
        n: Meter,
        e: Meter,
        d: Meter,
        origin: &Site,
    ) -> Result<Triple, GeoFrameError> {
        ned2ecef(
            n,
            e,
            d,
            origin.lat,
            origin.lon,
            origin.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn enu2aer(&self, e: Meter, n: Meter, u: Meter) -> Triple {
        enu2aer(e, n, u, self.angle_unit)
    }

    pub fn aer2enu(&self, az: f64, el: f64, slant_range: Meter) -> Result<Triple, GeoFrameError> {
        aer2enu(az, el, slant_range, self.angle_unit)
    }

    pub fn geodetic2aer(
        &self,
        lat: f64,
        lon: f64,
        alt: Meter,
        observer: &Site,
    ) -> Result<Triple, GeoFrameError> {
        geodetic2aer(
            lat,
            lon,
            alt,
            observer.lat,
            observer.lon,
            observer.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn aer2geodetic(
        &self,
        az: f64,
        el: f64,
        slant_range: Meter,
        observer: &Site,
    ) -> Result<Triple, GeoFrameError> {
        aer2geodetic(
            az,
            el,
            slant_range,
            observer.lat,
            observer.lon,
            observer.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn ecef2aer(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        observer: &Site,
    ) -> Result<Triple, GeoFrameError> {
        ecef2aer(
            x,
            y,
            z,
            observer.lat,
            observer.lon,
            observer.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn aer2ecef(
        &self,
        az: f64,
        el: f64,
        slant_range: Meter,
        observer: &Site,
    ) -> Result<Triple, GeoFrameError> {
        aer2ecef(
            az,
            el,
            slant_range,
            observer.lat,
            observer.lon,
            observer.alt,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    // downrange / crossrange / above

    pub fn enu2dca(&self, e: Meter, n: Meter, u: Meter, heading: f64) -> Triple {
        enu2dca(e, n, u, heading, self.angle_unit)
    }

    pub fn dca2enu(&self, dr: Meter, cr: Meter, above: Meter, heading: f64) -> Triple {
        dca2enu(dr, cr, above, heading, self.angle_unit)
    }

    pub fn geodetic2dca(
        &self,
        lat: f64,
        lon: f64,
        alt: Meter,
        origin: &Site,
        heading: f64,
    ) -> Result<Triple, GeoFrameError> {
        geodetic2dca(
            lat,
            lon,
            alt,
            origin.lat,
            origin.lon,
            origin.alt,
            heading,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn dca2geodetic(
        &self,
        dr: Meter,
        cr: Meter,
        above: Meter,
        origin: &Site,
        heading: f64,
    ) -> Result<Triple, GeoFrameError> {
        dca2geodetic(
            dr,
            cr,
            above,
            origin.lat,
            origin.lon,
            origin.alt,
            heading,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn ecef2dca(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        origin: &Site,
        heading: f64,
    ) -> Result<Triple, GeoFrameError> {
        ecef2dca(
            x,
            y,
            z,
            origin.lat,
            origin.lon,
            origin.alt,
            heading,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    pub fn dca2ecef(
        &self,
        dr: Meter,
        cr: Meter,
        above: Meter,
        origin: &Site,
        heading: f64,
    ) -> Result<Triple, GeoFrameError> {
        dca2ecef(
            dr,
            cr,
            above,
            origin.lat,
            origin.lon,
            origin.alt,
            heading,
            &self.ellipsoid,
            self.angle_unit,
        )
    }

    // n-vector

    pub fn geodetic2nvector(&self, lat: f64, lon: f64) -> Triple {
        geodetic2nvector(lat, lon, self.angle_unit)
    }

    pub fn nvector2geodetic(&self, n1: f64, n2: f64, n3: f64) -> (f64, f64) {
        nvector2geodetic(n1, n2, n3, self.angle_unit)
    }

    pub fn ecef2nvector(&self, x: Meter, y: Meter, z: Meter) -> Result<Triple, GeoFrameError> {
        ecef2nvector(x, y, z, &self.ellipsoid)
    }

    pub fn nvector2ecef(
        &self,
        n1: f64,
        n2: f64,
        n3: f64,
        alt: Meter,
    ) -> Result<Triple, GeoFrameError> {
        nvector2ecef(n1, n2, n3, alt, &self.ellipsoid)
    }

    // geocentric spherical

    pub fn geodetic2spherical(
        &self,
        lat: f64,
        lon: f64,
        alt: Meter,
    ) -> Result<Triple, GeoFrameError> {
        geodetic2spherical(lat, lon, alt, &self.ellipsoid, self.angle_unit)
    }

    pub fn spherical2geodetic(
        &self,
        lat: f64,
        lon: f64,
        radius: Meter,
    ) -> Result<Triple, GeoFrameError> {
        spherical2geodetic(lat, lon, radius, &self.ellipsoid, self.angle_unit)
    }

    // inertial frame, at an observation time

    pub fn eci2ecef(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        time: &Epoch,
    ) -> Result<Triple, GeoFrameError> {
        eci2ecef(x, y, z, time, self.rotation_model)
    }

    pub fn ecef2eci(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        time: &Epoch,
    ) -> Result<Triple, GeoFrameError> {
        ecef2eci(x, y, z, time, self.rotation_model)
    }

    pub fn geodetic2eci(
        &self,
        lat: f64,
        lon: f64,
        alt: Meter,
        time: &Epoch,
    ) -> Result<Triple, GeoFrameError> {
        geodetic2eci(
            lat,
            lon,
            alt,
            time,
            &self.ellipsoid,
            self.angle_unit,
            self.rotation_model,
        )
    }

    pub fn eci2geodetic(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        time: &Epoch,
    ) -> Result<Triple, GeoFrameError> {
        eci2geodetic(
            x,
            y,
            z,
            time,
            &self.ellipsoid,
            self.angle_unit,
            self.rotation_model,
        )
    }

    pub fn eci2aer(
        &self,
        x: Meter,
        y: Meter,
        z: Meter,
        observer: &Site,
        time: &Epoch,
    ) -> Result<Triple, GeoFrameError> {
        eci2aer(
            x,
            y,
            z,
            observer,
            time,
            &self.ellipsoid,
            self.angle_unit,
            self.rotation_model,
        )
    }

    pub fn aer2eci(
        &self,
        az: f64,
        el: f64,
        slant_range: Meter,
        observer: &Site,
        time: &Epoch,
    ) -> Result<Triple, GeoFrameError> {
        aer2eci(
            az,
            el,
            slant_range,
            observer,
            time,
            &self.ellipsoid,
            self.angle_unit,
            self.rotation_model,
        )
    }

    /// Local sidereal time at longitude `lon` (in the frame's angle unit).
    ///
    /// Return
    /// ------
    /// * The sidereal time in radians, not wrapped, whatever the frame's angle unit.
    pub fn local_sidereal_time(&self, time: &Epoch, lon: f64) -> Result<Radian, GeoFrameError> {
        datetime2sidereal(time, self.angle_unit.to_radians(lon), self.rotation_model)
    }
}

impl Default for GeoFrame {
    fn default() -> Self {
        GeoFrame {
            ellipsoid: Ellipsoid::wgs84(),
            angle_unit: AngleUnit::default(),
            rotation_model: EarthRotationModel::select(false),
        }
    }
}

impl TryFrom<FrameConfig> for GeoFrame {
    type Error = GeoFrameError;

    fn try_from(config: FrameConfig) -> Result<Self, Self::Error> {
        GeoFrame::from_config(&config)
    }
}

impl From<GeoFrame> for FrameConfig {
    fn from(frame: GeoFrame) -> Self {
        FrameConfig {
            ellipsoid: frame.ellipsoid.into(),
            angle_unit: frame.angle_unit,
            rotation_model: frame.rotation_model,
        }
    }
}
