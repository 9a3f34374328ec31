//! # geoframe
//!
//! Conversions between the coordinate frames used to locate objects on and around a
//! reference ellipsoid:
//!
//! * geodetic latitude/longitude/height ↔ Earth-centered Earth-fixed (ECEF) ([`ecef`]),
//! * local tangent planes around an origin: ENU ([`enu`]), NED ([`ned`]), azimuth/elevation/
//!   range ([`aer`]) and downrange/crossrange/above ([`dca`]),
//! * n-vector ([`nvector`]),
//! * Earth-centered inertial (ECI) at an observation time ([`eci`]), with Greenwich sidereal
//!   time ([`time`]) and, behind the `iau1980` feature, the IAU 1976/1980 precession and
//!   nutation ([`earth_orientation`]),
//! * auxiliary latitudes ([`latitude`]), geocentric spherical coordinates ([`spherical`])
//!   and radii of curvature ([`rcurve`]),
//! * angular separation of two directions ([`haversine`]).
//!
//! Every transform is a free function working on one point, taking its angles in the
//! [`AngleUnit`] passed by the caller. [`batch`] applies them over slices and [`GeoFrame`]
//! stores the ellipsoid, angle unit and Earth rotation model for repeated use.
//!
//! ```rust
//! use geoframe::{ecef::geodetic2ecef, ellipsoid::Ellipsoid, units::AngleUnit};
//!
//! let (x, y, z) = geodetic2ecef(0.0, 0.0, 0.0, &Ellipsoid::default(), AngleUnit::Degrees).unwrap();
//! assert_eq!((x, y, z), (6378137.0, 0.0, 0.0));
//! ```
//!
//! The library logs through [`tracing`] and never installs a subscriber.
pub mod aer;
pub mod batch;
pub mod constants;
pub mod dca;
#[cfg(feature = "iau1980")]
pub mod earth_orientation;
pub mod ecef;
pub mod eci;
pub mod ellipsoid;
pub mod enu;
pub mod geoframe;
pub mod geoframe_errors;
pub mod haversine;
pub mod latitude;
pub mod ned;
pub mod nvector;
pub mod rcurve;
pub mod rotation;
pub mod spherical;
pub mod time;
pub mod units;

pub use eci::EarthRotationModel;
pub use ellipsoid::Ellipsoid;
pub use geoframe::{FrameConfig, GeoFrame};
pub use geoframe_errors::GeoFrameError;
pub use units::AngleUnit;
