//! # Batched transforms
//!
//! Every transform of the crate works on one point at a time. This module applies them to
//! sequences with an explicit contract instead of implicit broadcasting:
//!
//! * each input is either a single value ([`Samples::One`]) reused for every element, or a
//!   slice ([`Samples::Many`]),
//! * all slices must have the same length, otherwise
//!   [`GeoFrameError::BatchShapeMismatch`] is returned before any work is done,
//! * the batch fails as a whole: the first error aborts it and is returned, no partial
//!   output is produced,
//! * the output always is a `Vec`, of length one when every input is a single value.
//!
//! ```rust
//! use geoframe::batch::{geodetic2ecef_batch, Samples};
//! use geoframe::{ellipsoid::Ellipsoid, units::AngleUnit};
//!
//! let lats = [0.0, 45.0, 90.0];
//! let out = geodetic2ecef_batch(
//!     Samples::from(&lats[..]),
//!     Samples::One(0.0),
//!     Samples::One(0.0),
//!     &Ellipsoid::default(),
//!     AngleUnit::Degrees,
//! )
//! .unwrap();
//! assert_eq!(out.len(), 3);
//! ```
use hifitime::Epoch;
use itertools::{izip, Either};

use crate::{
    constants::Triple,
    eci::{ecef2eci, eci2ecef, EarthRotationModel},
    ecef::{ecef2geodetic, geodetic2ecef},
    ellipsoid::Ellipsoid,
    geoframe_errors::GeoFrameError,
    units::AngleUnit,
};

/// A single value or a slice of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Samples<'a, T> {
    One(T),
    Many(&'a [T]),
}

impl<'a, T: Copy + 'a> Samples<'a, T> {
    /// Number of elements, `None` for a single value.
    pub fn len(&self) -> Option<usize> {
        match self {
            Samples::One(_) => None,
            Samples::Many(values) => Some(values.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Iterate over `n` elements; a single value is repeated.
    fn iter(&self, n: usize) -> impl Iterator<Item = T> + 'a {
        match *self {
            Samples::One(value) => Either::Left(std::iter::repeat(value).take(n)),
            Samples::Many(values) => Either::Right(values.iter().copied()),
        }
    }
}

impl From<f64> for Samples<'_, f64> {
    fn from(value: f64) -> Self {
        Samples::One(value)
    }
}

impl<'a> From<&'a [f64]> for Samples<'a, f64> {
    fn from(values: &'a [f64]) -> Self {
        Samples::Many(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Samples<'a, f64> {
    fn from(values: &'a Vec<f64>) -> Self {
        Samples::Many(values.as_slice())
    }
}

impl From<Epoch> for Samples<'_, Epoch> {
    fn from(value: Epoch) -> Self {
        Samples::One(value)
    }
}

impl<'a> From<&'a [Epoch]> for Samples<'a, Epoch> {
    fn from(values: &'a [Epoch]) -> Self {
        Samples::Many(values)
    }
}

/// Common length of a set of inputs.
///
/// Return
/// ------
/// * `None` when every input is a single value, the shared slice length otherwise.
/// * [`GeoFrameError::BatchShapeMismatch`] if two slices differ in length.
pub fn common_len(lens: &[Option<usize>]) -> Result<Option<usize>, GeoFrameError> {
    let mut expected: Option<usize> = None;

    for found in lens.iter().flatten().copied() {
        match expected {
            None => expected = Some(found),
            Some(e) if e != found => {
                return Err(GeoFrameError::BatchShapeMismatch { expected: e, found })
            }
            Some(_) => {}
        }
    }

    Ok(expected)
}

/// Apply a point transform element-wise over three coordinate inputs.
pub fn map3<F>(
    a: Samples<'_, f64>,
    b: Samples<'_, f64>,
    c: Samples<'_, f64>,
    mut f: F,
) -> Result<Vec<Triple>, GeoFrameError>
where
    F: FnMut(f64, f64, f64) -> Result<Triple, GeoFrameError>,
{
    let n = common_len(&[a.len(), b.len(), c.len()])?.unwrap_or(1);

    izip!(a.iter(n), b.iter(n), c.iter(n))
        .map(|(a, b, c)| f(a, b, c))
        .collect()
}

/// Apply a time-dependent point transform element-wise over three coordinate inputs and a
/// time input.
pub fn map3_at<F>(
    a: Samples<'_, f64>,
    b: Samples<'_, f64>,
    c: Samples<'_, f64>,
    time: Samples<'_, Epoch>,
    mut f: F,
) -> Result<Vec<Triple>, GeoFrameError>
where
    F: FnMut(f64, f64, f64, &Epoch) -> Result<Triple, GeoFrameError>,
{
    let n = common_len(&[a.len(), b.len(), c.len(), time.len()])?.unwrap_or(1);

    izip!(a.iter(n), b.iter(n), c.iter(n), time.iter(n))
        .map(|(a, b, c, t)| f(a, b, c, &t))
        .collect()
}

/// Batched [`geodetic2ecef`].
pub fn geodetic2ecef_batch(
    lat: Samples<'_, f64>,
    lon: Samples<'_, f64>,
    alt: Samples<'_, f64>,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Vec<Triple>, GeoFrameError> {
    map3(lat, lon, alt, |lat, lon, alt| {
        geodetic2ecef(lat, lon, alt, ell, unit)
    })
}

/// Batched [`ecef2geodetic`].
pub fn ecef2geodetic_batch(
    x: Samples<'_, f64>,
    y: Samples<'_, f64>,
    z: Samples<'_, f64>,
    ell: &Ellipsoid,
    unit: AngleUnit,
) -> Result<Vec<Triple>, GeoFrameError> {
    map3(x, y, z, |x, y, z| ecef2geodetic(x, y, z, ell, unit))
}

/// Batched [`eci2ecef`]: one time for all positions, or one time per position.
///
/// The accuracy warning of the Vallado model is logged once for the whole batch.
pub fn eci2ecef_batch(
    x: Samples<'_, f64>,
    y: Samples<'_, f64>,
    z: Samples<'_, f64>,
    time: Samples<'_, Epoch>,
    model: EarthRotationModel,
) -> Result<Vec<Triple>, GeoFrameError> {
    model.warn_if_coarse();
    map3_at(x, y, z, time, |x, y, z, t| eci2ecef(x, y, z, t, model))
}

/// Batched [`ecef2eci`].
pub fn ecef2eci_batch(
    x: Samples<'_, f64>,
    y: Samples<'_, f64>,
    z: Samples<'_, f64>,
    time: Samples<'_, Epoch>,
    model: EarthRotationModel,
) -> Result<Vec<Triple>, GeoFrameError> {
    model.warn_if_coarse();
    map3_at(x, y, z, time, |x, y, z, t| ecef2eci(x, y, z, t, model))
}

#[cfg(test)]
mod batch_test {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use tracing_subscriber::{
        layer::{Context, SubscriberExt},
        Layer, Registry,
    };

    use super::*;

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Number of warnings logged on this thread while running `f`.
    fn count_warnings(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = Registry::default().with(WarnCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_common_len() {
        assert_eq!(common_len(&[None, None]), Ok(None));
        assert_eq!(common_len(&[None, Some(3), Some(3)]), Ok(Some(3)));
        assert_eq!(
            common_len(&[Some(2), None, Some(3)]),
            Err(GeoFrameError::BatchShapeMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_scalar_inputs_give_one_element() {
        let out = geodetic2ecef_batch(
            Samples::from(0.0),
            Samples::from(0.0),
            Samples::from(0.0),
            &Ellipsoid::default(),
            AngleUnit::Degrees,
        )
        .unwrap();
        assert_eq!(out, vec![(6378137.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_mixed_inputs() {
        let lats = vec![0.0, 10.0, 20.0];
        let ell = Ellipsoid::default();
        let out = geodetic2ecef_batch(
            Samples::from(&lats),
            Samples::from(5.0),
            Samples::from(100.0),
            &ell,
            AngleUnit::Degrees,
        )
        .unwrap();
        assert_eq!(out.len(), 3);
        for (lat, xyz) in lats.iter().zip(&out) {
            assert_eq!(
                *xyz,
                geodetic2ecef(*lat, 5.0, 100.0, &ell, AngleUnit::Degrees).unwrap()
            );
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let a = [1.0, 2.0];
        let b = [1.0, 2.0, 3.0];
        let res = ecef2geodetic_batch(
            Samples::Many(&a),
            Samples::Many(&b),
            Samples::One(0.0),
            &Ellipsoid::default(),
            AngleUnit::Degrees,
        );
        assert_eq!(
            res,
            Err(GeoFrameError::BatchShapeMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_all_or_nothing() {
        let x = [6378137.0, 0.0, 7e6];
        let res = ecef2geodetic_batch(
            Samples::Many(&x),
            Samples::One(0.0),
            Samples::One(0.0),
            &Ellipsoid::default(),
            AngleUnit::Degrees,
        );
        assert!(matches!(res, Err(GeoFrameError::DegenerateInput(_))));
    }

    #[test]
    fn test_empty_batch() {
        let empty: [f64; 0] = [];
        let out = ecef2geodetic_batch(
            Samples::Many(&empty),
            Samples::One(1.0),
            Samples::One(1.0),
            &Ellipsoid::default(),
            AngleUnit::Degrees,
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_time_batch() {
        let times = [
            Epoch::from_gregorian_utc_hms(2019, 1, 4, 12, 0, 0),
            Epoch::from_gregorian_utc_hms(2019, 1, 4, 18, 0, 0),
        ];
        let out = eci2ecef_batch(
            Samples::One(-2981784.0),
            Samples::One(5207055.0),
            Samples::One(3161595.0),
            Samples::from(&times[..]),
            EarthRotationModel::Vallado,
        )
        .unwrap();
        assert_eq!(out.len(), 2);
        assert_ne!(out[0], out[1]);

        let back = ecef2eci_batch(
            Samples::Many(&[out[0].0]),
            Samples::Many(&[out[0].1]),
            Samples::Many(&[out[0].2]),
            Samples::One(times[0]),
            EarthRotationModel::Vallado,
        )
        .unwrap();
        assert!((back[0].0 + 2981784.0).abs() < 1e-6);

        let mismatch = eci2ecef_batch(
            Samples::Many(&[1.0, 2.0, 3.0]),
            Samples::One(0.0),
            Samples::One(0.0),
            Samples::from(&times[..]),
            EarthRotationModel::Vallado,
        );
        assert!(matches!(
            mismatch,
            Err(GeoFrameError::BatchShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_vallado_warning_once_per_batch() {
        let t = Epoch::from_gregorian_utc_hms(2019, 1, 4, 12, 0, 0);
        let x = [-2981784.0, 1e7, 4.2e7, 6.4e6];

        let warnings = count_warnings(|| {
            let out = eci2ecef_batch(
                Samples::from(&x[..]),
                Samples::One(5207055.0),
                Samples::One(3161595.0),
                Samples::One(t),
                EarthRotationModel::Vallado,
            )
            .unwrap();
            assert_eq!(out.len(), 4);
        });
        assert_eq!(warnings, 1);

        let warnings = count_warnings(|| {
            for xi in x {
                eci2ecef(xi, 0.0, 0.0, &t, EarthRotationModel::Vallado).unwrap();
            }
        });
        assert_eq!(warnings, 0);

        let forced = count_warnings(|| {
            assert_eq!(EarthRotationModel::select(true), EarthRotationModel::Vallado);
        });
        assert_eq!(forced, 1);
    }
}
