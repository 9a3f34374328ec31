//! # Julian dates and sidereal time
//!
//! Observation times are [`hifitime::Epoch`] values, which always carry their time scale, so a
//! time without a zone cannot reach these functions. Calendar fields are read in UTC.
//!
//! Two sidereal-time models are available, matching the two [`EarthRotationModel`]s:
//!
//! * [`greenwichsrt`] – Greenwich mean sidereal time from the Julian Date alone
//!   (Vallado, *Fundamentals of Astrodynamics and Applications*, eq. 3-47).
//! * [`gmst`] plus the equation of the equinoxes – apparent sidereal time with the IAU 1980
//!   nutation, see [`crate::earth_orientation::gast`].
use hifitime::Epoch;

use crate::{
    constants::{
        JulianDate, Radian, DAYS_PER_JULIAN_CENTURY, DPI, J2000, JDTOMJD, MJD, SECONDS_PER_DAY,
        T2000,
    },
    eci::EarthRotationModel,
    geoframe_errors::GeoFrameError,
};

/// Julian Date of an observation time, from its UTC calendar fields.
///
/// Meeus/Vallado algorithm, valid for Gregorian dates:
///
/// ```text
/// if month < 3 { year -= 1; month += 12 }
/// A  = trunc(year / 100)
/// B  = 2 - A + trunc(A / 4)
/// C  = ((s / 60 + min) / 60 + h) / 24
/// JD = trunc(365.25 (year + 4716)) + trunc(30.6001 (month + 1)) + day + B - 1524.5 + C
/// ```
///
/// Arguments
/// ---------
/// * `time`: observation time.
///
/// Return
/// ------
/// * Julian Date (days). `2000-01-01T12:00:00 UTC` maps to exactly `2451545.0`.
pub fn juliandate(time: &Epoch) -> JulianDate {
    let (year, month, day, hour, minute, second, nanos) = time.to_gregorian_utc();

    let (year, month) = if month < 3 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let a = (year / 100.0).trunc();
    let b = 2.0 - a + (a / 4.0).trunc();

    let seconds = second as f64 + nanos as f64 * 1e-9;
    let c = ((seconds / 60.0 + minute as f64) / 60.0 + hour as f64) / 24.0;

    (365.25 * (year + 4716.0)).trunc() + (30.6001 * (month + 1.0)).trunc() + day as f64 + b
        - 1524.5
        + c
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JulianDate {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDate) -> MJD {
    jd - JDTOMJD
}

/// Greenwich mean sidereal time of a Julian Date, in radians.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (UT1, approximated by UTC).
///
/// Return
/// ------
/// * GMST in `[0, 2π)`.
///
/// Details
/// -------
/// With `T` the Julian centuries since J2000, the sidereal time in seconds is
///
/// ```text
/// θ = 67310.54841 + (876600 h + 8640184.812866 s) T + 0.093104 T² - 6.2e-6 T³
/// ```
///
/// converted to radians and wrapped into one turn.
pub fn greenwichsrt(jd: JulianDate) -> Radian {
    let t = (jd - J2000) / DAYS_PER_JULIAN_CENTURY;

    let gmst_sec = 67310.54841 + (876600.0 * 3600.0 + 8640184.812866) * t + 0.093104 * t * t
        - 6.2e-6 * t * t * t;

    (gmst_sec * DPI / SECONDS_PER_DAY).rem_euclid(DPI)
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// This function implements the IAU 1982 polynomial formula
/// for the mean sidereal time at 0h UT1, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. A cubic polynomial gives GMST at 0h UT1 in seconds for the given date.
/// 2. The Earth rotation during the fractional day is added using `RAP`,
///    the ratio between the sidereal and the solar day.
///
/// # References
/// * IAU 1982, IERS Conventions 1996.
pub fn gmst(tjm: MJD) -> Radian {
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    const RAP: f64 = 1.00273790934;

    let day = tjm.floor();
    let t = (day - T2000) / DAYS_PER_JULIAN_CENTURY;

    // GMST at 0h UT1, seconds → radians
    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / SECONDS_PER_DAY;

    let h = (tjm - day) * DPI;

    (gmst0 + h * RAP).rem_euclid(DPI)
}

/// Local sidereal time at longitude `lon_radians`.
///
/// Arguments
/// ---------
/// * `time`: observation time.
/// * `lon_radians`: geographic longitude in radians, east positive.
/// * `model`: sidereal model. [`EarthRotationModel::Vallado`] uses the mean sidereal time
///   of [`greenwichsrt`]; [`EarthRotationModel::Iau1980`] uses the apparent sidereal time
///   with the IAU 1980 nutation.
///
/// Return
/// ------
/// * `gst + lon_radians`, not wrapped.
/// * [`GeoFrameError::UnsupportedConfiguration`] when the IAU 1980 model is requested but
///   was not compiled in.
pub fn datetime2sidereal(
    time: &Epoch,
    lon_radians: Radian,
    model: EarthRotationModel,
) -> Result<Radian, GeoFrameError> {
    Ok(greenwich_sidereal_time(time, model)? + lon_radians)
}

/// Greenwich sidereal time of an observation time for the given model.
pub fn greenwich_sidereal_time(
    time: &Epoch,
    model: EarthRotationModel,
) -> Result<Radian, GeoFrameError> {
    match model {
        EarthRotationModel::Vallado => {
            tracing::debug!("sidereal time from the Vallado implementation");
            Ok(greenwichsrt(juliandate(time)))
        }
        EarthRotationModel::Iau1980 => apparent_sidereal_time(time),
    }
}

#[cfg(feature = "iau1980")]
fn apparent_sidereal_time(time: &Epoch) -> Result<Radian, GeoFrameError> {
    use crate::earth_orientation::gast;

    // UT1 is approximated by UTC
    Ok(gast(time.to_mjd_utc_days(), time.to_mjd_tt_days()))
}

#[cfg(not(feature = "iau1980"))]
fn apparent_sidereal_time(_time: &Epoch) -> Result<Radian, GeoFrameError> {
    Err(EarthRotationModel::Iau1980.unavailable())
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_juliandate_j2000() {
        let t = Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0);
        assert_eq!(juliandate(&t), 2451545.0);
    }

    #[test]
    fn test_juliandate_matches_epoch() {
        let t = Epoch::from_gregorian_utc(2014, 4, 6, 8, 0, 0, 0);
        assert_relative_eq!(juliandate(&t), t.to_jde_utc_days(), epsilon = 1e-8);

        let t = Epoch::from_gregorian_utc(1987, 6, 19, 12, 30, 45, 500_000_000);
        assert_relative_eq!(juliandate(&t), t.to_jde_utc_days(), epsilon = 1e-8);
    }

    #[test]
    fn test_mjd_conversions() {
        assert_eq!(mjd_to_jd(T2000), J2000);
        assert_eq!(jd_to_mjd(J2000), T2000);
    }

    #[test]
    fn test_greenwichsrt() {
        let t = Epoch::from_gregorian_utc_hms(2019, 1, 4, 12, 0, 0);
        assert_relative_eq!(
            greenwichsrt(juliandate(&t)),
            4.953424125315294,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_local_sidereal_time() {
        let t0 = Epoch::from_gregorian_utc_hms(2014, 4, 6, 8, 0, 0);
        let lon = -148f64.to_radians();

        let lst = datetime2sidereal(&t0, lon, EarthRotationModel::Vallado).unwrap();
        assert_relative_eq!(lst, 2.90658, max_relative = 1e-5);
        assert_relative_eq!(lst - lon, 5.489644881671516, epsilon = 1e-12);
    }

    #[cfg(feature = "iau1980")]
    #[test]
    fn test_sidereal_models_agree() {
        let t0 = Epoch::from_gregorian_utc_hms(2014, 4, 6, 8, 0, 0);
        let lon = -148f64.to_radians();

        let mean = datetime2sidereal(&t0, lon, EarthRotationModel::Vallado).unwrap();
        let apparent = datetime2sidereal(&t0, lon, EarthRotationModel::Iau1980).unwrap();
        assert_relative_eq!(apparent, 2.90658, max_relative = 1e-4);
        assert_relative_eq!(mean, apparent, max_relative = 1e-4);
    }

    #[test]
    fn test_gmst_matches_greenwichsrt() {
        // Both are the IAU 1982 mean sidereal time, written in two ways
        let t = Epoch::from_gregorian_utc_hms(2019, 1, 4, 12, 0, 0);
        let a = gmst(t.to_mjd_utc_days());
        let b = greenwichsrt(juliandate(&t));
        assert_relative_eq!(a, b, epsilon = 1e-8);
    }

    #[test]
    fn test_gmst_range() {
        for k in 0..100 {
            let tjm = T2000 + k as f64 * 37.123;
            let g = gmst(tjm);
            assert!((0.0..DPI).contains(&g));
        }
    }
}
