//! # Frame rotations
//!
//! Elementary rotations used to move coordinates between frames. All matrices here are
//! **frame** (passive) rotations: `R(θ) · v` expresses the fixed vector `v` in a frame
//! rotated by `+θ` about the given axis. With this convention
//!
//! ```text
//! R3(θ) = |  cos θ   sin θ   0 |
//!         | -sin θ   cos θ   0 |
//!         |    0       0     1 |
//! ```
//!
//! and a chain such as `R3(GAST) · N · P` reads right to left.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Radian, Triple};

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Elementary frame rotation of `angle` radians about `axis`.
///
/// Arguments
/// ---------
/// * `angle`: rotation angle in radians, positive counter-clockwise when looking down the axis.
/// * `axis`: the rotation axis.
///
/// Return
/// ------
/// * The 3×3 orthonormal matrix mapping components in the original frame to components in
///   the rotated frame.
pub fn rotmt(angle: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    // A frame rotation by +angle is the vector rotation by -angle
    Rotation3::from_axis_angle(&axis, -angle).into_inner()
}

/// Frame rotation about the X axis.
#[inline]
pub fn r1(angle: Radian) -> Matrix3<f64> {
    rotmt(angle, Axis::X)
}

/// Frame rotation about the Y axis.
#[inline]
pub fn r2(angle: Radian) -> Matrix3<f64> {
    rotmt(angle, Axis::Y)
}

/// Frame rotation about the Z axis.
#[inline]
pub fn r3(angle: Radian) -> Matrix3<f64> {
    rotmt(angle, Axis::Z)
}

/// Rotation taking an ECEF difference vector to East/North/Up components at the geodetic
/// point `(lat0, lon0)`.
///
/// Rows are the East, North and Up unit vectors expressed in ECEF:
///
/// ```text
/// E = [ -sin λ,        cos λ,        0     ]
/// N = [ -sin φ cos λ, -sin φ sin λ,  cos φ ]
/// U = [  cos φ cos λ,  cos φ sin λ,  sin φ ]
/// ```
///
/// The inverse (ENU → ECEF) is the transpose.
pub fn enu_rotation(lat0: Radian, lon0: Radian) -> Matrix3<f64> {
    let (slat, clat) = lat0.sin_cos();
    let (slon, clon) = lon0.sin_cos();

    Matrix3::new(
        -slon,
        clon,
        0.0,
        -slat * clon,
        -slat * slon,
        clat,
        clat * clon,
        clat * slon,
        slat,
    )
}

/// Apply a 3×3 matrix to a coordinate triple.
#[inline]
pub fn apply(m: &Matrix3<f64>, (x, y, z): Triple) -> Triple {
    let v = m * Vector3::new(x, y, z);
    (v.x, v.y, v.z)
}

/// Apply the transpose of a 3×3 matrix to a coordinate triple.
#[inline]
pub fn apply_transpose(m: &Matrix3<f64>, (x, y, z): Triple) -> Triple {
    let v = m.tr_mul(&Vector3::new(x, y, z));
    (v.x, v.y, v.z)
}

#[cfg(test)]
mod rotation_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_r3_is_frame_rotation() {
        let m = r3(0.3);
        let (c, s) = (0.3f64.cos(), 0.3f64.sin());
        let expected = Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(m, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_r1_r2_signs() {
        let (c, s) = (0.2f64.cos(), 0.2f64.sin());
        assert_abs_diff_eq!(
            r1(0.2),
            Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            r2(0.2),
            Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_frame_rotation_quarter_turn() {
        // x axis seen from a frame turned by +90° about z lies along -y
        let (x, y, z) = apply(&r3(FRAC_PI_2), (1.0, 0.0, 0.0));
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(y, -1.0, epsilon = 1e-15);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_enu_rotation_orthonormal() {
        let m = enu_rotation(0.7, -1.9);
        assert_abs_diff_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-15);

        let v = (12.0, -3.5, 7.25);
        let (x, y, z) = apply_transpose(&m, apply(&m, v));
        assert_abs_diff_eq!(x, v.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, v.1, epsilon = 1e-12);
        assert_abs_diff_eq!(z, v.2, epsilon = 1e-12);
    }

    #[test]
    fn test_enu_rotation_at_origin() {
        // At (0, 0) east is +y, north is +z and up is +x
        let m = enu_rotation(0.0, 0.0);
        assert_eq!(apply(&m, (0.0, 1.0, 0.0)), (1.0, 0.0, 0.0));
        assert_eq!(apply(&m, (0.0, 0.0, 1.0)), (0.0, 1.0, 0.0));
        assert_eq!(apply(&m, (1.0, 0.0, 0.0)), (0.0, 0.0, 1.0));
    }
}
