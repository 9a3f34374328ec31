use approx::assert_relative_eq;
use geoframe::constants::Triple;

/// Component-wise relative agreement.
pub fn assert_triple_close(actual: Triple, expected: Triple, max_relative: f64) {
    assert_relative_eq!(actual.0, expected.0, max_relative = max_relative);
    assert_relative_eq!(actual.1, expected.1, max_relative = max_relative);
    assert_relative_eq!(actual.2, expected.2, max_relative = max_relative);
}

/// Relative agreement of two vectors: `|a - b| / |b| <= tolerance`.
pub fn assert_triple_rel(actual: Triple, expected: Triple, tolerance: f64) {
    let diff = ((actual.0 - expected.0).powi(2)
        + (actual.1 - expected.1).powi(2)
        + (actual.2 - expected.2).powi(2))
    .sqrt();
    let norm = (expected.0.powi(2) + expected.1.powi(2) + expected.2.powi(2)).sqrt();

    assert!(
        diff <= tolerance * norm,
        "{actual:?} differs from {expected:?} by {} relative (tolerance {tolerance})",
        diff / norm
    );
}

/// Round-trip height bound: 1e-9 m on top of `ulps` units of the largest ECEF coordinate.
pub fn altitude_tolerance((x, y, z): Triple, ulps: f64) -> f64 {
    1e-9 + ulps * f64::EPSILON * x.abs().max(y.abs()).max(z.abs())
}
