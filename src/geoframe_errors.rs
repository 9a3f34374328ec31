use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GeoFrameError {
    #[error("Invalid ellipsoid: {0}")]
    InvalidEllipsoid(String),

    #[error("Slant range must be non-negative, got {0}")]
    NegativeRange(f64),

    #[error("Latitude must be within [-90, 90] degrees, got {0}")]
    InvalidLatitude(f64),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Invalid angle unit: {0}")]
    InvalidAngleUnit(String),

    #[error("Invalid Earth rotation model: {0}")]
    InvalidRotationModel(String),

    #[error("Batch length mismatch: expected {expected} samples, found {found}")]
    BatchShapeMismatch { expected: usize, found: usize },
}

impl PartialEq for GeoFrameError {
    fn eq(&self, other: &Self) -> bool {
        use GeoFrameError::*;
        match (self, other) {
            (InvalidEllipsoid(a), InvalidEllipsoid(b)) => a == b,
            (DegenerateInput(a), DegenerateInput(b)) => a == b,
            (UnsupportedConfiguration(a), UnsupportedConfiguration(b)) => a == b,
            (InvalidAngleUnit(a), InvalidAngleUnit(b)) => a == b,
            (InvalidRotationModel(a), InvalidRotationModel(b)) => a == b,

            // NaN payloads still compare equal when both sides carry one
            (NegativeRange(a), NegativeRange(b)) => a == b || (a.is_nan() && b.is_nan()),
            (InvalidLatitude(a), InvalidLatitude(b)) => a == b || (a.is_nan() && b.is_nan()),

            (
                BatchShapeMismatch {
                    expected: e1,
                    found: f1,
                },
                BatchShapeMismatch {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,

            _ => false,
        }
    }
}
