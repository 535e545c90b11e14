//! Configuration validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a [`CamDesign`](crate::design::CamDesign) can be rejected
/// before any sampling begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CamError {
    /// (SpansDoNotCloseRotation) The five segment spans do not sum to one full turn
    SpansDoNotCloseRotation { sum: Real },
    /// (EccentricityExceedsPitchRadius) sqrt(Rp² − E²) is undefined
    EccentricityExceedsPitchRadius {
        eccentricity: Real,
        pitch_radius: Real,
    },
    /// (NonPositive) A parameter that must be strictly positive is not
    NonPositive { name: &'static str, value: Real },
    /// (TooFewSamples) The sweep needs at least two samples to form a curve
    TooFewSamples { samples: usize },
}

impl Display for CamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CamError::SpansDoNotCloseRotation { sum } => write!(
                f,
                "(SpansDoNotCloseRotation) segment spans sum to {} rad, expected 2π",
                sum
            ),
            CamError::EccentricityExceedsPitchRadius {
                eccentricity,
                pitch_radius,
            } => write!(
                f,
                "(EccentricityExceedsPitchRadius) eccentricity {} exceeds pitch radius {}",
                eccentricity, pitch_radius
            ),
            CamError::NonPositive { name, value } => {
                write!(f, "(NonPositive) parameter `{}` must be > 0, got {}", name, value)
            },
            CamError::TooFewSamples { samples } => {
                write!(f, "(TooFewSamples) need at least 2 samples, got {}", samples)
            },
        }
    }
}
