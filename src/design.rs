//! Cam design parameters

use crate::errors::CamError;
use crate::float_types::{Real, TAU};

/// How far the span sum may stray from a full turn before the design is
/// rejected. Looser than the crate tolerance: span tables are commonly
/// written with 3–4 significant figures.
pub const SPAN_CLOSURE_TOLERANCE: Real = 1e-3;

/// Complete parameter set for a disc cam with a translating roller follower.
///
/// All angles and angular spans are in **radians**; the five spans must sum
/// to one full rotation. Lifts, radii and eccentricity share one length unit.
///
/// The displacement program is fixed in shape (rise, dwell, cycloidal
/// return, linear ramp, half-sine return) and parameterized per segment:
///
/// - `rise_lift` (L1): peak lift reached by the polynomial rise and held
///   through the dwell
/// - `return_drop` (L3): lift removed by the cycloidal return
/// - `ramp_slope`, `ramp_reference`: the linear ramp is
///   y = (L1 − L3) − slope·(θ − reference). The slope is the magnitude of
///   the (descending) follower velocity on the ramp; the reference is the
///   cam angle where the ramp crosses L1 − L3, normally the start of the
///   ramp segment. Both are explicit fields because they are fitted to
///   bridge the neighbouring segments, not derived from the other
///   parameters.
/// - `tail_lift` (L5): lift remaining at the start of the half-sine tail,
///   taken out by the end of the rotation
#[derive(Clone, Debug, PartialEq)]
pub struct CamDesign {
    /// Peak lift of the polynomial rise (L1)
    pub rise_lift: Real,
    /// Lift removed by the cycloidal return (L3)
    pub return_drop: Real,
    /// Descending-ramp velocity magnitude, length units per radian
    pub ramp_slope: Real,
    /// Cam angle where the ramp crosses `rise_lift - return_drop`, radians
    pub ramp_reference: Real,
    /// Lift taken out by the half-sine tail (L5)
    pub tail_lift: Real,
    /// Angular spans B1..B5 of the five segments, radians
    pub spans: [Real; 5],
    /// Follower roller radius (Rf)
    pub roller_radius: Real,
    /// Base circle radius (Rb)
    pub base_radius: Real,
    /// Offset of the follower line of motion from the cam axis (E)
    pub eccentricity: Real,
}

impl Default for CamDesign {
    /// The worked-example cam this crate grew out of: a ~6.7 unit lift over
    /// a 9.4 unit pitch radius with a slightly eccentric follower.
    fn default() -> Self {
        CamDesign {
            rise_lift: 6.700,
            return_drop: 4.431,
            ramp_slope: 3.622138511,
            ramp_reference: 5.472,
            tail_lift: 1.169,
            spans: [2.677, 0.349, 2.446, 0.304, 0.507],
            roller_radius: 0.6,
            base_radius: 8.8,
            eccentricity: 0.19,
        }
    }
}

impl CamDesign {
    /// Pitch radius Rp = Rb + Rf, the roller-center radius at zero lift.
    pub fn pitch_radius(&self) -> Real {
        self.base_radius + self.roller_radius
    }

    /// Cumulative upper boundaries b1..b4 of the first four segments.
    /// The fifth segment runs from b4 to the end of the rotation.
    pub fn boundaries(&self) -> [Real; 4] {
        let b1 = self.spans[0];
        let b2 = b1 + self.spans[1];
        let b3 = b2 + self.spans[2];
        let b4 = b3 + self.spans[3];
        [b1, b2, b3, b4]
    }

    /// Checks the design is geometrically meaningful. Every rejection names
    /// the offending parameter; a design that passes cannot fail later
    /// during sampling.
    pub fn validate(&self) -> Result<(), CamError> {
        for (name, value) in [
            ("spans[0]", self.spans[0]),
            ("spans[1]", self.spans[1]),
            ("spans[2]", self.spans[2]),
            ("spans[3]", self.spans[3]),
            ("spans[4]", self.spans[4]),
            ("roller_radius", self.roller_radius),
            ("base_radius", self.base_radius),
        ] {
            if !(value > 0.0) {
                return Err(CamError::NonPositive { name, value });
            }
        }

        let sum: Real = self.spans.iter().sum();
        if (sum - TAU).abs() > SPAN_CLOSURE_TOLERANCE {
            return Err(CamError::SpansDoNotCloseRotation { sum });
        }

        let rp = self.pitch_radius();
        if self.eccentricity.abs() > rp {
            return Err(CamError::EccentricityExceedsPitchRadius {
                eccentricity: self.eccentricity,
                pitch_radius: rp,
            });
        }

        Ok(())
    }
}
