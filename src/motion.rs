//! Piecewise motion laws of the follower
//!
//! One cam rotation is divided into five angular segments, each governed by
//! an analytic displacement law. [`MotionProfile`] owns the segment table
//! and dispatches a cam angle to the segment containing it; [`Segment`]
//! evaluates the law together with its first two derivatives.

use crate::design::CamDesign;
use crate::errors::CamError;
use crate::float_types::{PI, Real};

/// Follower state at one cam angle.
///
/// `velocity` and `acceleration` are derivatives of the displacement with
/// respect to the **cam angle** (length per radian, length per radian²),
/// not with respect to time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Cam angle θ, radians
    pub angle: Real,
    /// Follower displacement y(θ)
    pub position: Real,
    /// dy/dθ
    pub velocity: Real,
    /// d²y/dθ²
    pub acceleration: Real,
}

/// One analytic segment of the displacement program.
///
/// Each variant carries the local parameters its law needs, so a segment
/// can be evaluated (and unit-tested) on its own given a global cam angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// 3-4 polynomial rise from rest, y = L·(6u² − 8u³ + 3u⁴) with u = θ/B.
    ///
    /// Rises from y = y′ = 0 and reaches L with zero velocity *and* zero
    /// acceleration, so it closes smoothly into the dwell that follows.
    PolynomialRise { lift: Real, span: Real },

    /// Constant displacement, zero velocity and acceleration.
    Dwell { level: Real },

    /// Cycloidal return over t = θ − start ∈ [0, B]:
    ///
    /// y  = D·(1 − t/B + sin(πt/B)/π) + (high − D)
    /// y′ = −(D/B)·(1 − cos(πt/B))
    /// y″ = −(πD/B²)·sin(πt/B)
    ///
    /// Leaves `high` with zero velocity and lands at `high − D` still moving
    /// at −2D/B; the ramp that follows is fitted to pick that velocity up.
    CycloidalReturn {
        drop: Real,
        span: Real,
        start: Real,
        high: Real,
    },

    /// Constant-velocity bridge, y = level − slope·(θ − reference).
    LinearRamp {
        slope: Real,
        reference: Real,
        level: Real,
    },

    /// Half-sine tail over s = θ − start ∈ [0, B):
    ///
    /// y  = L·(1 − sin(πs/2B))
    /// y′ = −(πL/2B)·cos(πs/2B)
    /// y″ = (π²L/4B²)·sin(πs/2B)
    ///
    /// Decays to zero displacement and zero velocity as s → B, closing the
    /// cycle back into the rise at θ = 0.
    HalfSineReturn { lift: Real, span: Real, start: Real },
}

impl Segment {
    /// Evaluate displacement, velocity and acceleration at a global cam
    /// angle. Total for any finite θ; callers are responsible for handing
    /// in angles that belong to this segment.
    pub fn evaluate(&self, theta: Real) -> MotionSample {
        let (position, velocity, acceleration) = match *self {
            Segment::PolynomialRise { lift, span } => {
                let u = theta / span;
                let u2 = u * u;
                (
                    lift * (6.0 * u2 - 8.0 * u2 * u + 3.0 * u2 * u2),
                    lift * (12.0 * u - 24.0 * u2 + 12.0 * u2 * u) / span,
                    lift * (12.0 - 48.0 * u + 36.0 * u2) / (span * span),
                )
            },
            Segment::Dwell { level } => (level, 0.0, 0.0),
            Segment::CycloidalReturn {
                drop,
                span,
                start,
                high,
            } => {
                let t = theta - start;
                let w = PI * t / span;
                (
                    drop * (1.0 - t / span + w.sin() / PI) + (high - drop),
                    -(drop / span) * (1.0 - w.cos()),
                    -(PI * drop / (span * span)) * w.sin(),
                )
            },
            Segment::LinearRamp {
                slope,
                reference,
                level,
            } => (level - slope * (theta - reference), -slope, 0.0),
            Segment::HalfSineReturn { lift, span, start } => {
                let w = PI * (theta - start) / (2.0 * span);
                (
                    lift * (1.0 - w.sin()),
                    -(PI * lift / (2.0 * span)) * w.cos(),
                    (PI * PI * lift / (4.0 * span * span)) * w.sin(),
                )
            },
        };
        MotionSample {
            angle: theta,
            position,
            velocity,
            acceleration,
        }
    }
}

/// The stitched displacement program over one full rotation.
#[derive(Clone, Debug)]
pub struct MotionProfile {
    /// Upper boundaries b1..b4; the last segment is open-ended at τ.
    bounds: [Real; 4],
    segments: [Segment; 5],
}

impl MotionProfile {
    /// Build the five-segment table from a validated design.
    pub fn new(design: &CamDesign) -> Result<Self, CamError> {
        design.validate()?;

        let bounds = design.boundaries();
        let level = design.rise_lift - design.return_drop;
        let segments = [
            Segment::PolynomialRise {
                lift: design.rise_lift,
                span: design.spans[0],
            },
            Segment::Dwell {
                level: design.rise_lift,
            },
            Segment::CycloidalReturn {
                drop: design.return_drop,
                span: design.spans[2],
                start: bounds[1],
                high: design.rise_lift,
            },
            Segment::LinearRamp {
                slope: design.ramp_slope,
                reference: design.ramp_reference,
                level,
            },
            Segment::HalfSineReturn {
                lift: design.tail_lift,
                span: design.spans[4],
                start: bounds[3],
            },
        ];

        Ok(MotionProfile { bounds, segments })
    }

    /// The segment containing `theta`. An angle exactly on a boundary
    /// belongs to the lower-index segment; beyond b4 everything falls into
    /// the open-ended tail.
    pub fn segment_at(&self, theta: Real) -> &Segment {
        for (i, &bound) in self.bounds.iter().enumerate() {
            if theta <= bound {
                return &self.segments[i];
            }
        }
        &self.segments[4]
    }

    /// Follower displacement, velocity and acceleration at cam angle
    /// `theta` ∈ [0, τ), radians.
    pub fn evaluate(&self, theta: Real) -> MotionSample {
        self.segment_at(theta).evaluate(theta)
    }

    /// Upper boundaries b1..b4 of the first four segments, radians.
    pub const fn boundaries(&self) -> [Real; 4] {
        self.bounds
    }
}
