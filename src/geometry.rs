//! Pitch-curve geometry derived from the motion profile
//!
//! [`PitchFrame`] holds the constants of the cam/follower layout and turns a
//! [`MotionSample`] into the quantities a designer checks a profile against:
//! pressure angle, radius of curvature, and the pitch-curve point itself.

use crate::design::CamDesign;
use crate::errors::CamError;
use crate::float_types::{Real, TAU, tolerance};
use crate::motion::MotionSample;
use nalgebra::Point2;

/// Derived geometry at one cam angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySample {
    /// Pressure angle φ, degrees
    pub pressure_angle: Real,
    /// Radius of curvature ρ of the pitch curve; ±∞ when the sample sits on
    /// a curvature singularity (cusp/undercut condition)
    pub curvature_radius: Real,
    /// Pitch-curve point in the fixed cam frame
    pub point: Point2<Real>,
}

impl GeometrySample {
    /// True when the curvature denominator vanished at this sample.
    pub fn is_singular(&self) -> bool {
        !self.curvature_radius.is_finite()
    }
}

/// Fixed frame constants shared by every transformed sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchFrame {
    /// Follower-line offset from the cam axis (E)
    pub eccentricity: Real,
    /// Base circle plus roller radius (Rp)
    pub pitch_radius: Real,
    /// Roller-center distance from the eccentricity foot at zero lift,
    /// d = sqrt(Rp² − E²)
    pub reach: Real,
}

impl PitchFrame {
    /// Derive the frame constants from a design. Fails if the eccentricity
    /// exceeds the pitch radius, which leaves `d` undefined.
    pub fn new(design: &CamDesign) -> Result<Self, CamError> {
        let rp = design.pitch_radius();
        let e = design.eccentricity;
        if e.abs() > rp {
            return Err(CamError::EccentricityExceedsPitchRadius {
                eccentricity: e,
                pitch_radius: rp,
            });
        }
        Ok(PitchFrame {
            eccentricity: e,
            pitch_radius: rp,
            reach: (rp * rp - e * e).sqrt(),
        })
    }

    /// Pressure angle in degrees:
    ///
    /// φ = atan2(y′ − E, y + d)
    ///
    /// The two-argument arctangent keeps the zero-denominator case a finite
    /// ±90° boundary value instead of a division blow-up.
    pub fn pressure_angle(&self, sample: &MotionSample) -> Real {
        (sample.velocity - self.eccentricity)
            .atan2(sample.position + self.reach)
            .to_degrees()
    }

    /// Radius of curvature of the pitch curve:
    ///
    /// ρ = ((Rp + y)² + y′²)^(3/2) / ((Rp + y)² + 2y′² − y″·(Rp + y))
    ///
    /// The denominator vanishes at cusp/undercut conditions. A denominator
    /// within the crate tolerance of zero yields an infinity carrying the
    /// denominator's sign, so ill-conditioned samples stay detectable with
    /// `is_finite` and never degrade into a plausible-looking finite value.
    pub fn curvature_radius(&self, sample: &MotionSample) -> Real {
        let q = self.pitch_radius + sample.position;
        let v2 = sample.velocity * sample.velocity;
        let denominator = q * q + 2.0 * v2 - sample.acceleration * q;
        if denominator.abs() < tolerance() {
            return Real::INFINITY.copysign(denominator);
        }
        (q * q + v2).powf(1.5) / denominator
    }

    /// Pitch-curve point in the fixed cam frame:
    ///
    /// λ = (τ − θ) − atan(E / (d + y))
    /// r = sqrt((d + y)² + E²)
    /// P = (r·cos λ, r·sin λ)
    ///
    /// The τ − θ reversal encodes the cam turning opposite to the parameter
    /// sweep; with E = 0 this reduces to plain polar geometry, a point at
    /// angle τ − θ and radius Rp + y.
    pub fn pitch_point(&self, sample: &MotionSample) -> Point2<Real> {
        let arm = self.reach + sample.position;
        let lambda = (TAU - sample.angle) - (self.eccentricity / arm).atan();
        let radius = (arm * arm + self.eccentricity * self.eccentricity).sqrt();
        Point2::new(radius * lambda.cos(), radius * lambda.sin())
    }

    /// All three derived quantities for one motion sample.
    pub fn transform(&self, sample: &MotionSample) -> GeometrySample {
        GeometrySample {
            pressure_angle: self.pressure_angle(sample),
            curvature_radius: self.curvature_radius(sample),
            point: self.pitch_point(sample),
        }
    }
}
