//! Sweeping the full rotation into sample tables

use crate::design::CamDesign;
use crate::errors::CamError;
use crate::float_types::{Real, TAU};
use crate::geometry::{GeometrySample, PitchFrame};
use crate::motion::{MotionProfile, MotionSample};
use geo::LineString;
use nalgebra::Point2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Angle-indexed sample sequences over one full rotation.
///
/// All vectors share the same length and ordering: index `i` corresponds to
/// cam angle θᵢ = τ·i/N, ascending, so downstream consumers (plots, spline
/// fits) see the rotation in cycle order. The table is produced once and
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct ProfileTable {
    /// Sampled cam angles, radians, ascending from 0 (exclusive of τ)
    pub angles: Vec<Real>,
    /// Follower displacement y per angle
    pub positions: Vec<Real>,
    /// dy/dθ per angle
    pub velocities: Vec<Real>,
    /// d²y/dθ² per angle
    pub accelerations: Vec<Real>,
    /// Pressure angle per angle, degrees
    pub pressure_angles: Vec<Real>,
    /// Radius of curvature per angle; singular samples are ±∞
    pub curvature_radii: Vec<Real>,
    /// Pitch-curve points in the fixed cam frame
    pub pitch_points: Vec<Point2<Real>>,
}

#[cfg(not(feature = "parallel"))]
fn sweep(
    profile: &MotionProfile,
    frame: &PitchFrame,
    samples: usize,
) -> Vec<(MotionSample, GeometrySample)> {
    let step = TAU / samples as Real;
    (0..samples)
        .map(|i| {
            let motion = profile.evaluate(i as Real * step);
            (motion, frame.transform(&motion))
        })
        .collect()
}

/// Parallel sweep; rayon's indexed collect preserves angle order.
#[cfg(feature = "parallel")]
fn sweep(
    profile: &MotionProfile,
    frame: &PitchFrame,
    samples: usize,
) -> Vec<(MotionSample, GeometrySample)> {
    let step = TAU / samples as Real;
    (0..samples)
        .into_par_iter()
        .map(|i| {
            let motion = profile.evaluate(i as Real * step);
            (motion, frame.transform(&motion))
        })
        .collect()
}

impl ProfileTable {
    /// Validate `design`, then evaluate motion and geometry at `samples`
    /// evenly spaced angles over [0, τ).
    ///
    /// Configuration problems surface here, before any sampling; numerical
    /// singularities do not abort the sweep; they land in
    /// [`curvature_radii`](Self::curvature_radii) as ±∞.
    pub fn generate(design: &CamDesign, samples: usize) -> Result<Self, CamError> {
        if samples < 2 {
            return Err(CamError::TooFewSamples { samples });
        }
        let profile = MotionProfile::new(design)?;
        let frame = PitchFrame::new(design)?;

        tracing::debug!(samples, "sweeping cam rotation");
        let rows = sweep(&profile, &frame, samples);

        let mut table = ProfileTable {
            angles: Vec::with_capacity(samples),
            positions: Vec::with_capacity(samples),
            velocities: Vec::with_capacity(samples),
            accelerations: Vec::with_capacity(samples),
            pressure_angles: Vec::with_capacity(samples),
            curvature_radii: Vec::with_capacity(samples),
            pitch_points: Vec::with_capacity(samples),
        };
        for (motion, geometry) in rows {
            table.angles.push(motion.angle);
            table.positions.push(motion.position);
            table.velocities.push(motion.velocity);
            table.accelerations.push(motion.acceleration);
            table.pressure_angles.push(geometry.pressure_angle);
            table.curvature_radii.push(geometry.curvature_radius);
            table.pitch_points.push(geometry.point);
        }

        let singular = table.singular_samples();
        if singular > 0 {
            tracing::warn!(singular, "curvature singularities in sweep");
        }

        Ok(table)
    }

    /// Number of sampled angles.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The pitch curve as a closed point sequence: the sampled points in
    /// rotation order with the first point repeated at the end. This is the
    /// fit-point sequence a spline export consumes.
    pub fn closed_pitch_points(&self) -> Vec<Point2<Real>> {
        let mut points = self.pitch_points.clone();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }

    /// The closed pitch curve as a `geo` polyline.
    pub fn pitch_polyline(&self) -> LineString<Real> {
        LineString::from(
            self.closed_pitch_points()
                .iter()
                .map(|p| (p.x, p.y))
                .collect::<Vec<_>>(),
        )
    }

    /// Largest pressure-angle magnitude over the sweep, degrees.
    pub fn max_pressure_angle(&self) -> Real {
        self.pressure_angles
            .iter()
            .fold(0.0, |acc, phi| acc.max(phi.abs()))
    }

    /// Smallest finite curvature-radius magnitude over the sweep. Compare
    /// against the roller radius to judge undercutting.
    pub fn min_curvature_radius(&self) -> Real {
        self.curvature_radii
            .iter()
            .filter(|rho| rho.is_finite())
            .fold(Real::INFINITY, |acc, rho| acc.min(rho.abs()))
    }

    /// Number of samples flagged as curvature singularities.
    pub fn singular_samples(&self) -> usize {
        self.curvature_radii
            .iter()
            .filter(|rho| !rho.is_finite())
            .count()
    }
}
