//! Kinematics and pitch-curve geometry for **disc cams** with a translating
//! roller follower.
//!
//! The follower displacement over one rotation is stitched together from five
//! piecewise analytic motion laws (polynomial rise, dwell, cycloidal return,
//! linear ramp, half-sine return). From the displacement and its first two
//! derivatives the crate computes the pressure angle and radius of curvature
//! at every sampled cam angle, and the pitch curve (the locus traced by the
//! roller center) as a closed sequence of points ready for spline export.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): export the
//!   pitch curve as a closed `.dxf` spline
//! - **svg-io**: render motion/pressure-angle/curvature charts and the pitch
//!   curve as `.svg` documents
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sweep the rotation in parallel

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod design;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod motion;
pub mod profile;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use design::CamDesign;
pub use geometry::{GeometrySample, PitchFrame};
pub use motion::{MotionProfile, MotionSample, Segment};
pub use profile::ProfileTable;
