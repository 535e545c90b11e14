mod support;

use camrs::{
    design::CamDesign,
    float_types::{Real, TAU},
    geometry::PitchFrame,
    motion::{MotionProfile, MotionSample},
};
use support::approx_eq;

#[test]
fn zero_eccentricity_degenerates_to_polar_geometry() {
    let design = CamDesign {
        eccentricity: 0.0,
        ..CamDesign::default()
    };
    let profile = MotionProfile::new(&design).unwrap();
    let frame = PitchFrame::new(&design).unwrap();
    let rp = design.pitch_radius();

    assert!(approx_eq(frame.reach, rp, 1e-12));

    for theta in [0.0, 0.3, 1.0, 2.0, 3.5, 5.0, 6.1] {
        let sample = profile.evaluate(theta);

        // φ reduces to atan(y′ / (y + Rp))
        let reduced = (sample.velocity / (sample.position + rp)).atan().to_degrees();
        assert!(approx_eq(frame.pressure_angle(&sample), reduced, 1e-9));

        // the pitch point reduces to radius Rp + y at polar angle τ − θ
        let point = frame.pitch_point(&sample);
        let radius = rp + sample.position;
        assert!(approx_eq(point.x, radius * (TAU - theta).cos(), 1e-9));
        assert!(approx_eq(point.y, radius * (TAU - theta).sin(), 1e-9));
    }
}

#[test]
fn pressure_angle_at_rest_matches_closed_form() {
    let design = CamDesign::default();
    let profile = MotionProfile::new(&design).unwrap();
    let frame = PitchFrame::new(&design).unwrap();

    // y = y′ = 0, so φ = −atan(E / d)
    let expected = -(design.eccentricity / frame.reach).atan().to_degrees();
    assert!(approx_eq(
        frame.pressure_angle(&profile.evaluate(0.0)),
        expected,
        1e-12
    ));
}

#[test]
fn dwell_curvature_equals_lifted_pitch_radius() {
    let design = CamDesign::default();
    let profile = MotionProfile::new(&design).unwrap();
    let frame = PitchFrame::new(&design).unwrap();
    let [b1, b2, ..] = profile.boundaries();

    // with y′ = y″ = 0 the formula collapses to ρ = Rp + y
    let mid_dwell = profile.evaluate(0.5 * (b1 + b2));
    assert!(approx_eq(
        frame.curvature_radius(&mid_dwell),
        design.pitch_radius() + design.rise_lift,
        1e-9
    ));
}

#[test]
fn curvature_singularity_is_flagged_not_masked() {
    let design = CamDesign::default();
    let frame = PitchFrame::new(&design).unwrap();

    // y″·(Rp + y) exactly cancels the rest of the denominator
    let cusp = MotionSample {
        angle: 0.0,
        position: 0.0,
        velocity: 0.0,
        acceleration: frame.pitch_radius,
    };
    let sample = frame.transform(&cusp);
    assert!(sample.is_singular());
    assert!(!sample.curvature_radius.is_finite());

    // a healthy sample stays finite
    let healthy = MotionSample {
        angle: 0.0,
        position: 0.0,
        velocity: 0.0,
        acceleration: 0.0,
    };
    assert!(!frame.transform(&healthy).is_singular());
}

#[test]
fn pressure_angle_survives_zero_denominator() {
    let design = CamDesign::default();
    let frame = PitchFrame::new(&design).unwrap();

    // roller center dragged onto the eccentricity foot: denominator is zero
    let degenerate = MotionSample {
        angle: 0.0,
        position: -frame.reach,
        velocity: 0.0,
        acceleration: 0.0,
    };
    let phi = frame.pressure_angle(&degenerate);
    assert!(approx_eq(phi.abs(), 90.0, 1e-9));
    assert!(phi.is_finite());
}

#[test]
fn pitch_point_starts_on_the_pitch_circle() {
    let design = CamDesign::default();
    let profile = MotionProfile::new(&design).unwrap();
    let frame = PitchFrame::new(&design).unwrap();

    let point = frame.pitch_point(&profile.evaluate(0.0));
    let magnitude = (point.x * point.x + point.y * point.y).sqrt();
    assert!(approx_eq(magnitude, design.pitch_radius(), 1e-12));
}

#[test]
fn curvature_at_rise_start_is_concave() {
    let design = CamDesign::default();
    let profile = MotionProfile::new(&design).unwrap();
    let frame = PitchFrame::new(&design).unwrap();

    // the rise begins under heavy acceleration, so the pitch curve is
    // locally concave: negative ρ with |ρ| well above the roller radius
    let rho = frame.curvature_radius(&profile.evaluate(0.0));
    assert!(rho < 0.0);
    assert!(rho.abs() > design.roller_radius);
    assert!(approx_eq(rho, -48.572582441828, 1e-6));
}

#[test]
fn reach_is_shorter_than_pitch_radius_with_offset() {
    let design = CamDesign::default();
    let frame = PitchFrame::new(&design).unwrap();

    let rp = design.pitch_radius();
    assert!(frame.reach < rp);
    let expected: Real = (rp * rp - design.eccentricity * design.eccentricity).sqrt();
    assert!(approx_eq(frame.reach, expected, 1e-12));
}
