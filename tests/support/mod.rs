//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use camrs::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

fn orientation(o: (Real, Real), a: (Real, Real), b: (Real, Real)) -> Real {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// True when the open interiors of segments `ab` and `cd` cross.
fn segments_cross(a: (Real, Real), b: (Real, Real), c: (Real, Real), d: (Real, Real)) -> bool {
    let d1 = orientation(a, b, c);
    let d2 = orientation(a, b, d);
    let d3 = orientation(c, d, a);
    let d4 = orientation(c, d, b);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Checks that a closed polyline (last point repeating the first) is simple:
/// no two non-adjacent edges intersect. Quadratic, intended for test-sized
/// point counts.
pub fn closed_polyline_is_simple(points: &[(Real, Real)]) -> bool {
    let n = points.len() - 1; // number of edges
    for i in 0..n {
        for j in (i + 2)..n {
            // the closing edge is adjacent to the first one
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_cross(points[i], points[i + 1], points[j], points[j + 1]) {
                return false;
            }
        }
    }
    true
}
