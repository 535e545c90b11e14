//! X-Y line charts of the sampled quantities, rendered as SVG documents.

use crate::float_types::Real;
use crate::profile::ProfileTable;

use svg::Document;
use svg::node::element::{Polyline, Rectangle, Text};

const WIDTH: Real = 720.0;
const HEIGHT: Real = 480.0;
const MARGIN: Real = 48.0;

/// One plotted trace: legend label, stroke color, data points.
struct Series {
    label: &'static str,
    color: &'static str,
    points: Vec<(Real, Real)>,
}

fn data_bounds(series: &[Series]) -> (Real, Real, Real, Real) {
    let mut min_x = Real::MAX;
    let mut max_x = -Real::MAX;
    let mut min_y = Real::MAX;
    let mut max_y = -Real::MAX;
    for s in series {
        for &(x, y) in &s.points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    // guard against a flat trace collapsing the viewport
    if max_x - min_x < 1e-9 {
        max_x = min_x + 1.0;
    }
    if max_y - min_y < 1e-9 {
        max_y = min_y + 1.0;
    }
    (min_x, max_x, min_y, max_y)
}

fn render(title: &str, series: Vec<Series>, equal_axes: bool) -> Document {
    let (mut min_x, mut max_x, mut min_y, mut max_y) = data_bounds(&series);

    if equal_axes {
        // pad the narrow axis so one data unit maps to the same distance on both
        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let usable_x = WIDTH - 2.0 * MARGIN;
        let usable_y = HEIGHT - 2.0 * MARGIN;
        let unit = (span_x / usable_x).max(span_y / usable_y);
        let pad_x = 0.5 * (unit * usable_x - span_x);
        let pad_y = 0.5 * (unit * usable_y - span_y);
        min_x -= pad_x;
        max_x += pad_x;
        min_y -= pad_y;
        max_y += pad_y;
    }

    let sx = (WIDTH - 2.0 * MARGIN) / (max_x - min_x);
    let sy = (HEIGHT - 2.0 * MARGIN) / (max_y - min_y);

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .add(
            Rectangle::new()
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "white"),
        )
        .add(
            Rectangle::new()
                .set("x", MARGIN)
                .set("y", MARGIN)
                .set("width", WIDTH - 2.0 * MARGIN)
                .set("height", HEIGHT - 2.0 * MARGIN)
                .set("fill", "none")
                .set("stroke", "#999")
                .set("stroke-width", 1),
        )
        .add(
            Text::new(title)
                .set("x", MARGIN)
                .set("y", 0.6 * MARGIN)
                .set("font-family", "sans-serif")
                .set("font-size", 16)
                .set("fill", "#333"),
        );

    for (index, s) in series.iter().enumerate() {
        let points = s
            .points
            .iter()
            .map(|&(x, y)| {
                // SVG y grows downward
                let px = MARGIN + (x - min_x) * sx;
                let py = HEIGHT - MARGIN - (y - min_y) * sy;
                format!("{:.3},{:.3}", px, py)
            })
            .collect::<Vec<_>>()
            .join(" ");

        document = document
            .add(
                Polyline::new()
                    .set("fill", "none")
                    .set("stroke", s.color)
                    .set("stroke-width", 1.5)
                    .set("points", points),
            )
            .add(
                Text::new(s.label)
                    .set("x", WIDTH - MARGIN - 110.0)
                    .set("y", MARGIN + 18.0 * (index as Real + 1.0))
                    .set("font-family", "sans-serif")
                    .set("font-size", 13)
                    .set("fill", s.color),
            );
    }

    document
}

/// Angle axis in degrees, paired with one sampled quantity.
fn against_angle(table: &ProfileTable, values: &[Real]) -> Vec<(Real, Real)> {
    table
        .angles
        .iter()
        .zip(values)
        .map(|(&theta, &v)| (theta.to_degrees(), v))
        .collect()
}

impl ProfileTable {
    /// Displacement, velocity and acceleration against cam angle (degrees).
    pub fn motion_diagram(&self) -> Document {
        render(
            "Follower motion vs cam angle [deg]",
            vec![
                Series {
                    label: "y",
                    color: "#1f6fb4",
                    points: against_angle(self, &self.positions),
                },
                Series {
                    label: "y' (per rad)",
                    color: "#d95f02",
                    points: against_angle(self, &self.velocities),
                },
                Series {
                    label: "y'' (per rad²)",
                    color: "#1b9e77",
                    points: against_angle(self, &self.accelerations),
                },
            ],
            false,
        )
    }

    /// Pressure angle (degrees) against cam angle (degrees).
    pub fn pressure_angle_plot(&self) -> Document {
        render(
            "Pressure angle [deg] vs cam angle [deg]",
            vec![Series {
                label: "phi",
                color: "#1f6fb4",
                points: against_angle(self, &self.pressure_angles),
            }],
            false,
        )
    }

    /// Radius of curvature against cam angle (degrees). Samples flagged as
    /// singular (±∞) are left out of the trace rather than plotted.
    pub fn curvature_plot(&self) -> Document {
        let points = self
            .angles
            .iter()
            .zip(&self.curvature_radii)
            .filter(|(_, rho)| rho.is_finite())
            .map(|(&theta, &rho)| (theta.to_degrees(), rho))
            .collect();
        render(
            "Radius of curvature vs cam angle [deg]",
            vec![Series {
                label: "rho",
                color: "#1f6fb4",
                points,
            }],
            false,
        )
    }

    /// The closed pitch curve in the cam frame, plotted with equal axes.
    pub fn pitch_curve_plot(&self) -> Document {
        let points = self
            .closed_pitch_points()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        render(
            "Pitch curve",
            vec![Series {
                label: "pitch curve",
                color: "#1f6fb4",
                points,
            }],
            true,
        )
    }
}
