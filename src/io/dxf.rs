use crate::io::IoError;
use crate::profile::ProfileTable;

use dxf::Drawing;
use dxf::entities::{Entity, EntityType, Spline};

/// SPLINE group 70 bit 0: the curve is closed.
const CLOSED_SPLINE: i32 = 1;

impl ProfileTable {
    /// Export the pitch curve as a DXF drawing holding one closed SPLINE.
    ///
    /// The sampled pitch points (first point repeated at the end) become the
    /// spline's fit points; the CAD system fits a smooth degree-3 curve
    /// through them.
    ///
    /// # Returns
    /// A `Result` containing the DXF file as a byte vector or an error if
    /// exporting fails.
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        if self.is_empty() {
            return Err(IoError::EmptyProfile);
        }

        let mut spline = Spline::default();
        spline.flags = CLOSED_SPLINE;
        spline.degree_of_curve = 3;
        #[allow(clippy::unnecessary_cast)]
        for point in self.closed_pitch_points() {
            spline
                .fit_points
                .push(dxf::Point::new(point.x as f64, point.y as f64, 0.0));
        }

        let mut drawing = Drawing::new();
        drawing.add_entity(Entity::new(EntityType::Spline(spline)));

        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}
