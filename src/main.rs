// main.rs
//
// Demo driver: sweep the worked-example cam design, chart the motion and the
// derived quantities, and export the pitch curve as a closed DXF spline.

use std::error::Error;
use std::fs;

#[cfg(any(feature = "svg-io", feature = "dxf-io"))]
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use camrs::{CamDesign, ProfileTable};

const OUT_DIR: &str = "cam";
const SAMPLES: usize = 2000;

/// Console logging with RUST_LOG support, INFO by default.
fn init_logging() {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let design = CamDesign::default();
    let table = ProfileTable::generate(&design, SAMPLES)?;

    info!(
        samples = table.len(),
        max_pressure_angle_deg = table.max_pressure_angle(),
        min_curvature_radius = table.min_curvature_radius(),
        singular_samples = table.singular_samples(),
        "profile swept"
    );

    fs::create_dir_all(OUT_DIR)?;

    #[cfg(feature = "svg-io")]
    {
        svg::save(Path::new(OUT_DIR).join("motion.svg"), &table.motion_diagram())?;
        svg::save(
            Path::new(OUT_DIR).join("pressure_angle.svg"),
            &table.pressure_angle_plot(),
        )?;
        svg::save(Path::new(OUT_DIR).join("curvature.svg"), &table.curvature_plot())?;
        svg::save(
            Path::new(OUT_DIR).join("pitch_curve.svg"),
            &table.pitch_curve_plot(),
        )?;
        info!("wrote charts to {OUT_DIR}/");
    }

    #[cfg(feature = "dxf-io")]
    {
        let path = Path::new(OUT_DIR).join("cam_pitch_spline.dxf");
        fs::write(&path, table.to_dxf()?)?;
        info!("wrote pitch spline to {}", path.display());
    }

    Ok(())
}
