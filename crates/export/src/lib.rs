//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod points {
    use std::io::Write;

    use serde::Serialize;
    use traj_core::GeoPoint;

    use super::ExportError;

    /// Series tag for ascent samples.
    pub const ASCENT: &str = "ascent";
    /// Series tag for ground-track samples.
    pub const ORBIT: &str = "orbit";

    /// CSV row emitted for every sample; the header follows the field order.
    #[derive(Debug, Clone, Serialize)]
    pub struct Row<'a> {
        pub series: &'a str,
        pub index: usize,
        pub lat: f64,
        pub lon: f64,
        pub radius: f64,
    }

    /// Write ascent samples (with per-sample radii) followed by ground-track samples
    /// (at a constant radius) as one CSV table.
    ///
    /// Missing radii fall back to `orbit_radius`.
    pub fn write_csv(
        writer: &mut dyn Write,
        trajectory: &[GeoPoint],
        ascent_radii: &[f64],
        orbit_path: &[GeoPoint],
        orbit_radius: f64,
    ) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for (index, point) in trajectory.iter().enumerate() {
            csv.serialize(Row {
                series: ASCENT,
                index,
                lat: point.lat,
                lon: point.lon,
                radius: ascent_radii.get(index).copied().unwrap_or(orbit_radius),
            })?;
        }
        for (index, point) in orbit_path.iter().enumerate() {
            csv.serialize(Row {
                series: ORBIT,
                index,
                lat: point.lat,
                lon: point.lon,
                radius: orbit_radius,
            })?;
        }
        csv.flush()?;
        Ok(())
    }
}

pub mod json {
    use std::io::Write;

    use serde::Serialize;

    use super::ExportError;

    /// Pretty-print any serializable result, newline terminated.
    pub fn write_pretty<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
