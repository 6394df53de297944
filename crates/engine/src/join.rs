//! Ascent/orbit join: snap the ascent onto the ground track and match its exit tangent.

use traj_ascent::tangent_arc;
use traj_config::{AscentConfig, JoinConfig};
use traj_core::GeoPoint;
use traj_core::geo::{angular_distance_deg, bearing_deg};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum JoinError {
    #[error("ascent has no points")]
    EmptyAscent,
    #[error("ground track needs at least two points, got {0}")]
    TrackTooShort(usize),
    #[error("no finite ground-track point near the ascent end")]
    NoNearestPoint,
    #[error("tail of {tail_len} points exceeds regenerated ascent of {ascent_len}")]
    TailTooLong { tail_len: usize, ascent_len: usize },
    #[error("joined ascent has a non-finite point at index {0}")]
    NonFinite(usize),
}

/// Index of the track point closest (great-circle) to `target`.
pub fn nearest_index(track: &[GeoPoint], target: &GeoPoint) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, point) in track.iter().enumerate() {
        let d = angular_distance_deg(target, point);
        if !d.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((idx, d));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Rebuild `ascent` so it ends on `orbit_path` heading along the track.
///
/// The ascent is regenerated from its first point to the nearest track sample `k`
/// with the exit tangent set to the track's local bearing, then its last
/// `tail_len` points are replaced with the track samples ending at `k`.
pub fn join_ascent(
    ascent: &[GeoPoint],
    orbit_path: &[GeoPoint],
    join: &JoinConfig,
    ascent_config: &AscentConfig,
) -> Result<Vec<GeoPoint>, JoinError> {
    let (Some(launch), Some(current_end)) = (ascent.first(), ascent.last()) else {
        return Err(JoinError::EmptyAscent);
    };
    let n = orbit_path.len();
    if n < 2 {
        return Err(JoinError::TrackTooShort(n));
    }

    let k = nearest_index(orbit_path, current_end).ok_or(JoinError::NoNearestPoint)?;
    let snapped = orbit_path[k];
    let bearing = bearing_deg(&snapped, &orbit_path[(k + 1) % n]);

    let densified = (ascent.len() as f64 * join.densify_factor) as usize;
    let segments = join.min_points.max(densified);
    let mut joined = tangent_arc(launch, &snapped, segments, bearing, ascent_config);

    let tail_len = join
        .min_tail
        .max((joined.len() as f64 * join.tail_fraction) as usize);
    if tail_len > joined.len() {
        return Err(JoinError::TailTooLong {
            tail_len,
            ascent_len: joined.len(),
        });
    }

    let tail_start = joined.len() - tail_len;
    for j in 0..tail_len {
        let back = (tail_len - 1 - j) as isize;
        let idx = (k as isize - back).rem_euclid(n as isize) as usize;
        joined[tail_start + j] = orbit_path[idx];
    }

    if let Some(index) = joined.iter().position(|p| !p.is_finite()) {
        return Err(JoinError::NonFinite(index));
    }
    Ok(joined)
}
