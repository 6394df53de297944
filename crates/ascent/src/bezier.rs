//! Quadratic Bézier arcs in latitude/longitude space.
//!
//! Longitudes of the control and end points are unwrapped relative to the start
//! before evaluation, so an arc crossing the antimeridian takes the short way
//! round; every emitted sample is renormalized into `(-180, 180]`.

use traj_config::AscentConfig;
use traj_core::constants::COS_LAT_FLOOR;
use traj_core::geo::{angular_distance_deg, lon_delta, normalize_lon};
use traj_core::{GeoPoint, OrbitClass, Site};

/// Separations below this collapse the arc onto its start point.
const DEGENERATE_SEPARATION_DEG: f64 = 1.0e-9;

/// Heuristic ascent for an orbit class, using the class profile's end point and point count.
pub fn heuristic_ascent(site: &Site, class: OrbitClass, config: &AscentConfig) -> Vec<GeoPoint> {
    let profile = config.profile(class);
    let (end_lat, end_lon) = profile.end_point(site);
    heuristic_arc(
        &site.point(),
        &GeoPoint::new(end_lat, end_lon),
        profile.num_points,
        class,
        config,
    )
}

/// Bézier arc whose control point is offset from the start/end midpoint in a class-specific direction.
///
/// Returns `num_points + 1` samples; `num_points` below 1 is treated as 1.
pub fn heuristic_arc(
    start: &GeoPoint,
    end: &GeoPoint,
    num_points: usize,
    class: OrbitClass,
    config: &AscentConfig,
) -> Vec<GeoPoint> {
    let profile = config.profile(class);
    let end_lon = start.lon + lon_delta(start.lon, end.lon);
    let mid_lat = (start.lat + end.lat) / 2.0;
    let mid_lon = (start.lon + end_lon) / 2.0;

    let separation = angular_distance_deg(start, end);
    if separation < DEGENERATE_SEPARATION_DEG {
        return repeated(start, num_points);
    }
    let offset = (separation * config.offset_scale)
        .max(config.offset_min_deg)
        .min(config.offset_max_deg);

    let mut control_lat = mid_lat * profile.control_mid_lat_weight + offset * profile.control_lat_factor;
    if let Some(floor) = profile.control_min_lat_deg {
        control_lat = control_lat.max(floor);
    }
    let control_lat = control_lat.clamp(-90.0, 90.0);
    let control_lon = mid_lon + offset * profile.control_lon_factor;

    evaluate(
        (start.lat, start.lon),
        (control_lat, control_lon),
        (end.lat, end_lon),
        num_points,
    )
}

/// Bézier arc whose exit tangent at `t = 1` points along `end_bearing_deg`.
///
/// The control point sits behind `end` on the reverse bearing, at a lever length of
/// `clamp(separation / tangent_divisor, tangent_min_deg, tangent_max_deg)` degrees.
pub fn tangent_arc(
    start: &GeoPoint,
    end: &GeoPoint,
    num_points: usize,
    end_bearing_deg: f64,
    config: &AscentConfig,
) -> Vec<GeoPoint> {
    let end_lon = start.lon + lon_delta(start.lon, end.lon);
    let separation = angular_distance_deg(start, end);
    if separation < DEGENERATE_SEPARATION_DEG {
        return repeated(start, num_points);
    }
    let lever = (separation / config.tangent_divisor)
        .max(config.tangent_min_deg)
        .min(config.tangent_max_deg);

    let bearing = end_bearing_deg.to_radians();
    let cos_lat = end.lat.to_radians().cos().max(COS_LAT_FLOOR);
    let control_lat = (end.lat - lever * bearing.cos()).clamp(-90.0, 90.0);
    let control_lon = end_lon - lever * bearing.sin() / cos_lat;

    evaluate(
        (start.lat, start.lon),
        (control_lat, control_lon),
        (end.lat, end_lon),
        num_points,
    )
}

fn repeated(point: &GeoPoint, num_points: usize) -> Vec<GeoPoint> {
    vec![GeoPoint::new(point.lat, point.lon); num_points.max(1) + 1]
}

fn evaluate(
    start: (f64, f64),
    control: (f64, f64),
    end: (f64, f64),
    num_points: usize,
) -> Vec<GeoPoint> {
    let n = num_points.max(1);
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let a = (1.0 - t) * (1.0 - t);
            let b = 2.0 * (1.0 - t) * t;
            let c = t * t;
            GeoPoint {
                lat: a * start.0 + b * control.0 + c * end.0,
                lon: normalize_lon(a * start.1 + b * control.1 + c * end.1),
            }
        })
        .collect()
}
