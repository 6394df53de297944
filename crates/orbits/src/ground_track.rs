//! Closed circular-orbit ground tracks through a required point.
//!
//! The orbital plane is the equatorial circle tilted by the effective inclination
//! `i` and rotated about the polar axis by a node-like angle `Ω`. A point at
//! argument `u` along the orbit is
//!
//! ```text
//! x = cos Ω cos u − sin Ω cos i sin u
//! y = sin Ω cos u + cos Ω cos i sin u
//! z = sin i sin u
//! ```
//!
//! Solving `z` for `u0` and then `(x, y)` for `Ω` pins the plane onto the
//! end-of-ascent point. No Earth rotation is modelled.

use std::f64::consts::TAU;

use traj_core::GeoPoint;
use traj_core::constants::{MAX_INCLINATION_DEG, MIN_INCLINATION_DEG};
use traj_core::vector::{geo_from_vector, unit_from_geo};

/// Fold any inclination into `(0, 90]` and clamp it to `[0.1, 89.9]`.
///
/// Retrograde values map onto their prograde mirror (97° → 83°), which is
/// what the sub-satellite latitude band depends on.
pub fn effective_inclination_deg(inclination_deg: f64) -> f64 {
    if !inclination_deg.is_finite() {
        return MIN_INCLINATION_DEG;
    }
    let folded = inclination_deg.abs() % 180.0;
    let folded = if folded > 90.0 { 180.0 - folded } else { folded };
    folded.clamp(MIN_INCLINATION_DEG, MAX_INCLINATION_DEG)
}

/// Plane orientation solved for a required point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSolution {
    /// Effective inclination (radians).
    pub inclination_rad: f64,
    /// Argument along the orbit at the required point (radians).
    pub u0_rad: f64,
    /// Node-like rotation about the polar axis (radians).
    pub omega_rad: f64,
}

impl PlaneSolution {
    /// Solve the plane through `point` for `inclination_deg` (folded and clamped first).
    ///
    /// When `|point.lat|` exceeds the effective inclination the point is
    /// unreachable; `u0` saturates at ±90° and the track passes as close as it can.
    pub fn through(point: &GeoPoint, inclination_deg: f64) -> Self {
        let i = effective_inclination_deg(inclination_deg).to_radians();
        let [x0, y0, z0] = unit_from_geo(point);
        let u0 = (z0 / i.sin()).clamp(-1.0, 1.0).asin();
        let omega = y0.atan2(x0) - (u0.sin() * i.cos()).atan2(u0.cos());
        Self {
            inclination_rad: i,
            u0_rad: u0,
            omega_rad: omega,
        }
    }

    /// Geodetic point at argument `u` (radians).
    pub fn point_at(&self, u: f64) -> GeoPoint {
        let (sin_o, cos_o) = self.omega_rad.sin_cos();
        let (sin_i, cos_i) = self.inclination_rad.sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let v = [
            cos_o * cos_u - sin_o * cos_i * sin_u,
            sin_o * cos_u + cos_o * cos_i * sin_u,
            sin_i * sin_u,
        ];
        geo_from_vector(&v)
    }
}

/// Sample `num_points` points of the closed track through `end_of_ascent`.
///
/// Index 0 lies at `u0`, i.e. on `end_of_ascent` whenever the point is reachable;
/// the sequence then advances prograde through one full revolution.
pub fn ground_track(end_of_ascent: &GeoPoint, inclination_deg: f64, num_points: usize) -> Vec<GeoPoint> {
    let plane = PlaneSolution::through(end_of_ascent, inclination_deg);
    (0..num_points)
        .map(|k| plane.point_at(plane.u0_rad + TAU * k as f64 / num_points as f64))
        .collect()
}
