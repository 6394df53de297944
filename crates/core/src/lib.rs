//! Core geodetic types, constants, and shared primitives for the launch trajectory workspace.

use serde::{Deserialize, Serialize};

/// Numeric limits shared by the ascent and ground-track generators.
pub mod constants {
    /// Smallest inclination handed to plane solving (degrees).
    pub const MIN_INCLINATION_DEG: f64 = 0.1;
    /// Largest inclination handed to plane solving (degrees).
    pub const MAX_INCLINATION_DEG: f64 = 89.9;
    /// Floor applied to `1 - a` inside the haversine to keep `atan2` well-conditioned.
    pub const HAVERSINE_FLOOR: f64 = 1.0e-12;
    /// Floor applied to `cos(lat)` when converting an eastward offset into degrees of longitude.
    pub const COS_LAT_FLOOR: f64 = 1.0e-6;
}

/// A point on the unit sphere in geodetic degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Build a point, normalizing the longitude into `(-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon: geo::normalize_lon(lon),
        }
    }

    /// True when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Named launch site with fixed coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Site {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Canonical orbit families the free-text labels are folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitClass {
    #[serde(rename = "LEO-Polar")]
    LeoPolar,
    #[serde(rename = "LEO-Equatorial")]
    LeoEquatorial,
    #[serde(rename = "GTO")]
    Gto,
    #[serde(rename = "Suborbital")]
    Suborbital,
    #[serde(rename = "Default")]
    Default,
}

impl OrbitClass {
    /// Stable tag used in cache keys and persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitClass::LeoPolar => "LEO-Polar",
            OrbitClass::LeoEquatorial => "LEO-Equatorial",
            OrbitClass::Gto => "GTO",
            OrbitClass::Suborbital => "Suborbital",
            OrbitClass::Default => "Default",
        }
    }
}

impl std::fmt::Display for OrbitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spherical geometry helpers working in degrees.
pub mod geo {
    use super::GeoPoint;
    use super::constants::HAVERSINE_FLOOR;

    /// Wrap a longitude into `(-180, 180]`.
    #[inline]
    pub fn normalize_lon(lon: f64) -> f64 {
        let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
        if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
    }

    /// Signed longitude difference `to - from` wrapped into `(-180, 180]`.
    #[inline]
    pub fn lon_delta(from: f64, to: f64) -> f64 {
        normalize_lon(to - from)
    }

    /// Great-circle angular separation (degrees) using the haversine formula on a unit sphere.
    pub fn angular_distance_deg(a: &GeoPoint, b: &GeoPoint) -> f64 {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (b.lon - a.lon).to_radians();
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).max(HAVERSINE_FLOOR).sqrt());
        c.to_degrees()
    }

    /// Initial (forward-azimuth) bearing from `from` to `to`, degrees in `[0, 360)`.
    pub fn bearing_deg(from: &GeoPoint, to: &GeoPoint) -> f64 {
        let phi1 = from.lat.to_radians();
        let phi2 = to.lat.to_radians();
        let dlon = (to.lon - from.lon).to_radians();
        let y = dlon.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();
        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }
}

/// Conversions between geodetic points and Earth-fixed Cartesian vectors.
pub mod vector {
    use super::GeoPoint;
    use super::geo::normalize_lon;

    /// Alias for a 3D vector on or near the unit sphere.
    pub type Vector3 = [f64; 3];

    /// Earth-fixed unit vector for a geodetic point (z through the north pole).
    pub fn unit_from_geo(p: &GeoPoint) -> Vector3 {
        let lat = p.lat.to_radians();
        let lon = p.lon.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    /// Geodetic point for a Cartesian vector; the vector need not be normalized.
    pub fn geo_from_vector(v: &Vector3) -> GeoPoint {
        let horizontal = v[0].hypot(v[1]).max(1.0e-12);
        GeoPoint {
            lat: v[2].atan2(horizontal).to_degrees(),
            lon: normalize_lon(v[1].atan2(v[0]).to_degrees()),
        }
    }
}
