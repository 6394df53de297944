//! Visual altitude profile (radius 1.0 = Earth surface).
//!
//! Real altitudes are compressed so that even geostationary paths stay close to
//! the globe when drawn.

const EARTH_RADIUS_KM: f64 = 6371.0;
/// Largest relative altitude a path is drawn at.
const MAX_RELATIVE_ALTITUDE: f64 = 0.08;
/// Keeps paths above the cloud layer.
const MIN_ORBIT_RADIUS: f64 = 1.012;
const ASCENT_START_RADIUS: f64 = 1.012;
const ASCENT_BULGE: f64 = 0.025;
/// Gap kept below the orbit line so the ascent tail never z-fights with it.
const ORBIT_CLEARANCE: f64 = 0.0006;

/// Representative altitude (km) for a free-text orbit label.
pub fn visual_altitude_km(orbit_label: &str) -> f64 {
    let label = orbit_label.to_lowercase();
    let has = |needle: &str| label.contains(needle);
    if has("suborbital") {
        150.0
    } else if has("sso") || has("sun-synchronous") {
        550.0
    } else if has("polar") {
        600.0
    } else if has("leo") || has("low earth orbit") {
        400.0
    } else if has("gto") || has("geostationary transfer") {
        20_000.0
    } else if has("geo") || has("geostationary") {
        35_786.0
    } else if has("meo") || has("gps") {
        20_200.0
    } else if has("heeo") || has("molniya") {
        40_000.0
    } else {
        800.0
    }
}

/// Radius the ground track is drawn at for a label.
pub fn orbit_radius(orbit_label: &str) -> f64 {
    let relative = (visual_altitude_km(orbit_label) / EARTH_RADIUS_KM).min(MAX_RELATIVE_ALTITUDE);
    (1.0 + relative).clamp(MIN_ORBIT_RADIUS, 1.0 + MAX_RELATIVE_ALTITUDE)
}

/// Radius at `progress` in `[0, 1]` along the ascent: a linear climb with a sine bulge,
/// capped just below the orbit radius.
pub fn ascent_radius(progress: f64, target_radius: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    let base = ASCENT_START_RADIUS + (target_radius - ASCENT_START_RADIUS) * progress;
    let bulge = ASCENT_BULGE * (progress * std::f64::consts::PI).sin();
    (base + bulge).min(target_radius - ORBIT_CLEARANCE)
}

/// One radius per ascent sample.
pub fn ascent_radii(num_samples: usize, target_radius: f64) -> Vec<f64> {
    match num_samples {
        0 => Vec::new(),
        1 => vec![ascent_radius(0.0, target_radius)],
        n => (0..n)
            .map(|i| ascent_radius(i as f64 / (n - 1) as f64, target_radius))
            .collect(),
    }
}
