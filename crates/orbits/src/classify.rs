//! Map free-text orbit labels onto canonical orbit classes and assumed inclinations.

use traj_config::ClassifierConfig;
use traj_core::{OrbitClass, Site};

/// Outcome of label normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub class: OrbitClass,
    /// Assumed inclination before folding; may exceed 90 for retrograde orbits.
    pub inclination_deg: f64,
}

/// Classify `orbit_label` for a launch from `site`.
///
/// Matching is case-insensitive and substring based; the first rule that fires
/// picks the class. An "iss" anywhere in the label overrides the inclination.
pub fn classify(orbit_label: &str, site: &Site, config: &ClassifierConfig) -> Classification {
    let label = orbit_label.to_lowercase();
    let class = normalize(&label, site, config);
    let inclination_deg = if label.contains("iss") {
        config.iss_inclination_deg
    } else {
        inclination_for(class, site, config)
    };
    Classification {
        class,
        inclination_deg,
    }
}

fn normalize(label: &str, site: &Site, config: &ClassifierConfig) -> OrbitClass {
    let has = |needle: &str| label.contains(needle);
    if has("gto") || has("geostationary") {
        OrbitClass::Gto
    } else if has("suborbital") {
        OrbitClass::Suborbital
    } else if has("polar") || has("sso") || has("sun-synchronous") {
        OrbitClass::LeoPolar
    } else if has("leo") || has("low earth orbit") {
        if is_polar_site(site, config) {
            OrbitClass::LeoPolar
        } else {
            OrbitClass::LeoEquatorial
        }
    } else {
        OrbitClass::Default
    }
}

fn is_polar_site(site: &Site, config: &ClassifierConfig) -> bool {
    config
        .polar_site_names
        .iter()
        .any(|name| !name.is_empty() && site.name.contains(name.as_str()))
}

fn inclination_for(class: OrbitClass, site: &Site, config: &ClassifierConfig) -> f64 {
    let abs_lat = site.lat.abs();
    match class {
        OrbitClass::LeoPolar => config.polar_inclination_deg,
        OrbitClass::LeoEquatorial => config
            .equatorial_band
            .clamp(abs_lat + config.equatorial_margin_deg),
        OrbitClass::Gto => config.gto_band.clamp(abs_lat),
        OrbitClass::Suborbital => config.suborbital_band.clamp(abs_lat),
        OrbitClass::Default => config.default_inclination_deg,
    }
}
