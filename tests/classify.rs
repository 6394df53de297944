use launch_trajectory::config::ClassifierConfig;
use launch_trajectory::geodesy::{OrbitClass, Site};
use launch_trajectory::orbits::classify;

fn site(name: &str, lat: f64, lon: f64) -> Site {
    Site {
        name: name.to_string(),
        lat,
        lon,
    }
}

fn cape() -> Site {
    site("Cape Canaveral, FL", 28.6084, -80.6043)
}

fn vandenberg() -> Site {
    site("Vandenberg, CA", 34.6321, -120.6107)
}

#[test]
fn leo_from_the_cape_is_equatorial() {
    let config = ClassifierConfig::default();
    let c = classify("Low Earth Orbit", &cape(), &config);
    assert_eq!(c.class, OrbitClass::LeoEquatorial);
    assert!((c.inclination_deg - 29.1084).abs() < 1e-9);

    let c = classify("LEO", &cape(), &config);
    assert_eq!(c.class, OrbitClass::LeoEquatorial);
}

#[test]
fn leo_from_vandenberg_is_polar() {
    let config = ClassifierConfig::default();
    let c = classify("Low Earth Orbit", &vandenberg(), &config);
    assert_eq!(c.class, OrbitClass::LeoPolar);
    assert_eq!(c.inclination_deg, 97.0);
}

#[test]
fn polar_keywords_win_at_any_site() {
    let config = ClassifierConfig::default();
    for label in ["Sun-Synchronous Orbit", "SSO", "Polar Orbit"] {
        let c = classify(label, &cape(), &config);
        assert_eq!(c.class, OrbitClass::LeoPolar, "label {label}");
        assert_eq!(c.inclination_deg, 97.0);
    }
}

#[test]
fn gto_and_suborbital_clamp_site_latitude() {
    let config = ClassifierConfig::default();

    let c = classify("Geostationary Transfer Orbit", &cape(), &config);
    assert_eq!(c.class, OrbitClass::Gto);
    assert!((c.inclination_deg - 28.6084).abs() < 1e-9);

    let c = classify("GTO", &site("Kourou", 5.2, -52.8), &config);
    assert_eq!(c.inclination_deg, 20.0);

    let c = classify("Suborbital", &site("Starbase, TX", 25.9975, -97.1566), &config);
    assert_eq!(c.class, OrbitClass::Suborbital);
    assert!((c.inclination_deg - 25.9975).abs() < 1e-9);

    let c = classify("Suborbital", &site("Esrange", 67.9, 21.1), &config);
    assert_eq!(c.inclination_deg, 45.0);
}

#[test]
fn equatorial_band_clamps_both_ends() {
    let config = ClassifierConfig::default();
    let c = classify("LEO", &site("Alcantara", 2.3, -44.4), &config);
    assert_eq!(c.inclination_deg, 20.0);
    let c = classify("LEO", &site("Plesetsk-ish", -70.0, 40.0), &config);
    assert_eq!(c.inclination_deg, 60.0);
}

#[test]
fn first_matching_rule_wins() {
    let config = ClassifierConfig::default();
    assert_eq!(classify("GTO via LEO", &cape(), &config).class, OrbitClass::Gto);
    assert_eq!(
        classify("Suborbital LEO test", &cape(), &config).class,
        OrbitClass::Suborbital
    );
}

#[test]
fn iss_overrides_inclination_only() {
    let config = ClassifierConfig::default();
    let c = classify("Low Earth Orbit (ISS)", &cape(), &config);
    assert_eq!(c.class, OrbitClass::LeoEquatorial);
    assert_eq!(c.inclination_deg, 51.6);

    let c = classify("ISS", &cape(), &config);
    assert_eq!(c.class, OrbitClass::Default);
    assert_eq!(c.inclination_deg, 51.6);
}

#[test]
fn matching_is_case_insensitive() {
    let config = ClassifierConfig::default();
    assert_eq!(
        classify("low EARTH orbit", &cape(), &config).class,
        OrbitClass::LeoEquatorial
    );
    assert_eq!(classify("gto", &cape(), &config).class, OrbitClass::Gto);
}

#[test]
fn unknown_labels_use_default_class() {
    let config = ClassifierConfig::default();
    for label in ["", "Heliocentric", "Medium Earth Orbit"] {
        let c = classify(label, &cape(), &config);
        assert_eq!(c.class, OrbitClass::Default, "label {label:?}");
        assert_eq!(c.inclination_deg, 30.0);
    }
}

#[test]
fn polar_site_names_are_configurable() {
    let config = ClassifierConfig {
        polar_site_names: vec!["Cape".to_string()],
        ..ClassifierConfig::default()
    };
    assert_eq!(
        classify("LEO", &cape(), &config).class,
        OrbitClass::LeoPolar
    );
    assert_eq!(
        classify("LEO", &vandenberg(), &config).class,
        OrbitClass::LeoEquatorial
    );
}

#[test]
fn class_tags_match_cache_key_format() {
    assert_eq!(OrbitClass::LeoPolar.to_string(), "LEO-Polar");
    assert_eq!(OrbitClass::LeoEquatorial.to_string(), "LEO-Equatorial");
    assert_eq!(OrbitClass::Gto.to_string(), "GTO");
    assert_eq!(OrbitClass::Suborbital.to_string(), "Suborbital");
    assert_eq!(OrbitClass::Default.to_string(), "Default");
}
