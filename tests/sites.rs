use launch_trajectory::config::{SiteEntry, SiteTableConfig};
use launch_trajectory::engine::resolve_site;

fn entry(key: &str, name: &str, lat: f64, lon: f64) -> SiteEntry {
    SiteEntry {
        key: key.to_string(),
        name: name.to_string(),
        lat,
        lon,
    }
}

#[test]
fn pad_codes_resolve_to_known_sites() {
    let table = SiteTableConfig::default();

    let cape = resolve_site("LC-39A", &table);
    assert_eq!(cape.key, "LC-39A");
    assert!(cape.matched);
    assert_eq!(cape.site.name, "Cape Canaveral, FL");
    assert!((cape.site.lat - 28.6084).abs() < 1e-9);
    assert!((cape.site.lon - -80.6043).abs() < 1e-9);

    let vandenberg = resolve_site("SLC-4E", &table);
    assert_eq!(vandenberg.key, "SLC-4E");
    assert_eq!(vandenberg.site.name, "Vandenberg, CA");

    let starbase = resolve_site("Orbital Launch Mount A, Starbase", &table);
    assert_eq!(starbase.key, "Starbase");
}

#[test]
fn long_pad_names_match_by_substring() {
    let table = SiteTableConfig::default();
    let resolved = resolve_site("Kennedy Space Center, FL, Launch Complex 39A", &table);
    assert_eq!(resolved.key, "Launch Complex 39A");
    assert!((resolved.site.lat - 28.6084).abs() < 1e-9);

    let resolved = resolve_site("Vandenberg SFB, CA, Space Launch Complex 4E", &table);
    assert_eq!(resolved.key, "Space Launch Complex 4E");
    assert_eq!(resolved.site.name, "Vandenberg, CA");
}

#[test]
fn table_order_breaks_ties() {
    let table = SiteTableConfig::default();
    // "SLC-40" contains "LC-40", which precedes any other candidate
    let resolved = resolve_site("SLC-40", &table);
    assert_eq!(resolved.key, "LC-40");

    let custom = SiteTableConfig {
        default_key: "Pad".to_string(),
        entries: vec![entry("Pad", "First", 1.0, 2.0), entry("Pad 2", "Second", 3.0, 4.0)],
        file: None,
    };
    assert_eq!(resolve_site("Pad 2", &custom).site.name, "First");
}

#[test]
fn unknown_and_empty_identifiers_use_default() {
    let table = SiteTableConfig::default();
    for identifier in ["", "Baikonur Cosmodrome", "lc-39a"] {
        let resolved = resolve_site(identifier, &table);
        assert_eq!(resolved.key, "LC-39A", "identifier {identifier:?}");
        assert!(!resolved.matched);
    }
}

#[test]
fn missing_default_key_falls_back_to_first_entry_then_builtin() {
    let table = SiteTableConfig {
        default_key: "Nowhere".to_string(),
        entries: vec![entry("Starbase", "Starbase, TX", 25.9975, -97.1566)],
        file: None,
    };
    let resolved = resolve_site("unknown", &table);
    assert_eq!(resolved.key, "Starbase");

    let empty = SiteTableConfig {
        default_key: "Nowhere".to_string(),
        entries: Vec::new(),
        file: None,
    };
    let resolved = resolve_site("unknown", &empty);
    assert_eq!(resolved.key, "LC-39A");
    assert!((resolved.site.lat - 28.6084).abs() < 1e-9);
}

#[test]
fn built_in_site_longitudes_are_normalized() {
    for entry in SiteTableConfig::default().entries {
        assert!(entry.lon > -180.0 && entry.lon <= 180.0);
        assert!((-90.0..=90.0).contains(&entry.lat));
    }
}
