use launch_trajectory::geodesy::GeoPoint;
use launch_trajectory::geodesy::geo::{angular_distance_deg, bearing_deg, lon_delta, normalize_lon};
use launch_trajectory::geodesy::vector::{geo_from_vector, unit_from_geo};

#[test]
fn longitude_wraps_into_half_open_range() {
    assert_eq!(normalize_lon(0.0), 0.0);
    assert_eq!(normalize_lon(180.0), 180.0);
    assert_eq!(normalize_lon(-180.0), 180.0);
    assert_eq!(normalize_lon(540.0), 180.0);
    assert!((normalize_lon(190.0) - -170.0).abs() < 1e-12);
    assert!((normalize_lon(-190.0) - 170.0).abs() < 1e-12);
    assert!((normalize_lon(-80.6043 + 720.0) - -80.6043).abs() < 1e-9);

    let mut lon = -1000.0;
    while lon <= 1000.0 {
        let wrapped = normalize_lon(lon);
        assert!(wrapped > -180.0 && wrapped <= 180.0, "{lon} -> {wrapped}");
        lon += 0.37;
    }
}

#[test]
fn geo_point_constructor_normalizes() {
    let p = GeoPoint::new(10.0, 200.0);
    assert!((p.lon - -160.0).abs() < 1e-12);
    assert!(p.is_finite());
    assert!(!GeoPoint { lat: f64::NAN, lon: 0.0 }.is_finite());
}

#[test]
fn longitude_delta_takes_short_way() {
    assert!((lon_delta(170.0, -170.0) - 20.0).abs() < 1e-12);
    assert!((lon_delta(-170.0, 170.0) - -20.0).abs() < 1e-12);
    assert!((lon_delta(-80.0, 20.0) - 100.0).abs() < 1e-12);
}

#[test]
fn haversine_matches_known_separations() {
    let origin = GeoPoint::new(0.0, 0.0);
    assert!(angular_distance_deg(&origin, &origin).abs() < 1e-9);
    assert!((angular_distance_deg(&origin, &GeoPoint::new(0.0, 90.0)) - 90.0).abs() < 1e-9);
    assert!((angular_distance_deg(&origin, &GeoPoint::new(45.0, 0.0)) - 45.0).abs() < 1e-9);
    // across the antimeridian
    let a = GeoPoint::new(0.0, 179.5);
    let b = GeoPoint::new(0.0, -179.5);
    assert!((angular_distance_deg(&a, &b) - 1.0).abs() < 1e-9);
}

#[test]
fn bearing_uses_compass_convention() {
    let origin = GeoPoint::new(0.0, 0.0);
    assert!(bearing_deg(&origin, &GeoPoint::new(10.0, 0.0)).abs() < 1e-9);
    assert!((bearing_deg(&origin, &GeoPoint::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
    assert!((bearing_deg(&origin, &GeoPoint::new(-10.0, 0.0)) - 180.0).abs() < 1e-9);
    assert!((bearing_deg(&origin, &GeoPoint::new(0.0, -10.0)) - 270.0).abs() < 1e-9);
}

#[test]
fn unit_vectors_round_trip() {
    for &(lat, lon) in &[(28.6084, -80.6043), (-45.0, 179.0), (89.0, 10.0), (0.0, -179.9)] {
        let p = GeoPoint::new(lat, lon);
        let v = unit_from_geo(&p);
        let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((length - 1.0).abs() < 1e-12);
        let back = geo_from_vector(&v);
        assert!((back.lat - lat).abs() < 1e-9);
        assert!(lon_delta(lon, back.lon).abs() < 1e-9);

        // scaling does not move the point
        let back = geo_from_vector(&[v[0] * 3.0, v[1] * 3.0, v[2] * 3.0]);
        assert!((back.lat - lat).abs() < 1e-9);
    }
}
