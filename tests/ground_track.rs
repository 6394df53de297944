use launch_trajectory::geodesy::GeoPoint;
use launch_trajectory::geodesy::geo::{angular_distance_deg, lon_delta};
use launch_trajectory::orbits::ground_track::PlaneSolution;
use launch_trajectory::orbits::{effective_inclination_deg, ground_track};

fn lat_extremes(track: &[GeoPoint]) -> (f64, f64) {
    track.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.lat), hi.max(p.lat))
    })
}

#[test]
fn effective_inclination_folds_and_clamps() {
    assert!((effective_inclination_deg(97.0) - 83.0).abs() < 1e-9);
    assert!((effective_inclination_deg(-97.0) - 83.0).abs() < 1e-9);
    assert!((effective_inclination_deg(29.1084) - 29.1084).abs() < 1e-12);
    assert_eq!(effective_inclination_deg(0.0), 0.1);
    assert_eq!(effective_inclination_deg(180.0), 0.1);
    assert_eq!(effective_inclination_deg(90.0), 89.9);
    assert_eq!(effective_inclination_deg(f64::NAN), 0.1);

    let mut incl = -1000.0;
    while incl <= 1000.0 {
        let eff = effective_inclination_deg(incl);
        assert!((0.1..=89.9).contains(&eff), "{incl} -> {eff}");
        incl += 0.7;
    }
}

#[test]
fn track_starts_on_the_required_point() {
    for &(lat, lon, incl) in &[
        (0.0, 19.3957, 29.1084),
        (4.6321, -130.6107, 97.0),
        (-20.0, 179.5, 51.6),
        (10.0, -40.0, 30.0),
    ] {
        let point = GeoPoint::new(lat, lon);
        let track = ground_track(&point, incl, 360);
        assert_eq!(track.len(), 360);
        assert!((track[0].lat - lat).abs() < 1e-6, "lat at incl {incl}");
        assert!(lon_delta(lon, track[0].lon).abs() < 1e-6, "lon at incl {incl}");
        for p in &track {
            assert!(p.lon > -180.0 && p.lon <= 180.0);
        }
    }
}

#[test]
fn latitude_band_matches_effective_inclination() {
    let track = ground_track(&GeoPoint::new(0.0, 19.3957), 29.1084, 360);
    let (lo, hi) = lat_extremes(&track);
    assert!(hi <= 29.1084 + 1e-9 && hi > 29.1084 - 0.01, "max {hi}");
    assert!(lo >= -29.1084 - 1e-9 && lo < -29.1084 + 0.01, "min {lo}");

    // retrograde sun-synchronous-like inclination mirrors onto 83 degrees
    let track = ground_track(&GeoPoint::new(4.6321, -130.6107), 97.0, 360);
    let (lo, hi) = lat_extremes(&track);
    assert!((hi - 83.0).abs() < 0.1, "max {hi}");
    assert!((lo + 83.0).abs() < 0.1, "min {lo}");
}

#[test]
fn samples_are_evenly_spaced_around_a_closed_loop() {
    let track = ground_track(&GeoPoint::new(28.0, -80.0), 51.6, 360);
    for i in 0..track.len() {
        let next = track[(i + 1) % track.len()];
        let step = angular_distance_deg(&track[i], &next);
        assert!((step - 1.0).abs() < 1e-6, "step {i}: {step}");
    }
}

#[test]
fn prograde_tracks_move_east() {
    let track = ground_track(&GeoPoint::new(0.0, 19.3957), 29.1084, 360);
    for i in 0..track.len() {
        let next = track[(i + 1) % track.len()];
        assert!(lon_delta(track[i].lon, next.lon) > 0.0, "sample {i} moves west");
    }
}

#[test]
fn unreachable_points_saturate_at_the_band_edge() {
    let point = GeoPoint::new(50.0, -40.0);
    let plane = PlaneSolution::through(&point, 30.0);
    assert!((plane.u0_rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    let track = ground_track(&point, 30.0, 90);
    assert!((track[0].lat - 30.0).abs() < 1e-9);
    assert!(lon_delta(-40.0, track[0].lon).abs() < 1e-9);
    assert!(track.iter().all(|p| p.is_finite()));
}

#[test]
fn empty_and_tiny_tracks() {
    let point = GeoPoint::new(0.0, 0.0);
    assert!(ground_track(&point, 45.0, 0).is_empty());
    let single = ground_track(&point, 45.0, 1);
    assert_eq!(single.len(), 1);
    assert!(single[0].lat.abs() < 1e-9 && single[0].lon.abs() < 1e-9);
}
