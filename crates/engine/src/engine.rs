//! Trajectory orchestrator: site → orbit class → ascent → ground track → join, behind a cache.

use serde::Serialize;
use tracing::{debug, info, warn};
use traj_ascent::{heuristic_ascent, profile};
use traj_cache::{CacheRecord, TrajectoryCache};
use traj_config::EngineConfig;
use traj_core::{GeoPoint, OrbitClass, Site};
use traj_orbits::{Classification, classify, ground_track};

use crate::join::join_ascent;
use crate::sites::{ResolvedSite, resolve_site};

/// Everything a renderer needs for one launch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub site: Site,
    pub site_key: String,
    /// Launch site first, insertion point last.
    pub trajectory: Vec<GeoPoint>,
    /// Closed ground track; index arithmetic wraps.
    pub orbit_path: Vec<GeoPoint>,
    pub orbit_label: String,
    pub orbit_class: OrbitClass,
    pub inclination_deg: f64,
    pub mission: String,
    pub pad: String,
    pub cache_key: String,
    pub from_cache: bool,
    /// False when the join refinement failed or was disabled.
    pub joined: bool,
    /// Visual radius of the ground track (Earth radius = 1.0).
    pub orbit_radius: f64,
    /// Visual radius of each `trajectory` sample.
    pub ascent_radii: Vec<f64>,
}

/// Composite cache key: `{version}:{site_key}:{class}:{inclination to one decimal}`.
pub fn cache_key(
    algorithm_version: &str,
    site_key: &str,
    class: OrbitClass,
    inclination_deg: f64,
) -> String {
    format!("{algorithm_version}:{site_key}:{class}:{inclination_deg:.1}")
}

/// Geometry produced on a cache miss.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub trajectory: Vec<GeoPoint>,
    pub orbit_path: Vec<GeoPoint>,
    pub joined: bool,
}

/// Computes trajectories, consulting `cache` before doing any geometry.
pub struct TrajectoryEngine<C> {
    config: EngineConfig,
    cache: C,
}

impl<C: TrajectoryCache> TrajectoryEngine<C> {
    pub fn new(config: EngineConfig, cache: C) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Resolve, classify, and either fetch or build the trajectory for one launch.
    ///
    /// Never fails: unknown pads and labels fall back to defaults, a failed join keeps
    /// the un-joined ascent, and cache write errors are only logged.
    pub fn compute_trajectory(
        &self,
        site_identifier: &str,
        orbit_label: &str,
        mission: &str,
        pad: &str,
    ) -> TrajectoryResult {
        let resolved = resolve_site(site_identifier, &self.config.sites);
        if !resolved.matched {
            debug!(identifier = site_identifier, site = %resolved.key, "no site match; using default");
        }
        let classification = classify(orbit_label, &resolved.site, &self.config.classifier);
        let key = cache_key(
            &self.config.algorithm_version,
            &resolved.key,
            classification.class,
            classification.inclination_deg,
        );

        let lookup = Lookup {
            resolved: &resolved,
            classification,
            key: &key,
            orbit_label,
            mission,
            pad,
        };

        match self.cache.get(&key) {
            Some(record) if record.model == self.config.algorithm_version => {
                debug!(key = %key, "trajectory cache hit");
                return self.assemble(record, &lookup, true);
            }
            Some(record) => {
                warn!(key = %key, model = %record.model, "ignoring cache record from another model");
            }
            None => {}
        }

        info!(key = %key, "trajectory cache miss; generating");
        let geometry = self.generate(&resolved.site, classification);
        let record = CacheRecord {
            launch_site: resolved.site.clone(),
            trajectory: geometry.trajectory,
            orbit_path: geometry.orbit_path,
            orbit_label: classification.class.to_string(),
            inclination_deg: classification.inclination_deg,
            joined: geometry.joined,
            model: self.config.algorithm_version.clone(),
        };
        if let Err(err) = self.cache.put(&key, record.clone()) {
            warn!(key = %key, error = %err, "failed to persist trajectory");
        }
        self.assemble(record, &lookup, false)
    }

    /// Build ascent and ground track for a site, joining them when enabled.
    pub fn generate(&self, site: &Site, classification: Classification) -> Geometry {
        let ascent = heuristic_ascent(site, classification.class, &self.config.ascent);
        let end = ascent.last().copied().unwrap_or_else(|| site.point());
        let orbit_path = ground_track(
            &end,
            classification.inclination_deg,
            self.config.ground_track.num_points,
        );
        debug!(
            class = %classification.class,
            inclination = classification.inclination_deg,
            ascent_points = ascent.len(),
            track_points = orbit_path.len(),
            "generated pre-join geometry"
        );

        if !self.config.join.enabled {
            return Geometry {
                trajectory: ascent,
                orbit_path,
                joined: false,
            };
        }

        match join_ascent(&ascent, &orbit_path, &self.config.join, &self.config.ascent) {
            Ok(trajectory) => Geometry {
                trajectory,
                orbit_path,
                joined: true,
            },
            Err(err) => {
                warn!(error = %err, "ascent/orbit join failed; keeping un-joined ascent");
                Geometry {
                    trajectory: ascent,
                    orbit_path,
                    joined: false,
                }
            }
        }
    }

    fn assemble(&self, record: CacheRecord, lookup: &Lookup<'_>, from_cache: bool) -> TrajectoryResult {
        let orbit_label = if lookup.orbit_label.trim().is_empty() {
            record.orbit_label
        } else {
            lookup.orbit_label.to_string()
        };
        let orbit_radius = profile::orbit_radius(&orbit_label);
        let ascent_radii = profile::ascent_radii(record.trajectory.len(), orbit_radius);

        TrajectoryResult {
            site: record.launch_site,
            site_key: lookup.resolved.key.clone(),
            trajectory: record.trajectory,
            orbit_path: record.orbit_path,
            orbit_label,
            orbit_class: lookup.classification.class,
            inclination_deg: record.inclination_deg,
            mission: lookup.mission.to_string(),
            pad: lookup.pad.to_string(),
            cache_key: lookup.key.to_string(),
            from_cache,
            joined: record.joined,
            orbit_radius,
            ascent_radii,
        }
    }
}

/// Per-call inputs carried into result assembly.
struct Lookup<'a> {
    resolved: &'a ResolvedSite,
    classification: Classification,
    key: &'a str,
    orbit_label: &'a str,
    mission: &'a str,
    pad: &'a str,
}
