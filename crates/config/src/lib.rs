//! Configuration models and loaders for the launch trajectory engine.
//!
//! Every section falls back to built-in values, so a config file only needs to
//! name what it overrides. The arc-shaping constants are visual tuning knobs
//! with no physical derivation.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use traj_core::geo::normalize_lon;
use traj_core::{OrbitClass, Site};

/// Tag written into every cache key and record. Bump on any geometry change.
pub const DEFAULT_ALGORITHM_VERSION: &str = "v3-tangent-join";

/// Top-level engine configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub algorithm_version: String,
    pub sites: SiteTableConfig,
    pub classifier: ClassifierConfig,
    pub ascent: AscentConfig,
    pub ground_track: GroundTrackConfig,
    pub join: JoinConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm_version: DEFAULT_ALGORITHM_VERSION.to_string(),
            sites: SiteTableConfig::default(),
            classifier: ClassifierConfig::default(),
            ascent: AscentConfig::default(),
            ground_track: GroundTrackConfig::default(),
            join: JoinConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// One row of the ordered pad lookup table.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteEntry {
    /// Substring matched against the pad identifier.
    pub key: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl SiteEntry {
    fn new(key: &str, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            lat,
            lon,
        }
    }

    pub fn site(&self) -> Site {
        Site {
            name: self.name.clone(),
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Ordered site table; the first matching key wins.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteTableConfig {
    pub default_key: String,
    pub entries: Vec<SiteEntry>,
    /// External table (YAML list, one TOML entry, or a directory of TOML entries)
    /// that replaces `entries` when set. Relative paths resolve against the config file.
    pub file: Option<PathBuf>,
}

impl SiteTableConfig {
    /// Replace `entries` with the table named by `file`, if any.
    pub fn load_file(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.file else {
            return Ok(());
        };
        let entries = load_site_entries(path)?;
        if entries.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "site table {} has no entries",
                path.display()
            )));
        }
        self.entries = entries;
        Ok(())
    }
}

impl Default for SiteTableConfig {
    fn default() -> Self {
        Self {
            default_key: "LC-39A".to_string(),
            entries: vec![
                SiteEntry::new("LC-39A", "Cape Canaveral, FL", 28.6084, -80.6043),
                SiteEntry::new("LC-40", "Cape Canaveral, FL", 28.5619, -80.5773),
                SiteEntry::new("SLC-4E", "Vandenberg, CA", 34.6321, -120.6107),
                SiteEntry::new("Starbase", "Starbase, TX", 25.9975, -97.1566),
                SiteEntry::new("Launch Complex 39A", "Cape Canaveral, FL", 28.6084, -80.6043),
                SiteEntry::new("Launch Complex 40", "Cape Canaveral, FL", 28.5619, -80.5773),
                SiteEntry::new("Space Launch Complex 4E", "Vandenberg, CA", 34.6321, -120.6107),
            ],
            file: None,
        }
    }
}

/// Closed interval used for latitude-derived inclination clamps.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Constants for label normalization and inclination assumptions.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Site-name substrings that turn a generic LEO label into a polar one.
    pub polar_site_names: Vec<String>,
    pub polar_inclination_deg: f64,
    pub iss_inclination_deg: f64,
    pub default_inclination_deg: f64,
    /// Added to |site latitude| before the equatorial clamp.
    pub equatorial_margin_deg: f64,
    pub equatorial_band: Band,
    pub gto_band: Band,
    pub suborbital_band: Band,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            polar_site_names: vec!["Vandenberg".to_string()],
            polar_inclination_deg: 97.0,
            iss_inclination_deg: 51.6,
            default_inclination_deg: 30.0,
            equatorial_margin_deg: 0.5,
            equatorial_band: Band::new(20.0, 60.0),
            gto_band: Band::new(20.0, 35.0),
            suborbital_band: Band::new(10.0, 45.0),
        }
    }
}

/// Heuristic arc for one orbit class.
///
/// The end point is the launch site shifted by the offsets (or pinned to
/// `end_lat_fixed_deg`). The Bézier control point sits at
/// `(mid_lat * control_mid_lat_weight + off * control_lat_factor, mid_lon + off * control_lon_factor)`,
/// with the latitude raised to `control_min_lat_deg` when set and kept within ±90.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ArcProfile {
    #[serde(default)]
    pub end_lat_offset_deg: f64,
    #[serde(default)]
    pub end_lat_fixed_deg: Option<f64>,
    pub end_lon_offset_deg: f64,
    pub num_points: usize,
    #[serde(default = "unit_weight")]
    pub control_mid_lat_weight: f64,
    pub control_lat_factor: f64,
    pub control_lon_factor: f64,
    #[serde(default)]
    pub control_min_lat_deg: Option<f64>,
}

fn unit_weight() -> f64 {
    1.0
}

impl ArcProfile {
    pub fn end_point(&self, site: &Site) -> (f64, f64) {
        let lat = self
            .end_lat_fixed_deg
            .unwrap_or(site.lat + self.end_lat_offset_deg);
        (lat, site.lon + self.end_lon_offset_deg)
    }
}

/// Ascent curve tuning.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AscentConfig {
    /// Heuristic control offset = clamp(separation * offset_scale, offset_min_deg, offset_max_deg).
    pub offset_scale: f64,
    pub offset_min_deg: f64,
    pub offset_max_deg: f64,
    /// Tangent-constrained lever length = clamp(separation / divisor, min, max).
    pub tangent_divisor: f64,
    pub tangent_min_deg: f64,
    pub tangent_max_deg: f64,
    pub leo_polar: ArcProfile,
    pub leo_equatorial: ArcProfile,
    pub gto: ArcProfile,
    pub suborbital: ArcProfile,
    pub default: ArcProfile,
}

impl AscentConfig {
    pub fn profile(&self, class: OrbitClass) -> &ArcProfile {
        match class {
            OrbitClass::LeoPolar => &self.leo_polar,
            OrbitClass::LeoEquatorial => &self.leo_equatorial,
            OrbitClass::Gto => &self.gto,
            OrbitClass::Suborbital => &self.suborbital,
            OrbitClass::Default => &self.default,
        }
    }
}

impl Default for AscentConfig {
    fn default() -> Self {
        Self {
            offset_scale: 0.4,
            offset_min_deg: 5.0,
            offset_max_deg: 30.0,
            tangent_divisor: 3.0,
            tangent_min_deg: 5.0,
            tangent_max_deg: 20.0,
            // south-southwest out of the polar range
            leo_polar: ArcProfile {
                end_lat_offset_deg: -30.0,
                end_lat_fixed_deg: None,
                end_lon_offset_deg: -10.0,
                num_points: 20,
                control_mid_lat_weight: 1.0,
                control_lat_factor: -1.0,
                control_lon_factor: -0.5,
                control_min_lat_deg: Some(-85.0),
            },
            // pulled toward the equator
            leo_equatorial: ArcProfile {
                end_lat_offset_deg: 0.0,
                end_lat_fixed_deg: Some(0.0),
                end_lon_offset_deg: 100.0,
                num_points: 35,
                control_mid_lat_weight: 0.5,
                control_lat_factor: 0.0,
                control_lon_factor: 1.0,
                control_min_lat_deg: None,
            },
            gto: ArcProfile {
                end_lat_offset_deg: 0.0,
                end_lat_fixed_deg: Some(0.0),
                end_lon_offset_deg: 150.0,
                num_points: 30,
                control_mid_lat_weight: 1.0,
                control_lat_factor: 1.0,
                control_lon_factor: 2.0,
                control_min_lat_deg: None,
            },
            suborbital: ArcProfile {
                end_lat_offset_deg: 15.0,
                end_lat_fixed_deg: None,
                end_lon_offset_deg: 45.0,
                num_points: 15,
                control_mid_lat_weight: 1.0,
                control_lat_factor: 0.25,
                control_lon_factor: 0.25,
                control_min_lat_deg: None,
            },
            default: ArcProfile {
                end_lat_offset_deg: 20.0,
                end_lat_fixed_deg: None,
                end_lon_offset_deg: 60.0,
                num_points: 20,
                control_mid_lat_weight: 1.0,
                control_lat_factor: 1.0,
                control_lon_factor: 1.5,
                control_min_lat_deg: None,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GroundTrackConfig {
    pub num_points: usize,
}

impl Default for GroundTrackConfig {
    fn default() -> Self {
        Self { num_points: 360 }
    }
}

/// Ascent/orbit join refinement.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct JoinConfig {
    pub enabled: bool,
    /// Lower bound on segments in the regenerated ascent.
    pub min_points: usize,
    /// Regenerated segments = max(min_points, floor(original length * densify_factor)).
    pub densify_factor: f64,
    pub min_tail: usize,
    pub tail_fraction: f64,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_points: 40,
            densify_factor: 1.25,
            min_tail: 6,
            tail_fraction: 0.15,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("cache/trajectory_cache.json"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load an engine configuration from a TOML or YAML file, then the external site
/// table it names (if any).
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let path = path.as_ref();
    let mut config: EngineConfig = if is_toml(path) {
        toml::from_str(&fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    if let (Some(file), Some(base)) = (config.sites.file.as_mut(), path.parent()) {
        if file.is_relative() {
            *file = base.join(&*file);
        }
    }
    config.sites.load_file()?;
    config.validate()?;
    Ok(config)
}

/// Load site entries from a YAML list, a single TOML entry, or a directory whose
/// `*.toml` files (in name order) each hold one entry. Longitudes are normalized.
pub fn load_site_entries<P: AsRef<Path>>(path: P) -> Result<Vec<SiteEntry>, ConfigError> {
    let path = path.as_ref();
    let mut entries: Vec<SiteEntry> = if path.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|file| is_toml(file))
            .collect();
        files.sort();
        files
            .iter()
            .map(|file| read_toml_entry(file))
            .collect::<Result<_, _>>()?
    } else if is_toml(path) {
        vec![read_toml_entry(path)?]
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    for entry in &mut entries {
        entry.lon = normalize_lon(entry.lon);
    }
    Ok(entries)
}

fn read_toml_entry(path: &Path) -> Result<SiteEntry, ConfigError> {
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
}

impl EngineConfig {
    /// Reject settings the generators cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.algorithm_version.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "algorithm_version must not be empty".to_string(),
            ));
        }
        if let Some(entry) = self
            .sites
            .entries
            .iter()
            .find(|entry| !(-90.0..=90.0).contains(&entry.lat) || !entry.lon.is_finite())
        {
            return Err(ConfigError::Invalid(format!(
                "site {}: coordinates ({}, {}) out of range",
                entry.key, entry.lat, entry.lon
            )));
        }
        let bands = [
            ("equatorial_band", self.classifier.equatorial_band),
            ("gto_band", self.classifier.gto_band),
            ("suborbital_band", self.classifier.suborbital_band),
        ];
        for (name, band) in bands {
            if band.min > band.max {
                return Err(ConfigError::Invalid(format!(
                    "{name}: min {} exceeds max {}",
                    band.min, band.max
                )));
            }
        }
        if self.ascent.offset_min_deg > self.ascent.offset_max_deg
            || self.ascent.tangent_min_deg > self.ascent.tangent_max_deg
        {
            return Err(ConfigError::Invalid(
                "ascent offset bounds are inverted".to_string(),
            ));
        }
        if self.ascent.tangent_divisor <= 0.0 {
            return Err(ConfigError::Invalid(
                "ascent.tangent_divisor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
