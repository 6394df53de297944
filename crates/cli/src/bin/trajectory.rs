use std::path::PathBuf;

use clap::Parser;
use launch_trajectory::config::{EngineConfig, load_config};
use launch_trajectory::export::{self, json, points};
use launch_trajectory::{TrajectoryResult, logging, open_engine};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Ascent and ground-track generator for a launch pad and orbit label"
)]
struct Cli {
    /// Pad identifier as published in the launch schedule (e.g. "LC-39A")
    #[arg(long)]
    pad: String,

    /// Site identifier used for coordinate lookup (defaults to --pad)
    #[arg(long)]
    site: Option<String>,

    /// Free-text orbit label (e.g. "Low Earth Orbit", "GTO")
    #[arg(long, default_value = "")]
    orbit: String,

    /// Mission name carried through to the result
    #[arg(long, default_value = "Unknown")]
    mission: String,

    /// Engine configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site table replacing the built-in pads (YAML list, TOML entry, or directory of TOML entries)
    #[arg(long)]
    sites: Option<PathBuf>,

    /// Cache file override
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Skip the on-disk cache
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Write ascent and ground-track samples as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full result as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    logging::init_logging(&config.logging.level);

    if let Some(path) = &cli.sites {
        config.sites.file = Some(path.clone());
        config.sites.load_file()?;
        config.validate()?;
    }
    if let Some(path) = &cli.cache {
        config.cache.path = path.clone();
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }

    let engine = open_engine(config);
    let site = cli.site.as_deref().unwrap_or(&cli.pad);
    let result = engine.compute_trajectory(site, &cli.orbit, &cli.mission, &cli.pad);

    let stdout_taken = [&cli.csv, &cli.json]
        .iter()
        .any(|p| p.as_deref() == Some(std::path::Path::new("-")));
    if !stdout_taken {
        print_summary(&result);
    }

    if let Some(path) = &cli.csv {
        let mut writer = export::writer_for_path(path)?;
        points::write_csv(
            writer.as_mut(),
            &result.trajectory,
            &result.ascent_radii,
            &result.orbit_path,
            result.orbit_radius,
        )?;
    }
    if let Some(path) = &cli.json {
        let mut writer = export::writer_for_path(path)?;
        json::write_pretty(writer.as_mut(), &result)?;
    }

    Ok(())
}

fn print_summary(result: &TrajectoryResult) {
    let (min_lat, max_lat) = result
        .orbit_path
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.lat), hi.max(p.lat))
        });
    let insertion = result.trajectory.last();

    println!("=== Trajectory ===");
    println!("Mission        : {} ({})", result.mission, result.pad);
    println!(
        "Launch site    : {} [{}] at {:.4}, {:.4}",
        result.site.name, result.site_key, result.site.lat, result.site.lon
    );
    println!(
        "Orbit          : {} -> {} at {:.1} deg",
        if result.orbit_label.is_empty() { "-" } else { result.orbit_label.as_str() },
        result.orbit_class,
        result.inclination_deg
    );
    println!(
        "Ascent         : {} points, joined = {}",
        result.trajectory.len(),
        result.joined
    );
    if let Some(p) = insertion {
        println!("Insertion      : {:.4}, {:.4}", p.lat, p.lon);
    }
    if !result.orbit_path.is_empty() {
        println!(
            "Ground track   : {} points, latitude {:.2} .. {:.2}",
            result.orbit_path.len(),
            min_lat,
            max_lat
        );
    }
    println!(
        "Cache          : {} ({})",
        result.cache_key,
        if result.from_cache { "hit" } else { "miss" }
    );
}
