//! Launch trajectory engine.
//!
//! Turns a pad identifier and a free-text orbit label into a stylized ascent path
//! and a closed ground track, joined seamlessly and cached by algorithm version.
//! The workspace crates are re-exported here so front-ends (CLI, dashboards) only
//! need this one dependency.

pub mod logging;

pub use traj_ascent as ascent;
pub use traj_cache as cache;
pub use traj_config as config;
pub use traj_core as geodesy;
pub use traj_engine as engine;
pub use traj_export as export;
pub use traj_orbits as orbits;

pub use traj_engine::{DynEngine, TrajectoryEngine, TrajectoryResult, open_engine};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
