//! Trajectory engine crate: resolves the launch site, classifies the orbit, builds and
//! joins the ascent and ground track, and fronts it all with a versioned cache.

pub mod engine;
pub mod join;
pub mod sites;

pub use facade::*;
pub use traj_ascent as ascent;
pub use traj_cache as cache;
pub use traj_orbits as orbits;

mod facade;
