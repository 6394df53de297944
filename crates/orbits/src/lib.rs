//! Orbit helpers: free-text label classification and inclined ground tracks.

pub mod classify;
pub mod ground_track;

pub use classify::{Classification, classify};
pub use ground_track::{effective_inclination_deg, ground_track};
