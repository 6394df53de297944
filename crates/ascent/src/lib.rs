//! Ascent path generation: heuristic and tangent-constrained quadratic Bézier arcs
//! plus the visual altitude profile a renderer lifts them onto.

pub mod bezier;
pub mod profile;

pub use bezier::{heuristic_arc, heuristic_ascent, tangent_arc};
