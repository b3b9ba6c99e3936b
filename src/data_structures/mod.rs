//! Engine data structures: the scene graph and the GPU-facing layouts.
//!
//! - `scene_graph` enables hierarchical scene organization
//! - `uniforms` holds the per-draw transform pair and the vertex layout

pub mod scene_graph;
pub mod uniforms;
