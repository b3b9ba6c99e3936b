//! scene-ngin
//!
//! The transform and scene core of a small interactive 3D renderer: a
//! hierarchical scene graph of named nodes with local transforms, the matrix
//! builders producing those transforms, and the per-frame step that turns the
//! hierarchy plus camera state into GPU-ready uniforms. GPU pipeline setup,
//! windowing and asset loading are left to the embedding application.
//!
//! High-level modules
//! - `math`: stateless 4x4 transform and projection builders
//! - `data_structures`: scene graph, uniforms and vertex layout
//! - `camera`: view source and perspective projection state
//! - `render`: per-frame uniform composition
//! - `pick`: CPU ray picking of mesh nodes
//! - `input`: tap selection and drag rotation
//! - `flow`: the per-frame/resize/input hooks and the winit input driver
//! - `context`: owns a scene and implements those hooks
//! - `config`: renderer configuration loaded from TOML
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod input;
pub mod math;
pub mod pick;
pub mod render;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use error::SceneError;
pub use winit::event::WindowEvent;
