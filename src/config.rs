//! Renderer configuration.
//!
//! Everything tunable about the camera, projection and input handling lives
//! in [`RendererConfig`]. It can be built in code (start from `Default`) or
//! read from TOML, where every key is optional:
//!
//! ```toml
//! fovy_degrees = 65.0
//! near_z = 0.1
//! far_z = 100.0
//! camera_distance = 8.0
//! drag_sensitivity = 0.01
//! tap_slop = 4.0
//! pick_half_extent = 0.5
//! drag_mode = "camera"
//! ```

use std::path::Path;

use anyhow::{Context as _, ensure};
use serde::Deserialize;

use crate::input::DragTarget;

/// What drags rotate when no explicit node target is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    Camera,
    Selection,
}

impl From<DragMode> for DragTarget {
    fn from(mode: DragMode) -> Self {
        match mode {
            DragMode::Camera => DragTarget::Camera,
            DragMode::Selection => DragTarget::Selection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Vertical field of view.
    pub fovy_degrees: f32,
    pub near_z: f32,
    pub far_z: f32,
    /// Distance of the default eye from the origin along +Z.
    pub camera_distance: f32,
    /// Radians of rotation per pixel of drag.
    pub drag_sensitivity: f32,
    /// Pixels the pointer may travel between press and release and still count as a tap.
    pub tap_slop: f32,
    /// Half edge length of the cube mesh nodes are picked as.
    pub pick_half_extent: f32,
    pub drag_mode: DragMode,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            fovy_degrees: 65.0,
            near_z: 0.1,
            far_z: 100.0,
            camera_distance: 8.0,
            drag_sensitivity: 0.01,
            tap_slop: 4.0,
            pick_half_extent: 0.5,
            drag_mode: DragMode::Camera,
        }
    }
}

impl RendererConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse renderer config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read renderer config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Rejects values the math layer would silently turn into NaN or Inf.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.fovy_degrees > 0.0 && self.fovy_degrees < 180.0,
            "fovy_degrees must be in (0, 180), got {}",
            self.fovy_degrees
        );
        ensure!(self.near_z > 0.0, "near_z must be positive, got {}", self.near_z);
        ensure!(
            self.near_z < self.far_z,
            "near_z ({}) must be smaller than far_z ({})",
            self.near_z,
            self.far_z
        );
        ensure!(
            self.drag_sensitivity.is_finite(),
            "drag_sensitivity must be finite"
        );
        ensure!(self.tap_slop > 0.0, "tap_slop must be positive, got {}", self.tap_slop);
        ensure!(
            self.pick_half_extent > 0.0,
            "pick_half_extent must be positive, got {}",
            self.pick_half_extent
        );
        ensure!(
            self.camera_distance.is_finite(),
            "camera_distance must be finite"
        );
        Ok(())
    }
}
