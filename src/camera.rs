//! Camera and projection state.
//!
//! The [`Camera`] decides where the view matrix comes from; the
//! [`Projection`] tracks the viewport and builds the perspective matrix once
//! per frame.

use cgmath::{Matrix4, Rad, SquareMatrix};

use crate::{
    data_structures::scene_graph::{NodeId, SceneGraph},
    error::SceneError,
    math,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewSource {
    /// A view matrix maintained alongside the camera state.
    Matrix(Matrix4<f32>),
    /// The view is the inverse of this node's world transform.
    Node(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub source: ViewSource,
}

impl Camera {
    pub fn new(view: Matrix4<f32>) -> Self {
        Self {
            source: ViewSource::Matrix(view),
        }
    }

    /// Eye on the +Z axis, `distance` units away from the origin, looking down -Z.
    pub fn looking_from(distance: f32) -> Self {
        Self::new(math::translation(0.0, 0.0, -distance))
    }

    /// Follows a node: moving the node moves the eye.
    pub fn attached(node: NodeId) -> Self {
        Self {
            source: ViewSource::Node(node),
        }
    }

    pub fn view_matrix(&self, graph: &SceneGraph) -> Result<Matrix4<f32>, SceneError> {
        match self.source {
            ViewSource::Matrix(view) => Ok(view),
            ViewSource::Node(id) => graph
                .world_transform(id)?
                .invert()
                .ok_or(SceneError::SingularView(id)),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(math::identity())
    }
}

/// Viewport size plus the perspective parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    width: u32,
    height: u32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    /// A zero dimension is raised to one pixel so the aspect ratio stays finite.
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    /// Ignored when either dimension is zero (minimized windows report 0x0).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        math::perspective_right_hand(self.fovy.0, self.aspect(), self.znear, self.zfar)
    }
}
