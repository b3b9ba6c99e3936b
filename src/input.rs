//! Translation of raw tap and drag input into scene changes.
//!
//! The gesture layer hands over screen points (pixels, origin top-left) for
//! taps and point deltas for drags. Taps select a node through a
//! [`Picker`]; drags rotate a [`DragTarget`] incrementally.
//!
//! A drag delta `(dx, dy)` becomes `rotation_around_y(dx * s) *
//! rotation_around_x(dy * s)`. The increment is always composed on the same
//! side of the existing transform so repeated drags never drift:
//!
//! - nodes: `M' = R * M`, the axes stay fixed in the parent frame
//! - a camera with an explicit view: `V' = V * R`, the world turns about its
//!   origin in front of the eye
//! - a camera attached to a node: that node is rotated like any other node

use cgmath::{Matrix4, Point2, Vector2};
use log::{debug, warn};

use crate::{
    camera::{Camera, Projection, ViewSource},
    data_structures::scene_graph::{NodeId, SceneGraph},
    error::SceneError,
    math,
    pick::{Picker, Ray},
};

/// What a drag rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Camera,
    /// The node selected by the last tap. Drags without a selection do nothing.
    Selection,
    Node(NodeId),
}

#[derive(Debug, Clone)]
pub struct InputAdapter {
    pub drag_target: DragTarget,
    /// Radians of rotation per pixel of drag.
    pub sensitivity: f32,
    selected: Option<NodeId>,
    dragging: bool,
}

impl InputAdapter {
    pub fn new(drag_target: DragTarget, sensitivity: f32) -> Self {
        Self {
            drag_target,
            sensitivity,
            selected: None,
            dragging: false,
        }
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Selects the node under `point`, or clears the selection on a miss.
    pub fn tap(
        &mut self,
        point: Point2<f32>,
        graph: &SceneGraph,
        root: NodeId,
        camera: &Camera,
        projection: &Projection,
        picker: &dyn Picker,
    ) -> Option<NodeId> {
        let view = match camera.view_matrix(graph) {
            Ok(view) => view,
            Err(e) => {
                warn!("ignoring tap at ({}, {}): {}", point.x, point.y, e);
                return None;
            }
        };
        self.selected = Ray::from_screen(point, projection.size(), projection.calc_matrix(), view)
            .and_then(|ray| picker.pick(graph, root, &ray));
        debug!("tap at ({}, {}) selected {:?}", point.x, point.y, self.selected);
        self.selected
    }

    /// The incremental rotation a drag by `delta` produces.
    pub fn drag_rotation(&self, delta: Vector2<f32>) -> Matrix4<f32> {
        math::rotation_around_y(delta.x * self.sensitivity)
            * math::rotation_around_x(delta.y * self.sensitivity)
    }

    /// Begins or continues a drag.
    pub fn drag(
        &mut self,
        delta: Vector2<f32>,
        graph: &mut SceneGraph,
        camera: &mut Camera,
    ) -> Result<(), SceneError> {
        self.dragging = true;
        let rotation = self.drag_rotation(delta);
        match self.drag_target {
            DragTarget::Node(id) => rotate_node(graph, id, rotation),
            DragTarget::Selection => match self.selected {
                Some(id) => rotate_node(graph, id, rotation),
                None => {
                    debug!("drag without a selection");
                    Ok(())
                }
            },
            DragTarget::Camera => match &mut camera.source {
                ViewSource::Matrix(view) => {
                    *view = *view * rotation;
                    Ok(())
                }
                ViewSource::Node(id) => rotate_node(graph, *id, rotation),
            },
        }
    }

    /// Applies the final delta of a drag and ends it.
    pub fn drag_end(
        &mut self,
        delta: Vector2<f32>,
        graph: &mut SceneGraph,
        camera: &mut Camera,
    ) -> Result<(), SceneError> {
        let result = self.drag(delta, graph, camera);
        self.dragging = false;
        result
    }
}

fn rotate_node(graph: &mut SceneGraph, id: NodeId, rotation: Matrix4<f32>) -> Result<(), SceneError> {
    graph.update_model_matrix(id, |local| *local = rotation * *local)
}
