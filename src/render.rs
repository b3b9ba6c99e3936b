//! Per-frame uniform composition.
//!
//! Each frame runs three strictly ordered steps:
//!
//! 1. resolve the view matrix from the [`Camera`]
//! 2. build the projection matrix once from the current viewport
//! 3. walk the hierarchy depth-first (children in insertion order) and emit a
//!    [`Uniforms`] pair for every node that carries a mesh
//!
//! The draws go to a [`DrawTarget`], which stands in for whatever issues the
//! actual GPU draw calls. A frame either completes fully or fails before the
//! first draw is emitted.

use instant::Duration;

use crate::{
    camera::{Camera, Projection},
    data_structures::{
        scene_graph::{NodeId, SceneGraph},
        uniforms::Uniforms,
    },
    error::SceneError,
};

/// Receiver of the composed per-draw uniforms, in traversal order.
pub trait DrawTarget {
    fn draw(&mut self, node: NodeId, uniforms: &Uniforms);
}

impl DrawTarget for Vec<(NodeId, Uniforms)> {
    fn draw(&mut self, node: NodeId, uniforms: &Uniforms) {
        self.push((node, *uniforms));
    }
}

/// Summary of one composed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Zero-based index of the frame, counting only completed frames.
    pub frame: u64,
    /// Time since the previous `on_frame` call, zero for the first one.
    pub dt: Duration,
    /// Number of uniforms emitted.
    pub draws: usize,
}

/// Composes the uniforms for every mesh node below (and including) `root`.
///
/// `root` may be any node: world transforms include its ancestors, so drawing
/// a subtree gives the same model-view matrices as drawing the whole scene.
/// Returns the number of draws emitted. Non-finite matrices are passed
/// through untouched.
pub fn compose_frame(
    graph: &SceneGraph,
    root: NodeId,
    camera: &Camera,
    projection: &Projection,
    target: &mut dyn DrawTarget,
) -> Result<usize, SceneError> {
    let view = camera.view_matrix(graph)?;
    let projection = projection.calc_matrix();
    graph.node(root)?;

    let mut draws = 0;
    for (id, world) in graph.walk(root) {
        if graph.node(id)?.has_mesh() {
            target.draw(id, &Uniforms::new(projection, view * world));
            draws += 1;
        }
    }
    Ok(draws)
}
