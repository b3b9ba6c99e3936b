use cgmath::{Deg, Point2, Vector2};
use instant::{Duration, Instant};
use log::{debug, info, warn};

use crate::{
    camera::{Camera, Projection},
    config::RendererConfig,
    data_structures::scene_graph::{NodeId, SceneGraph},
    error::SceneError,
    flow::SceneFlow,
    input::InputAdapter,
    pick::{CubePicker, Picker},
    render::{self, DrawTarget, FrameStats},
};

/// Owns the scene and everything needed to compose its frames.
///
/// The graph starts out with a single node named `"root"`; everything reachable
/// from [`Context::root`] is drawn. Nodes that are created but never attached
/// below the root stay in the graph but are neither drawn nor pickable.
pub struct Context {
    pub graph: SceneGraph,
    pub root: NodeId,
    pub camera: Camera,
    pub projection: Projection,
    pub input: InputAdapter,
    pub picker: Box<dyn Picker>,
    pub config: RendererConfig,
    frame: u64,
    last_frame: Option<Instant>,
}

impl Context {
    /// A zero `width` or `height` is treated as one pixel until the first
    /// resize. `config` is expected to be validated already (loading it from
    /// TOML does that); an invalid one is logged and used as is.
    pub fn new(config: RendererConfig, width: u32, height: u32) -> Self {
        if let Err(e) = config.validate() {
            warn!("renderer config is invalid, frames may contain NaN: {:#}", e);
        }
        let mut graph = SceneGraph::new();
        let root = graph.create("root");
        let camera = Camera::looking_from(config.camera_distance);
        let projection = Projection::new(
            width,
            height,
            Deg(config.fovy_degrees),
            config.near_z,
            config.far_z,
        );
        let input = InputAdapter::new(config.drag_mode.into(), config.drag_sensitivity);
        let picker = Box::new(CubePicker::new(config.pick_half_extent));
        info!(
            "scene context {}x{}, fovy {} deg, depth {}..{}",
            width, height, config.fovy_degrees, config.near_z, config.far_z
        );

        Self {
            graph,
            root,
            camera,
            projection,
            input,
            picker,
            config,
            frame: 0,
            last_frame: None,
        }
    }

    /// Creates a node and attaches it below `parent`.
    pub fn spawn(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        has_mesh: bool,
    ) -> Result<NodeId, SceneError> {
        let id = self.graph.create(name);
        self.graph.set_has_mesh(id, has_mesh)?;
        if let Err(e) = self.graph.attach(parent, id) {
            self.graph.remove(id)?;
            return Err(e);
        }
        Ok(id)
    }

    /// Number of frames composed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

impl SceneFlow for Context {
    fn on_frame(&mut self, target: &mut dyn DrawTarget) -> Result<FrameStats, SceneError> {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);

        match render::compose_frame(
            &self.graph,
            self.root,
            &self.camera,
            &self.projection,
            target,
        ) {
            Ok(draws) => {
                let stats = FrameStats {
                    frame: self.frame,
                    dt,
                    draws,
                };
                self.frame += 1;
                Ok(stats)
            }
            Err(e) => {
                warn!("dropping frame {}: {}", self.frame, e);
                Err(e)
            }
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!("ignoring resize to {}x{}", width, height);
        }
        self.projection.resize(width, height);
    }

    fn on_tap(&mut self, point: Point2<f32>) -> Option<NodeId> {
        self.input.tap(
            point,
            &self.graph,
            self.root,
            &self.camera,
            &self.projection,
            self.picker.as_ref(),
        )
    }

    fn on_drag(&mut self, delta: Vector2<f32>) {
        if let Err(e) = self.input.drag(delta, &mut self.graph, &mut self.camera) {
            warn!("drag by ({}, {}) ignored: {}", delta.x, delta.y, e);
        }
    }

    fn on_drag_end(&mut self, delta: Vector2<f32>) {
        if let Err(e) = self.input.drag_end(delta, &mut self.graph, &mut self.camera) {
            warn!("drag end by ({}, {}) ignored: {}", delta.x, delta.y, e);
        }
    }
}
