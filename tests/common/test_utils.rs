#![allow(dead_code)]

use scene_ngin::{
    Matrix4, Point2, Vector2, Vector4,
    data_structures::{scene_graph::NodeId, uniforms::Uniforms},
    error::SceneError,
    flow::{SceneFlow, init_logger},
    render::{DrawTarget, FrameStats},
};

pub const EPSILON: f32 = 1e-5;

pub fn setup() {
    init_logger();
}

pub fn assert_mat4_near(actual: Matrix4<f32>, expected: Matrix4<f32>, epsilon: f32) {
    let a: [[f32; 4]; 4] = actual.into();
    let e: [[f32; 4]; 4] = expected.into();
    for col in 0..4 {
        for row in 0..4 {
            assert!(
                (a[col][row] - e[col][row]).abs() <= epsilon,
                "mismatch at column {} row {}: {} vs {}\nactual:   {:?}\nexpected: {:?}",
                col,
                row,
                a[col][row],
                e[col][row],
                a,
                e
            );
        }
    }
}

pub fn assert_vec4_near(actual: Vector4<f32>, expected: Vector4<f32>, epsilon: f32) {
    let a: [f32; 4] = actual.into();
    let e: [f32; 4] = expected.into();
    for i in 0..4 {
        assert!(
            (a[i] - e[i]).abs() <= epsilon,
            "mismatch at component {}: {:?} vs {:?}",
            i,
            a,
            e
        );
    }
}

/// Records every hook invocation of a [`SceneFlow`].
#[derive(Debug, Default)]
pub struct RecordingFlow {
    pub frames: u32,
    pub resizes: Vec<(u32, u32)>,
    pub taps: Vec<Point2<f32>>,
    pub drags: Vec<Vector2<f32>>,
    pub drag_ends: Vec<Vector2<f32>>,
}

impl SceneFlow for RecordingFlow {
    fn on_frame(&mut self, _: &mut dyn DrawTarget) -> Result<FrameStats, SceneError> {
        self.frames += 1;
        Ok(FrameStats {
            frame: u64::from(self.frames - 1),
            dt: Default::default(),
            draws: 0,
        })
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }

    fn on_tap(&mut self, point: Point2<f32>) -> Option<NodeId> {
        self.taps.push(point);
        None
    }

    fn on_drag(&mut self, delta: Vector2<f32>) {
        self.drags.push(delta);
    }

    fn on_drag_end(&mut self, delta: Vector2<f32>) {
        self.drag_ends.push(delta);
    }
}

/// Captured draws of one frame.
pub type Draws = Vec<(NodeId, Uniforms)>;
