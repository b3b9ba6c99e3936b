//! Flow control between a render-loop driver and the scene.
//!
//! A [`SceneFlow`] is the capability set any driver needs: one call per
//! display refresh, one per viewport resize, and the two input hooks. The
//! driver owns the loop; the flow owns the scene. Everything happens on the
//! driver's thread, input is applied before the next frame is composed.
//!
//! For winit based drivers, [`FlowInput::from_window_event`] and
//! [`InputDriver`] turn raw window events into these calls:
//!
//! 1. `Resized` becomes `on_resize`
//! 2. a left press and release without moving more than the tap slop is `on_tap`
//! 3. moving further while pressed starts a drag, each cursor move is `on_drag`
//! 4. releasing after a drag is `on_drag_end`

use cgmath::{InnerSpace, Point2, Vector2};
use winit::event::{MouseButton, WindowEvent};

use crate::{
    data_structures::scene_graph::NodeId,
    error::SceneError,
    render::{DrawTarget, FrameStats},
};

/// Per-frame, resize and input hooks of a scene.
pub trait SceneFlow {
    /// Composes one frame and hands the uniforms to `target`.
    ///
    /// An error means the frame was dropped and nothing was drawn.
    fn on_frame(&mut self, target: &mut dyn DrawTarget) -> Result<FrameStats, SceneError>;

    /// Viewport size in pixels changed.
    fn on_resize(&mut self, width: u32, height: u32);

    /// Tap at a screen point. Returns the selected node, if any.
    fn on_tap(&mut self, point: Point2<f32>) -> Option<NodeId>;

    /// A drag started or continued by `delta` pixels.
    fn on_drag(&mut self, delta: Vector2<f32>);

    /// The last delta of a drag.
    fn on_drag_end(&mut self, delta: Vector2<f32>);
}

/// The window events a flow cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowInput {
    Resized { width: u32, height: u32 },
    CursorMoved(Point2<f32>),
    Pressed,
    Released,
}

impl FlowInput {
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved(Point2::new(
                position.x as f32,
                position.y as f32,
            ))),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(if state.is_pressed() {
                Self::Pressed
            } else {
                Self::Released
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point2<f32>,
    last: Point2<f32>,
    dragging: bool,
}

/// Tells taps from drags and forwards them to a [`SceneFlow`].
#[derive(Debug, Clone)]
pub struct InputDriver {
    tap_slop: f32,
    cursor: Point2<f32>,
    press: Option<Press>,
}

impl InputDriver {
    pub fn new(tap_slop: f32) -> Self {
        Self {
            tap_slop,
            cursor: Point2::new(0.0, 0.0),
            press: None,
        }
    }

    pub fn cursor(&self) -> Point2<f32> {
        self.cursor
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    /// Converts and dispatches a winit event. Returns whether it was relevant.
    pub fn handle_window_event<F: SceneFlow + ?Sized>(
        &mut self,
        flow: &mut F,
        event: &WindowEvent,
    ) -> bool {
        match FlowInput::from_window_event(event) {
            Some(input) => {
                self.dispatch(flow, input);
                true
            }
            None => false,
        }
    }

    pub fn dispatch<F: SceneFlow + ?Sized>(&mut self, flow: &mut F, input: FlowInput) {
        match input {
            FlowInput::Resized { width, height } => flow.on_resize(width, height),
            FlowInput::CursorMoved(position) => {
                self.cursor = position;
                if let Some(press) = &mut self.press {
                    if !press.dragging && (position - press.origin).magnitude() > self.tap_slop {
                        press.dragging = true;
                    }
                    if press.dragging {
                        let delta = position - press.last;
                        press.last = position;
                        flow.on_drag(delta);
                    }
                }
            }
            FlowInput::Pressed => {
                self.press = Some(Press {
                    origin: self.cursor,
                    last: self.cursor,
                    dragging: false,
                });
            }
            FlowInput::Released => match self.press.take() {
                Some(press) if press.dragging => flow.on_drag_end(self.cursor - press.last),
                Some(_) => {
                    flow.on_tap(self.cursor);
                }
                None => (),
            },
        }
    }
}

/// Sets up logging for the current platform. Safe to call more than once.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
    }
}
