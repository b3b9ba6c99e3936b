//! Object picking and selection.
//!
//! Picking runs on the CPU:
//! 1. the tapped screen point (pixels, origin top-left) is unprojected through
//!    `inverse(projection * view)` into a world-space [`Ray`]
//! 2. a [`Picker`] tests the ray against the mesh nodes of the scene
//! 3. the nearest hit (smallest parameter along the world ray) wins
//!
//! How a node is hit is up to the picker. [`CubePicker`] treats every mesh
//! node as an axis-aligned cube in its own local space, which is exactly what
//! a die is.

use cgmath::{ElementWise, Matrix4, Point2, SquareMatrix, Vector3, Vector4};

use crate::data_structures::scene_graph::{NodeId, SceneGraph};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f32>,
    /// Not necessarily normalized; distances along the ray are in units of it.
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    /// Ray through a screen point, from the near plane towards the far plane.
    ///
    /// Returns `None` if `projection * view` is singular or the viewport is empty.
    pub fn from_screen(
        point: Point2<f32>,
        (width, height): (u32, u32),
        projection: Matrix4<f32>,
        view: Matrix4<f32>,
    ) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let inverse = (projection * view).invert()?;
        let ndc_x = 2.0 * point.x / width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * point.y / height as f32;

        // depth range is [0, 1]: near plane at 0, far plane at 1
        let near = unproject(inverse, Vector4::new(ndc_x, ndc_y, 0.0, 1.0))?;
        let far = unproject(inverse, Vector4::new(ndc_x, ndc_y, 1.0, 1.0))?;
        Some(Self::new(near, far - near))
    }

    pub fn at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// Same ray expressed in the space `matrix` maps into.
    pub fn transformed(&self, matrix: Matrix4<f32>) -> Self {
        let origin = matrix * self.origin.extend(1.0);
        let direction = matrix * self.direction.extend(0.0);
        Self::new(origin.truncate(), direction.truncate())
    }

    /// Slab test. Returns the ray parameter of the entry point, or 0 when the
    /// origin is inside the box.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let inv = |d: f32| if d.abs() > f32::EPSILON { 1.0 / d } else { f32::MAX };
        let inv_dir = Vector3::new(
            inv(self.direction.x),
            inv(self.direction.y),
            inv(self.direction.z),
        );

        let t1 = (aabb.min - self.origin).mul_element_wise(inv_dir);
        let t2 = (aabb.max - self.origin).mul_element_wise(inv_dir);

        let tmin = t1.x.min(t2.x).max(t1.y.min(t2.y)).max(t1.z.min(t2.z));
        let tmax = t1.x.max(t2.x).min(t1.y.max(t2.y)).min(t1.z.max(t2.z));

        if tmax >= tmin && tmax >= 0.0 {
            Some(tmin.max(0.0))
        } else {
            None
        }
    }
}

fn unproject(inverse: Matrix4<f32>, clip: Vector4<f32>) -> Option<Vector3<f32>> {
    let world = inverse * clip;
    if world.w == 0.0 {
        return None;
    }
    Some(world.truncate() / world.w)
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Cube centered at the origin with the given half edge length.
    pub fn cube(half_extent: f32) -> Self {
        let half = Vector3::new(half_extent, half_extent, half_extent);
        Self::new(-half, half)
    }

    pub fn contains(&self, point: Vector3<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// Maps a world-space ray to the node it selects, if any.
pub trait Picker {
    fn pick(&self, graph: &SceneGraph, root: NodeId, ray: &Ray) -> Option<NodeId>;
}

/// Hits mesh nodes as cubes of `half_extent` in their local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubePicker {
    pub half_extent: f32,
}

impl CubePicker {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }
}

impl Default for CubePicker {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Picker for CubePicker {
    fn pick(&self, graph: &SceneGraph, root: NodeId, ray: &Ray) -> Option<NodeId> {
        let cube = Aabb::cube(self.half_extent);
        let mut nearest: Option<(NodeId, f32)> = None;

        for (id, world) in graph.walk(root) {
            if !graph.node(id).is_ok_and(|node| node.has_mesh()) {
                continue;
            }
            // a node scaled to zero cannot be hit
            let Some(to_local) = world.invert() else {
                continue;
            };
            let Some(t) = ray.transformed(to_local).intersect_aabb(&cube) else {
                continue;
            };
            // `to_local` is affine, so `t` is the same parameter on the world ray
            if nearest.is_none_or(|(_, best)| t < best) {
                nearest = Some((id, t));
            }
        }

        nearest.map(|(id, _)| id)
    }
}
