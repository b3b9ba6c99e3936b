//! GPU-facing data layouts shared with the shading pipeline.
//!
//! [`Uniforms`] is the only thing the frame composer hands out per draw call.
//! [`Vertex`] is produced elsewhere (mesh authoring) but its layout is part of
//! the same contract, so it is declared next to it.

use cgmath::Matrix4;

/// Vertex buffer slot the pipeline binds vertex data to.
pub const BUFFER_INDEX_VERTICES: u32 = 0;
/// Buffer slot the pipeline binds [`Uniforms`] to.
pub const BUFFER_INDEX_UNIFORMS: u32 = 1;
/// Texture slot of the color texture.
pub const TEXTURE_INDEX_COLOR: u32 = 0;

/**
 * Per-draw transform pair, laid out exactly as the shader reads it.
 *
 * Both matrices are stored column by column.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub projection_matrix: [[f32; 4]; 4],
    pub model_view_matrix: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn new(projection: Matrix4<f32>, model_view: Matrix4<f32>) -> Self {
        Self {
            projection_matrix: projection.into(),
            model_view_matrix: model_view.into(),
        }
    }

    pub fn projection(&self) -> Matrix4<f32> {
        self.projection_matrix.into()
    }

    pub fn model_view(&self) -> Matrix4<f32> {
        self.model_view_matrix.into()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Floating point RGBA
    pub color: [f32; 4],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /**
     * Tells the pipeline what the bytes of a vertex buffer refer to.
     *
     * stride: length of a vertex
     * locations: position (0), color (1), texture coordinate (2)
     */
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 7]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
