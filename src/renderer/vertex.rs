//! Vertex type for point rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::{FLOATS_PER_PARTICLE, VertexBuffer};

/// One particle as the vertex shader sees it
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<PointVertex>() == FLOATS_PER_PARTICLE * 4);

impl PointVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }

    /// View a synced flat buffer as vertices (no copy)
    pub fn slice(buffer: &VertexBuffer) -> &[PointVertex] {
        bytemuck::cast_slice(buffer.as_slice())
    }
}

/// Clear color as a wgpu color
pub fn clear_color(background: glam::Vec4) -> wgpu::Color {
    wgpu::Color {
        r: background.x as f64,
        g: background.y as f64,
        b: background.z as f64,
        a: background.w as f64,
    }
}
