//! Flat vertex buffer handed to the renderer
//!
//! Six floats per particle, `x, y, z, r, g, b`, in store order.

use super::state::ParticleStore;

/// Floats per particle
pub const FLOATS_PER_PARTICLE: usize = 6;

/// Interleaved position/color data, rebuilt every frame
#[derive(Debug, Clone, Default)]
pub struct VertexBuffer {
    data: Vec<f32>,
}

impl VertexBuffer {
    /// Rebuild from the store. Must run after the frame's removals.
    pub fn sync(&mut self, particles: &ParticleStore) {
        self.data.clear();
        self.data.reserve(particles.len() * FLOATS_PER_PARTICLE);
        for p in particles.iter() {
            self.data.extend_from_slice(&[
                p.position.x,
                p.position.y,
                p.position.z,
                p.color.x,
                p.color.y,
                p.color.z,
            ]);
        }
    }

    /// Number of floats
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of points (draw count)
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.data.len() / FLOATS_PER_PARTICLE) as u32
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}
