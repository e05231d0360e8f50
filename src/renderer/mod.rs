//! Renderer handoff
//!
//! The simulation only produces a flat point buffer, a point size and a clear
//! color. This module describes that buffer to wgpu; drawing lives elsewhere.

pub mod vertex;

pub use vertex::{PointVertex, clear_color};
