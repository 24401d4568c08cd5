//! wgpu renderer for a [`backdrop_core::Scene`].
//!
//! The caller owns the `wgpu::Instance` and creates the surface (from a
//! canvas on the web, a window natively); [`GpuState`] takes it from there.

mod render;

pub use render::{GpuState, RendererOptions};
