use crate::constants::*;
use crate::palette::Swatch;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Point cloud stored as three flat attribute buffers.
///
/// Particle `i` lives at `positions[3i..3i+3]`, `colors[3i..3i+3]` and
/// `sizes[i]`. Buffers are never resized after [`ParticleField::build`].
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub sizes: Vec<f32>,
}

impl ParticleField {
    /// Scatter `count` points over a spherical shell of radius
    /// `[PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN)`.
    ///
    /// Directions are uniform over the sphere; the radius is uniform too, so
    /// density thins towards the outer edge of the shell.
    pub fn build<R: Rng + ?Sized>(rng: &mut R, count: usize, tints: &[Swatch]) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);
        let mut sizes = Vec::with_capacity(count);
        let linear: Vec<[f32; 3]> = tints.iter().map(Swatch::linear_rgb).collect();

        for _ in 0..count {
            let radius = PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN;
            let theta = rng.gen::<f32>() * TAU;
            let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();
            positions.extend_from_slice(&[
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ]);

            // Colors stay parallel to positions; no tints means white.
            let color = if linear.is_empty() {
                [1.0; 3]
            } else {
                linear[rng.gen_range(0..linear.len())]
            };
            colors.extend_from_slice(&color);

            sizes.push(rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN);
        }

        Self {
            positions,
            colors,
            sizes,
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn color(&self, i: usize) -> [f32; 3] {
        [
            self.colors[i * 3],
            self.colors[i * 3 + 1],
            self.colors[i * 3 + 2],
        ]
    }
}

// CPU mirrors of particles.wgsl, kept in lockstep with the shader.

/// Vertex-stage float applied to a particle at rest position `p`.
#[inline]
pub fn displace(p: Vec3, time: f32) -> Vec3 {
    let dy = (time * FLOAT_Y_TIME_RATE + p.x * FLOAT_Y_PHASE_SCALE).sin() * FLOAT_Y_AMPLITUDE;
    let dx = (time * FLOAT_X_TIME_RATE + p.z * FLOAT_X_PHASE_SCALE).cos() * FLOAT_X_AMPLITUDE;
    Vec3::new(p.x + dx, p.y + dy, p.z)
}

/// On-screen point diameter in framebuffer pixels. `view_z` is negative in
/// front of the camera.
#[inline]
pub fn point_size(size: f32, pixel_ratio: f32, view_z: f32) -> f32 {
    size * pixel_ratio * (POINT_SIZE_SCALE / -view_z)
}

/// Fragment alpha at `dist` from the point center (0..0.5 across the
/// sprite); `None` where the fragment is discarded.
#[inline]
pub fn glow_alpha(dist: f32) -> Option<f32> {
    if dist > GLOW_RADIUS {
        return None;
    }
    Some((1.0 - smoothstep(0.0, GLOW_RADIUS, dist)) * GLOW_ALPHA)
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
