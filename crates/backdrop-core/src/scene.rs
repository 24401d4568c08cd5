use crate::camera::CameraRig;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::error::SceneError;
use crate::input::InputState;
use crate::particles::ParticleField;
use crate::shapes::*;
use crate::viewport::Viewport;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Everything the backdrop draws, plus the state the frame tick mutates.
///
/// Meshes live in one arena; `shapes` and `rings` reference them by
/// [`MeshId`]. Nothing is added or removed after construction.
pub struct Scene {
    pub particles: ParticleField,
    /// XYZ Euler rotation of the whole particle field.
    pub particle_rotation: Vec3,
    pub meshes: Vec<MeshInstance>,
    pub shapes: Vec<FloatingShape>,
    pub rings: Vec<LightRing>,
    pub camera: CameraRig,
    /// Shader time uniform, seconds since start.
    pub time: f32,
    pub pixel_ratio: f32,
    pixel_ratio_cap: f32,
}

impl Scene {
    /// Build the full scene from `config`, seeding from entropy unless a
    /// seed is given.
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Result<Self, SceneError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build(&mut rng, config, viewport)
    }

    /// Build from an explicit random source. `config` is validated first.
    pub fn build<R: Rng + ?Sized>(
        rng: &mut R,
        config: &SceneConfig,
        viewport: Viewport,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        let particles = ParticleField::build(rng, config.particle_count, &config.tints);

        let mut meshes = Vec::with_capacity(SHAPE_LAYOUT.len() + 1 + RING_LAYOUT.len());
        let mut shapes = Vec::with_capacity(SHAPE_LAYOUT.len() + 1);
        for placement in &SHAPE_LAYOUT {
            let (mesh, params) = create_floating_shape(
                rng,
                placement.kind.geometry(),
                placement.color,
                Vec3::from(placement.position),
                placement.scale,
            );
            shapes.push(FloatingShape {
                mesh: MeshId(meshes.len()),
                params,
            });
            meshes.push(mesh);
        }

        // The heart animates with the floating shapes.
        let (heart, heart_params) = create_heart()?;
        shapes.push(FloatingShape {
            mesh: MeshId(meshes.len()),
            params: heart_params,
        });
        meshes.push(heart);

        let mut rings = Vec::with_capacity(RING_LAYOUT.len());
        for &(radius, color, y) in &RING_LAYOUT {
            rings.push(LightRing {
                mesh: MeshId(meshes.len()),
                spin_speed: RING_SPIN_Z,
            });
            meshes.push(create_light_ring(radius, color, y));
        }

        log::info!(
            "[scene] particles={} shapes={} rings={} meshes={}",
            particles.len(),
            shapes.len(),
            rings.len(),
            meshes.len()
        );

        Ok(Self {
            particles,
            particle_rotation: Vec3::ZERO,
            meshes,
            shapes,
            rings,
            camera: CameraRig::with_aspect(viewport.aspect()),
            time: 0.0,
            pixel_ratio: viewport.pixel_ratio_capped(config.pixel_ratio_cap),
            pixel_ratio_cap: config.pixel_ratio_cap,
        })
    }

    pub fn mesh(&self, id: MeshId) -> &MeshInstance {
        &self.meshes[id.0]
    }

    /// Push a new viewport into the projection and the point-size uniform.
    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.aspect = viewport.aspect();
        self.pixel_ratio = viewport.pixel_ratio_capped(self.pixel_ratio_cap);
        log::info!(
            "[scene] resize {}x{} aspect={:.3} pixel_ratio={}",
            viewport.css_width,
            viewport.css_height,
            self.camera.aspect,
            self.pixel_ratio
        );
    }

    /// Advance every animated element to elapsed time `t` (seconds).
    ///
    /// Rotation accumulators grow by a fixed step per call, so calling this
    /// more often spins shapes faster; everything else is a pure function of
    /// `t` and `input`.
    pub fn tick(&mut self, t: f32, input: &InputState) {
        self.time = t;

        self.particle_rotation.y = t * FIELD_SPIN_Y;
        self.particle_rotation.x = (t * FIELD_WOBBLE_RATE).sin() * FIELD_WOBBLE_AMPLITUDE;

        for shape in &self.shapes {
            shape.advance(&mut self.meshes[shape.mesh.0].transform, t);
        }
        for (i, ring) in self.rings.iter().enumerate() {
            ring.advance(&mut self.meshes[ring.mesh.0].transform, i);
        }

        self.camera.follow_pointer(input.pointer);

        let progress = input.scroll_progress();
        self.camera.apply_scroll(progress);
        self.particle_rotation.y += progress * SCROLL_DRIFT_Y;
    }

    pub fn particle_model(&self) -> Mat4 {
        let r = self.particle_rotation;
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
    }

    /// Mesh ids ordered far to near from the camera, for blending.
    pub fn back_to_front(&self) -> Vec<MeshId> {
        let eye = self.camera.position;
        let mut order: Vec<(MeshId, f32)> = self
            .meshes
            .iter()
            .enumerate()
            .map(|(i, m)| (MeshId(i), m.transform.position.distance_squared(eye)))
            .collect();
        order.sort_by(|a, b| b.1.total_cmp(&a.1));
        order.into_iter().map(|(id, _)| id).collect()
    }
}
