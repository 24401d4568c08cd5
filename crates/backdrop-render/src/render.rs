use backdrop_core::{FrameSink, Scene};

mod helpers;
mod meshes;
mod particles;
mod targets;

use meshes::MeshResources;
use particles::ParticleResources;
use targets::MsaaTarget;

/// Host-specific knobs for [`GpuState`].
#[derive(Clone, Copy, Debug)]
pub struct RendererOptions {
    pub clear_color: wgpu::Color,
    pub msaa_samples: u32,
}

impl RendererOptions {
    /// Transparent clear so the page background shows through the canvas.
    pub fn web() -> Self {
        Self {
            clear_color: wgpu::Color::TRANSPARENT,
            msaa_samples: 4,
        }
    }

    /// Opaque deep purple, matching the page background.
    pub fn native() -> Self {
        let [r, g, b] = backdrop_core::palette::DEEP_PURPLE.linear_rgb();
        Self {
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            msaa_samples: 4,
        }
    }
}

pub struct GpuState<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,
    meshes: MeshResources,
    msaa: MsaaTarget,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    /// Acquire an adapter for `surface`, configure it at `width` x `height`
    /// and upload every mesh and the particle field of `scene`.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
        scene: &Scene,
        options: RendererOptions,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // A see-through clear only composites correctly with premultiplied alpha.
        let alpha_mode = if options.clear_color.a < 1.0
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        log::info!(
            "[gpu] adapter={:?} format={:?} alpha={:?} msaa={}",
            adapter.get_info().name,
            format,
            alpha_mode,
            options.msaa_samples
        );

        let width = width.max(1);
        let height = height.max(1);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let samples = options.msaa_samples.max(1);
        let particles = ParticleResources::new(&device, &scene.particles, format, samples);
        let meshes = MeshResources::new(&device, scene, format, samples);
        let msaa = MsaaTarget::new(&device, format, width, height, samples);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            meshes,
            msaa,
            clear_color: options.clear_color,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.msaa
                .recreate(&self.device, self.config.format, width, height);
            log::debug!("[gpu] surface resized to {}x{}", width, height);
        }
    }

    /// Reconfigure after the surface reported `Lost` or `Outdated`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Encode and present one frame of `scene`.
    pub fn draw(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.meshes.write_uniforms(&self.queue, scene);
        self.particles
            .write_uniforms(&self.queue, scene, self.width, self.height);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let (target, resolve_target) = self.msaa.attachments(&view);
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.meshes.draw(&mut rpass, scene);
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl FrameSink for GpuState<'_> {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.draw(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::meshes::{CameraUniforms, MeshUniforms};
    use super::particles::{pack_instances, ParticleInstance, ParticleUniforms};
    use backdrop_core::particles::ParticleField;
    use backdrop_core::palette::TINTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parse(code: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(code).expect("WGSL parse error");
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator.validate(&module).expect("WGSL validation error");
        module
    }

    fn struct_span(module: &naga::Module, name: &str) -> u32 {
        module
            .types
            .iter()
            .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
                (Some(n), naga::TypeInner::Struct { span, .. }) if n == name => Some(*span),
                _ => None,
            })
            .unwrap_or_else(|| panic!("struct {} not found", name))
    }

    #[test]
    fn particle_shader_matches_uniform_layout() {
        let module = parse(backdrop_core::PARTICLES_WGSL);
        assert_eq!(
            struct_span(&module, "Uniforms") as usize,
            std::mem::size_of::<ParticleUniforms>()
        );
    }

    #[test]
    fn mesh_shader_matches_uniform_layout() {
        let module = parse(backdrop_core::MESH_WGSL);
        assert_eq!(
            struct_span(&module, "Camera") as usize,
            std::mem::size_of::<CameraUniforms>()
        );
        assert_eq!(
            struct_span(&module, "Mesh") as usize,
            std::mem::size_of::<MeshUniforms>()
        );
    }

    #[test]
    fn instances_are_tightly_packed() {
        // position(12) + size(4) + color(12) + pad(4)
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
    }

    #[test]
    fn packing_preserves_particle_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::build(&mut rng, 64, &TINTS);
        let packed = pack_instances(&field);
        assert_eq!(packed.len(), 64);
        let floats: &[f32] = bytemuck::cast_slice(&packed);
        for i in 0..field.len() {
            let row = &floats[i * 8..i * 8 + 8];
            assert_eq!(&row[0..3], &field.positions[i * 3..i * 3 + 3]);
            assert_eq!(row[3], field.sizes[i]);
            assert_eq!(&row[4..7], &field.colors[i * 3..i * 3 + 3]);
        }
    }
}
