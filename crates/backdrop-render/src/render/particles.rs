use super::helpers::{self, PipelineSpec};
use backdrop_core::particles::ParticleField;
use backdrop_core::Scene;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    pixel_ratio: f32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleInstance {
    position: [f32; 3],
    size: f32,
    color: [f32; 3],
    _pad: f32,
}

// Two triangles spanning [-0.5, 0.5]^2; scaled to the point size in the shader.
const QUAD_CORNERS: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    count: u32,
}

pub(crate) fn pack_instances(field: &ParticleField) -> Vec<ParticleInstance> {
    (0..field.len())
        .map(|i| ParticleInstance {
            position: field.position(i).to_array(),
            size: field.sizes[i],
            color: field.color(i),
            _pad: 0.0,
        })
        .collect()
}

/// Additive: particles brighten whatever is behind them and never occlude.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

impl ParticleResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        field: &ParticleField,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(backdrop_core::PARTICLES_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(
            device,
            "particles_bgl",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "particles_uniforms",
            std::mem::size_of::<ParticleUniforms>() as u64,
        );
        let bind_group = helpers::uniform_bind_group(device, "particles_bg", &bgl, &uniform_buffer);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particles_quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instances = pack_instances(field);
        let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particles_instance_vb"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-particle attributes
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let pipeline = helpers::make_pipeline(
            device,
            &PipelineSpec {
                label: "particles_pipeline",
                layout: &layout,
                shader: &shader,
                buffers: &buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format,
                blend: ADDITIVE,
                sample_count,
            },
        );

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            quad_vb,
            instance_vb,
            count: instances.len() as u32,
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, scene: &Scene, width: u32, height: u32) {
        let u = ParticleUniforms {
            view: scene.camera.view_matrix().to_cols_array_2d(),
            proj: scene.camera.projection_matrix().to_cols_array_2d(),
            model: scene.particle_model().to_cols_array_2d(),
            resolution: [width as f32, height as f32],
            time: scene.time,
            pixel_ratio: scene.pixel_ratio,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
