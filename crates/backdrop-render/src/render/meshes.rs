use super::helpers::{self, PipelineSpec};
use backdrop_core::geometry::Topology;
use backdrop_core::shapes::MeshInstance;
use backdrop_core::Scene;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    topology: Topology,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// GPU copies of every scene mesh, indexed like `Scene::meshes`.
pub(crate) struct MeshResources {
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
}

impl MeshResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        scene: &Scene,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(backdrop_core::MESH_WGSL.into()),
        });
        let camera_bgl = helpers::uniform_layout(device, "camera_bgl", wgpu::ShaderStages::VERTEX);
        let mesh_bgl =
            helpers::uniform_layout(device, "mesh_bgl", wgpu::ShaderStages::VERTEX_FRAGMENT);
        let camera_buffer = helpers::uniform_buffer(
            device,
            "camera_uniforms",
            std::mem::size_of::<CameraUniforms>() as u64,
        );
        let camera_bind_group =
            helpers::uniform_bind_group(device, "camera_bg", &camera_bgl, &camera_buffer);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&camera_bgl, &mesh_bgl],
            push_constant_ranges: &[],
        });

        let buffers = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }];
        let pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            helpers::make_pipeline(
                device,
                &PipelineSpec {
                    label,
                    layout: &layout,
                    shader: &shader,
                    buffers: &buffers,
                    topology,
                    color_format,
                    blend: wgpu::BlendState::ALPHA_BLENDING,
                    sample_count,
                },
            )
        };
        let line_pipeline = pipeline("mesh_lines_pipeline", wgpu::PrimitiveTopology::LineList);
        let triangle_pipeline =
            pipeline("mesh_triangles_pipeline", wgpu::PrimitiveTopology::TriangleList);

        let meshes = scene
            .meshes
            .iter()
            .enumerate()
            .map(|(i, m)| upload_mesh(device, &mesh_bgl, i, m))
            .collect();

        Self {
            line_pipeline,
            triangle_pipeline,
            camera_buffer,
            camera_bind_group,
            meshes,
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, scene: &Scene) {
        let cam = CameraUniforms {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
        };
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&cam));
        for (gpu, mesh) in self.meshes.iter().zip(scene.meshes.iter()) {
            let u = MeshUniforms {
                model: mesh.transform.matrix().to_cols_array_2d(),
                color: mesh.material.rgba(),
            };
            queue.write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    /// Draw meshes far to near so translucent layers blend in order.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene: &Scene) {
        rpass.set_bind_group(0, &self.camera_bind_group, &[]);
        for id in scene.back_to_front() {
            let Some(mesh) = self.meshes.get(id.0) else {
                continue;
            };
            let pipeline = match mesh.topology {
                Topology::Lines => &self.line_pipeline,
                Topology::Triangles => &self.triangle_pipeline,
            };
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(1, &mesh.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}

fn upload_mesh(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    index: usize,
    mesh: &MeshInstance,
) -> GpuMesh {
    let geometry = &mesh.geometry;
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("mesh{}_vb", index)),
        contents: bytemuck::cast_slice(&geometry.positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("mesh{}_ib", index)),
        contents: bytemuck::cast_slice(&geometry.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buffer = helpers::uniform_buffer(
        device,
        &format!("mesh{}_uniforms", index),
        std::mem::size_of::<MeshUniforms>() as u64,
    );
    let bind_group =
        helpers::uniform_bind_group(device, &format!("mesh{}_bg", index), layout, &uniform_buffer);
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: geometry.indices.len() as u32,
        topology: geometry.topology,
        uniform_buffer,
        bind_group,
    }
}
