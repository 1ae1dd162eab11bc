use crate::camera::CameraUniform;

use super::common::{camera_bind_group_layout, opaque_target, Vertex};
use super::ctx::{RenderCtx, RenderTarget};

/// Plain mesh renderer.
///
/// Draws a caller-supplied triangle list through the camera in the engine
/// fill color. Vertices are world-space positions taken as-is; there is no
/// per-instance scale or offset, so this unit is the neutral counterpart of
/// [`QuadRenderer`](super::QuadRenderer).
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    camera_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    warned_partial_triangle: bool,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the triangle list `vertices` into `target` through `camera`.
    ///
    /// An empty slice records no render pass. A vertex count that is not a
    /// multiple of 3 is rejected (one-time warning) and the draw is skipped.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        camera: CameraUniform,
        vertices: &[Vertex],
    ) {
        if vertices.is_empty() {
            return;
        }
        if vertices.len() % 3 != 0 {
            if !self.warned_partial_triangle {
                log::warn!(
                    "MeshRenderer: vertex count {} is not a multiple of 3; draw skipped",
                    vertices.len()
                );
                self.warned_partial_triangle = true;
            }
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_vertex_capacity(ctx, vertices.len());

        if let Some(ubo) = self.camera_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&camera));
        }
        if let Some(vbo) = self.vbo.as_ref() {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("skiff mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/mesh.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skiff mesh shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout = camera_bind_group_layout(ctx.device, "skiff mesh bgl");

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("skiff mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skiff mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(opaque_target(ctx.surface_format))],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.camera_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.camera_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("skiff mesh camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skiff mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        self.camera_ubo = Some(camera_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(64);
        let new_size = (new_cap * std::mem::size_of::<Vertex>()) as u64;

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("skiff mesh vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn shader_declares_camera_and_entry_points() {
        let src = include_str!("shaders/mesh.wgsl");
        assert!(src.contains("view_proj"));
        assert!(src.contains("@group(0) @binding(0)"));
        assert!(src.contains("fn vs_main"));
        assert!(src.contains("fn fs_main"));
    }
}
